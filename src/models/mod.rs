mod child;
mod item;
mod plan;

pub use child::{Child, LunchboxRequest};
pub use item::{CatalogItem, FoodGroup};
pub use plan::{ChildLunchPlan, DailyLunch, GroceryList, LunchItem, LunchboxPlan, NutritionalInfo};
