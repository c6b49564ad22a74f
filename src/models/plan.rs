use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::models::{CatalogItem, FoodGroup};

/// Shopping list keyed by category, in insertion order.
pub type GroceryList = IndexMap<String, Vec<String>>;

/// Coarse, band-derived nutrition estimate for one lunch item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalInfo {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// A catalog item selected into a lunch, annotated with nutrition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchItem {
    pub name: String,
    pub description: String,
    pub nutritional_info: NutritionalInfo,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub prep_time: String,
}

impl LunchItem {
    pub fn from_catalog(item: &CatalogItem, nutritional_info: NutritionalInfo) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            nutritional_info,
            allergens: item.allergens.clone(),
            prep_time: item.prep_time.clone(),
        }
    }
}

/// Exactly one item per food group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLunch {
    pub main: LunchItem,
    pub fruit: LunchItem,
    pub vegetable: LunchItem,
    pub snack: LunchItem,
    pub drink: LunchItem,
}

impl DailyLunch {
    pub fn get(&self, group: FoodGroup) -> &LunchItem {
        match group {
            FoodGroup::Main => &self.main,
            FoodGroup::Fruit => &self.fruit,
            FoodGroup::Vegetable => &self.vegetable,
            FoodGroup::Snack => &self.snack,
            FoodGroup::Drink => &self.drink,
        }
    }

    /// Items in main, fruit, vegetable, snack, drink order.
    pub fn items(&self) -> [&LunchItem; 5] {
        [
            &self.main,
            &self.fruit,
            &self.vegetable,
            &self.snack,
            &self.drink,
        ]
    }

    /// Total calories across the five items.
    pub fn total_calories(&self) -> u32 {
        self.items()
            .iter()
            .map(|item| item.nutritional_info.calories)
            .sum()
    }
}

/// One child's lunches keyed by weekday name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildLunchPlan {
    pub child_name: String,
    pub age: u32,
    pub daily_lunches: IndexMap<String, DailyLunch>,
}

impl ChildLunchPlan {
    pub fn new(child_name: impl Into<String>, age: u32) -> Self {
        Self {
            child_name: child_name.into(),
            age,
            daily_lunches: IndexMap::new(),
        }
    }

    /// Main dish names in day order.
    pub fn main_names(&self) -> Vec<&str> {
        self.daily_lunches
            .values()
            .map(|lunch| lunch.main.name.as_str())
            .collect()
    }
}

/// The complete plan for a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunchboxPlan {
    pub children: Vec<ChildLunchPlan>,
    #[serde(default)]
    pub grocery_list: GroceryList,
}

impl LunchboxPlan {
    /// Every lunch item: child order, then day order, then main to drink.
    pub fn all_items(&self) -> impl Iterator<Item = &LunchItem> {
        self.children
            .iter()
            .flat_map(|child| child.daily_lunches.values())
            .flat_map(|lunch| lunch.items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, calories: u32) -> LunchItem {
        LunchItem {
            name: name.to_string(),
            description: String::new(),
            nutritional_info: NutritionalInfo {
                calories,
                protein: "0g".to_string(),
                carbs: "0g".to_string(),
                fat: "0g".to_string(),
            },
            allergens: vec![],
            prep_time: "1 min".to_string(),
        }
    }

    fn lunch(main: &str) -> DailyLunch {
        DailyLunch {
            main: item(main, 300),
            fruit: item("Banana", 90),
            vegetable: item("Carrot Sticks", 35),
            snack: item("String Cheese", 80),
            drink: item("Water", 0),
        }
    }

    #[test]
    fn test_total_calories() {
        assert_eq!(lunch("Quesadilla Triangles").total_calories(), 505);
    }

    #[test]
    fn test_all_items_order() {
        let mut child = ChildLunchPlan::new("Ada", 7);
        child.daily_lunches.insert("Monday".to_string(), lunch("A"));
        child.daily_lunches.insert("Tuesday".to_string(), lunch("B"));
        let plan = LunchboxPlan {
            children: vec![child],
            grocery_list: GroceryList::new(),
        };

        let names: Vec<&str> = plan.all_items().map(|i| i.name.as_str()).collect();
        assert_eq!(names.len(), 10);
        assert_eq!(names[0], "A");
        assert_eq!(names[4], "Water");
        assert_eq!(names[5], "B");
    }

    #[test]
    fn test_day_order_survives_serialization() {
        let mut child = ChildLunchPlan::new("Ada", 7);
        child.daily_lunches.insert("Monday".to_string(), lunch("A"));
        child.daily_lunches.insert("Tuesday".to_string(), lunch("B"));

        let json = serde_json::to_string(&child).unwrap();
        assert!(json.find("Monday").unwrap() < json.find("Tuesday").unwrap());

        let back: ChildLunchPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.main_names(), vec!["A", "B"]);
    }
}
