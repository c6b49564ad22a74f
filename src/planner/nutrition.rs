use crate::models::{CatalogItem, FoodGroup, NutritionalInfo};
use crate::planner::constants::*;

/// Band for a food group at a given age.
///
/// Only mains vary by age; drinks special-case "Milk" and "Smoothie" by exact name.
pub fn nutrition_band(group: FoodGroup, item_name: &str, age: u32) -> NutritionBand {
    match group {
        FoodGroup::Main => {
            if age <= NUTRITION_SMALL_MAX_AGE {
                MAIN_BAND_SMALL
            } else if age <= NUTRITION_MEDIUM_MAX_AGE {
                MAIN_BAND_MEDIUM
            } else {
                MAIN_BAND_LARGE
            }
        }
        FoodGroup::Fruit => FRUIT_BAND,
        FoodGroup::Vegetable => VEGETABLE_BAND,
        FoodGroup::Snack => SNACK_BAND,
        FoodGroup::Drink => match item_name {
            "Milk" => MILK_BAND,
            "Smoothie" => SMOOTHIE_BAND,
            _ => PLAIN_DRINK_BAND,
        },
    }
}

/// Nutrition record for an item: catalog calories plus the band strings.
pub fn annotate(item: &CatalogItem, group: FoodGroup, age: u32) -> NutritionalInfo {
    let band = nutrition_band(group, &item.name, age);
    NutritionalInfo {
        calories: item.calories,
        protein: band.protein.to_string(),
        carbs: band.carbs.to_string(),
        fat: band.fat.to_string(),
    }
}
