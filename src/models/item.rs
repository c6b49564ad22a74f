use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five lunch roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodGroup {
    Main,
    Fruit,
    Vegetable,
    Snack,
    Drink,
}

impl FoodGroup {
    /// All groups in lunchbox order.
    pub const ALL: [FoodGroup; 5] = [
        FoodGroup::Main,
        FoodGroup::Fruit,
        FoodGroup::Vegetable,
        FoodGroup::Snack,
        FoodGroup::Drink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodGroup::Main => "main",
            FoodGroup::Fruit => "fruit",
            FoodGroup::Vegetable => "vegetable",
            FoodGroup::Snack => "snack",
            FoodGroup::Drink => "drink",
        }
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub description: String,
    pub calories: u32,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub prep_time: String,
}

impl CatalogItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        calories: u32,
        allergens: &[&str],
        prep_time: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            calories,
            allergens: allergens.iter().map(|a| a.to_string()).collect(),
            prep_time: prep_time.into(),
        }
    }

    /// Lowercased name and description, used by the preference rule.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}
