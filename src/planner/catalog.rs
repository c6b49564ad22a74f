use std::fmt;

use crate::models::{CatalogItem, FoodGroup};
use crate::planner::constants::*;

/// Age band used to pick catalog subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeTier {
    Toddler,
    YoungChild,
    Preteen,
    Teen,
}

impl AgeTier {
    /// Classify an age. Ages under 3 are treated as toddlers.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=TODDLER_MAX_AGE => AgeTier::Toddler,
            _ if age <= YOUNG_CHILD_MAX_AGE => AgeTier::YoungChild,
            _ if age <= PRETEEN_MAX_AGE => AgeTier::Preteen,
            _ => AgeTier::Teen,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeTier::Toddler => "toddler (3-5)",
            AgeTier::YoungChild => "young child (6-9)",
            AgeTier::Preteen => "preteen (10-12)",
            AgeTier::Teen => "teen (13+)",
        }
    }
}

impl fmt::Display for AgeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Candidate items for each food group at one age.
#[derive(Debug, Clone, Default)]
pub struct MealOptions {
    pub mains: Vec<CatalogItem>,
    pub fruits: Vec<CatalogItem>,
    pub vegetables: Vec<CatalogItem>,
    pub snacks: Vec<CatalogItem>,
    pub drinks: Vec<CatalogItem>,
}

impl MealOptions {
    pub fn group(&self, group: FoodGroup) -> &[CatalogItem] {
        match group {
            FoodGroup::Main => &self.mains,
            FoodGroup::Fruit => &self.fruits,
            FoodGroup::Vegetable => &self.vegetables,
            FoodGroup::Snack => &self.snacks,
            FoodGroup::Drink => &self.drinks,
        }
    }
}

/// Age-appropriate catalog for a child.
pub fn meals_for_age(age: u32) -> MealOptions {
    let tier = AgeTier::from_age(age);
    MealOptions {
        mains: mains(tier),
        fruits: fruits(tier),
        vegetables: vegetables(tier),
        snacks: snacks(tier),
        drinks: drinks(tier),
    }
}

/// The allergen-free staple for a group.
pub fn staple(group: FoodGroup) -> CatalogItem {
    let (name, description, calories, prep_time) = match group {
        FoodGroup::Main => STAPLE_MAIN,
        FoodGroup::Fruit => STAPLE_FRUIT,
        FoodGroup::Vegetable => STAPLE_VEGETABLE,
        FoodGroup::Snack => STAPLE_SNACK,
        FoodGroup::Drink => STAPLE_DRINK,
    };
    CatalogItem::new(name, description, calories, &[], prep_time)
}

fn mains(tier: AgeTier) -> Vec<CatalogItem> {
    match tier {
        AgeTier::Toddler => vec![
            CatalogItem::new(
                "PB&J Sandwich (Cut into Quarters)",
                "Simple peanut butter and jelly sandwich cut into small, manageable pieces.",
                280,
                &["peanuts", "wheat"],
                "3-5 mins",
            ),
            CatalogItem::new(
                "Cheese & Crackers Plate",
                "Small cheese cubes with whole grain crackers.",
                220,
                &["dairy", "wheat"],
                "2 mins",
            ),
            CatalogItem::new(
                "Mini Turkey Wrap",
                "Small tortilla with turkey and mild cheese.",
                240,
                &["dairy", "wheat"],
                "4 mins",
            ),
        ],
        AgeTier::YoungChild => vec![
            CatalogItem::new(
                "Turkey & Cheese Sandwich",
                "Classic sandwich with lean turkey and cheese.",
                320,
                &["dairy", "wheat"],
                "5 mins",
            ),
            CatalogItem::new(
                "Pasta Salad with Vegetables",
                "Cold pasta with colorful vegetables and light dressing.",
                290,
                &["wheat"],
                "10 mins (prep night before)",
            ),
            CatalogItem::new(
                "Quesadilla Triangles",
                "Cheese quesadilla cut into triangles.",
                310,
                &["dairy", "wheat"],
                "7 mins",
            ),
        ],
        AgeTier::Preteen | AgeTier::Teen => vec![
            CatalogItem::new(
                "Chicken Wrap with Veggies",
                "Tortilla wrap with grilled chicken and fresh vegetables.",
                380,
                &["wheat"],
                "8 mins",
            ),
            CatalogItem::new(
                "Tuna Sandwich on Whole Grain",
                "Tuna mixed with light mayo on whole grain bread.",
                340,
                &["fish", "wheat", "eggs"],
                "7 mins",
            ),
            CatalogItem::new(
                "Quinoa Salad with Beans",
                "Protein-packed quinoa salad with beans and vegetables.",
                if tier == AgeTier::Teen { 420 } else { 360 },
                &[],
                "15 mins (prep night before)",
            ),
        ],
    }
}

fn snacks(tier: AgeTier) -> Vec<CatalogItem> {
    match tier {
        AgeTier::Toddler => vec![
            CatalogItem::new(
                "Animal Crackers",
                "Fun animal-shaped crackers.",
                120,
                &["wheat"],
                "1 min",
            ),
            CatalogItem::new(
                "Yogurt Tube",
                "Kid-friendly yogurt in a tube.",
                90,
                &["dairy"],
                "1 min",
            ),
        ],
        AgeTier::YoungChild | AgeTier::Preteen => vec![
            CatalogItem::new(
                "Granola Bar",
                "Whole grain granola bar with light sweetness.",
                140,
                &["nuts", "wheat"],
                "1 min",
            ),
            CatalogItem::new(
                "String Cheese",
                "Fun-to-eat string cheese stick.",
                80,
                &["dairy"],
                "1 min",
            ),
        ],
        AgeTier::Teen => vec![
            CatalogItem::new(
                "Trail Mix",
                "Energy-boosting mix of nuts, seeds, and dried fruit.",
                200,
                &["nuts"],
                "1 min",
            ),
            CatalogItem::new(
                "Protein Bar",
                "Protein-rich bar to support active teens.",
                220,
                &["nuts", "soy"],
                "1 min",
            ),
        ],
    }
}

/// Shared fruit list; portion wording and calories scale by tier.
fn fruits(tier: AgeTier) -> Vec<CatalogItem> {
    let toddler = tier == AgeTier::Toddler;
    let young = tier == AgeTier::YoungChild;
    let by_tier = |small: u32, medium: u32, large: u32| {
        if toddler {
            small
        } else if young {
            medium
        } else {
            large
        }
    };

    vec![
        CatalogItem::new(
            "Apple Slices",
            format!("{} sliced apple.", if toddler { "Thinly" } else { "Medium" }),
            by_tier(40, 60, 80),
            &[],
            "2 mins",
        ),
        CatalogItem::new(
            "Banana",
            format!("{} banana.", if toddler { "Half" } else { "Whole" }),
            by_tier(45, 90, 105),
            &[],
            "1 min",
        ),
        CatalogItem::new(
            "Berries Mix",
            format!(
                "{} portion of mixed berries.",
                if toddler {
                    "Small"
                } else if young {
                    "Medium"
                } else {
                    "Large"
                }
            ),
            by_tier(30, 50, 70),
            &[],
            "2 mins",
        ),
        CatalogItem::new(
            "Orange Segments",
            format!(
                "{} orange cut into easy-to-eat segments.",
                if toddler { "Small" } else { "Regular" }
            ),
            by_tier(35, 60, 80),
            &[],
            "3 mins",
        ),
        CatalogItem::new(
            "Grapes",
            if toddler {
                "Cut in half grapes (cut for safety)."
            } else {
                "Whole grapes (washed and ready to eat)."
            },
            by_tier(30, 55, 75),
            &[],
            if toddler { "4 mins" } else { "2 mins" },
        ),
    ]
}

fn vegetables(tier: AgeTier) -> Vec<CatalogItem> {
    let toddler = tier == AgeTier::Toddler;
    let cut = if toddler { "Thin" } else { "Regular" };

    vec![
        CatalogItem::new(
            "Carrot Sticks",
            if toddler {
                "Thin carrot sticks with dip.".to_string()
            } else {
                "Regular carrot sticks.".to_string()
            },
            if toddler { 25 } else { 35 },
            &[],
            "3 mins",
        ),
        CatalogItem::new(
            "Cucumber Slices",
            format!("{cut} cucumber slices."),
            15,
            &[],
            "2 mins",
        ),
        CatalogItem::new(
            "Cherry Tomatoes",
            format!(
                "{} cherry tomatoes.",
                if toddler { "Cut in quarters" } else { "Whole" }
            ),
            20,
            &[],
            if toddler { "3 mins" } else { "1 min" },
        ),
        CatalogItem::new(
            "Bell Pepper Strips",
            format!("{cut} bell pepper strips."),
            20,
            &[],
            "3 mins",
        ),
        CatalogItem::new(
            "Edamame",
            format!(
                "{} portion of edamame.",
                if toddler { "Small" } else { "Regular" }
            ),
            if toddler { 50 } else { 90 },
            &["soy"],
            "2 mins",
        ),
    ]
}

fn drinks(tier: AgeTier) -> Vec<CatalogItem> {
    let milk = match tier {
        AgeTier::Toddler => ("Whole milk.", 100),
        AgeTier::YoungChild => ("2% milk.", 90),
        AgeTier::Preteen => ("2% milk.", 80),
        AgeTier::Teen => ("Low-fat milk.", 80),
    };

    let mut drinks = vec![
        CatalogItem::new(
            "Water",
            "Hydrating water in a reusable bottle.",
            0,
            &[],
            "1 min",
        ),
        CatalogItem::new("Milk", milk.0, milk.1, &["dairy"], "1 min"),
    ];

    if tier != AgeTier::Toddler {
        drinks.push(CatalogItem::new(
            "Fruit-Infused Water",
            "Water with a splash of natural fruit juice.",
            15,
            &[],
            "2 mins",
        ));
    }

    if matches!(tier, AgeTier::Preteen | AgeTier::Teen) {
        drinks.push(CatalogItem::new(
            "Smoothie",
            "Fruit and yogurt smoothie in a thermos.",
            if tier == AgeTier::Teen { 180 } else { 150 },
            &["dairy"],
            "5 mins",
        ));
    }

    drinks
}
