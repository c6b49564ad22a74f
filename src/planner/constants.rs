/// Weekday keys, cycled from Monday.
pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Inclusive bounds on the requested number of days.
pub const MIN_PLAN_DAYS: u32 = 1;
pub const MAX_PLAN_DAYS: u32 = 7;

/// Redraws allowed when the main dish repeats the previous day's.
pub const MAX_MAIN_REDRAWS: u32 = 5;

// ─────────────────────────────────────────────────────────────────────────────
// Age tiers
// ─────────────────────────────────────────────────────────────────────────────

pub const TODDLER_MAX_AGE: u32 = 5;
pub const YOUNG_CHILD_MAX_AGE: u32 = 9;
pub const PRETEEN_MAX_AGE: u32 = 12;

/// Age cutoffs for main-dish nutrition bands (≤5, ≤10, >10).
pub const NUTRITION_SMALL_MAX_AGE: u32 = 5;
pub const NUTRITION_MEDIUM_MAX_AGE: u32 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Nutrition bands
// ─────────────────────────────────────────────────────────────────────────────

/// Protein, carbs and fat as display ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NutritionBand {
    pub protein: &'static str,
    pub carbs: &'static str,
    pub fat: &'static str,
}

pub const MAIN_BAND_SMALL: NutritionBand = NutritionBand {
    protein: "5-8g",
    carbs: "20-25g",
    fat: "6-8g",
};

pub const MAIN_BAND_MEDIUM: NutritionBand = NutritionBand {
    protein: "8-12g",
    carbs: "25-35g",
    fat: "8-12g",
};

pub const MAIN_BAND_LARGE: NutritionBand = NutritionBand {
    protein: "12-20g",
    carbs: "35-50g",
    fat: "12-18g",
};

pub const FRUIT_BAND: NutritionBand = NutritionBand {
    protein: "0-1g",
    carbs: "15-20g",
    fat: "0g",
};

pub const VEGETABLE_BAND: NutritionBand = NutritionBand {
    protein: "1-2g",
    carbs: "5-8g",
    fat: "0-1g",
};

pub const SNACK_BAND: NutritionBand = NutritionBand {
    protein: "2-5g",
    carbs: "10-15g",
    fat: "3-7g",
};

pub const MILK_BAND: NutritionBand = NutritionBand {
    protein: "8g",
    carbs: "12g",
    fat: "2-8g",
};

pub const SMOOTHIE_BAND: NutritionBand = NutritionBand {
    protein: "5g",
    carbs: "20g",
    fat: "2g",
};

pub const PLAIN_DRINK_BAND: NutritionBand = NutritionBand {
    protein: "0g",
    carbs: "0g",
    fat: "0g",
};

// ─────────────────────────────────────────────────────────────────────────────
// Eligibility rules
// ─────────────────────────────────────────────────────────────────────────────

/// Child allergies that also cover any "nut" allergen and "peanuts".
pub const NUT_ALLERGY_ALIASES: [&str; 2] = ["nuts", "tree nuts"];
pub const NUT_ALLERGEN_TOKEN: &str = "nut";
pub const PEANUT_ALLERGEN: &str = "peanuts";

pub const VEGETARIAN_TRIGGERS: [&str; 1] = ["veg"];
pub const NON_VEGETARIAN_TERMS: [&str; 8] = [
    "turkey", "chicken", "beef", "pork", "ham", "fish", "tuna", "meat",
];

pub const SUGAR_FREE_TRIGGERS: [&str; 2] = ["sugar free", "no sugar"];
pub const SUGARY_TERMS: [&str; 8] = [
    "jelly", "jam", "pb&j", "chocolate", "candy", "sugar", "sweet", "honey",
];

pub const NUT_FREE_TRIGGERS: [&str; 2] = ["nut free", "no nuts"];
pub const NUT_TERMS: [&str; 7] = [
    "peanut", "almond", "cashew", "walnut", "pecan", "nut", "pb&j",
];

/// Allergens the catalog declares, offered as suggestions when entering a roster.
pub const KNOWN_ALLERGENS: [&str; 8] = [
    "peanuts", "nuts", "tree nuts", "dairy", "wheat", "eggs", "fish", "soy",
];

// ─────────────────────────────────────────────────────────────────────────────
// Grocery aggregation
// ─────────────────────────────────────────────────────────────────────────────

pub const CATEGORY_FRUITS: &str = "Fruits";
pub const CATEGORY_VEGETABLES: &str = "Vegetables";
pub const CATEGORY_PROTEINS: &str = "Proteins";
pub const CATEGORY_GRAINS: &str = "Grains";
pub const CATEGORY_DAIRY: &str = "Dairy";
pub const CATEGORY_SNACKS: &str = "Snacks";
pub const CATEGORY_DRINKS: &str = "Drinks";
pub const CATEGORY_OTHER: &str = "Other";

/// Bucket order of the grocery list.
pub const GROCERY_CATEGORIES: [&str; 8] = [
    CATEGORY_FRUITS,
    CATEGORY_VEGETABLES,
    CATEGORY_PROTEINS,
    CATEGORY_GRAINS,
    CATEGORY_DAIRY,
    CATEGORY_SNACKS,
    CATEGORY_DRINKS,
    CATEGORY_OTHER,
];

/// A canonical ingredient recognized in item names.
#[derive(Debug, Clone, Copy)]
pub struct GroceryKeyword {
    /// Dedup token.
    pub token: &'static str,
    /// Substrings of the lowercased item name that emit this ingredient.
    pub triggers: &'static [&'static str],
    /// Shopping list entry.
    pub display: &'static str,
}

/// A category in the keyword cascade.
#[derive(Debug, Clone, Copy)]
pub struct GroceryKeywordGroup {
    pub category: &'static str,
    /// The group claims an item when its name contains any of these.
    pub gate: &'static [&'static str],
    pub keywords: &'static [GroceryKeyword],
}

const fn kw(
    token: &'static str,
    triggers: &'static [&'static str],
    display: &'static str,
) -> GroceryKeyword {
    GroceryKeyword {
        token,
        triggers,
        display,
    }
}

/// Cascade order: first matching group wins.
pub const GROCERY_KEYWORD_GROUPS: [GroceryKeywordGroup; 7] = [
    GroceryKeywordGroup {
        category: CATEGORY_FRUITS,
        gate: &["apple", "banana", "berries", "orange", "grapes"],
        keywords: &[
            kw("apple", &["apple"], "Apples"),
            kw("banana", &["banana"], "Bananas"),
            kw("berries", &["berries"], "Mixed berries"),
            kw("orange", &["orange"], "Oranges"),
            kw("grapes", &["grapes"], "Grapes"),
        ],
    },
    GroceryKeywordGroup {
        category: CATEGORY_VEGETABLES,
        gate: &["carrot", "cucumber", "tomato", "pepper", "edamame"],
        keywords: &[
            kw("carrot", &["carrot"], "Carrots"),
            kw("cucumber", &["cucumber"], "Cucumbers"),
            kw("tomato", &["tomato"], "Cherry tomatoes"),
            kw("pepper", &["pepper"], "Bell peppers"),
            kw("edamame", &["edamame"], "Edamame"),
        ],
    },
    GroceryKeywordGroup {
        category: CATEGORY_PROTEINS,
        gate: &["turkey", "chicken", "tuna", "peanut butter", "beans"],
        keywords: &[
            kw("turkey", &["turkey"], "Turkey slices"),
            kw("chicken", &["chicken"], "Chicken breast"),
            kw("tuna", &["tuna"], "Canned tuna"),
            kw("peanut butter", &["pb", "peanut butter"], "Peanut butter"),
            kw("beans", &["beans"], "Beans"),
        ],
    },
    GroceryKeywordGroup {
        category: CATEGORY_GRAINS,
        gate: &["sandwich", "bread", "wrap", "pasta", "crackers", "quinoa"],
        keywords: &[
            kw("bread", &["sandwich", "bread"], "Whole grain bread"),
            kw("tortilla", &["wrap", "quesadilla"], "Tortillas/wraps"),
            kw("pasta", &["pasta"], "Pasta"),
            kw("crackers", &["crackers"], "Whole grain crackers"),
            kw("quinoa", &["quinoa"], "Quinoa"),
        ],
    },
    GroceryKeywordGroup {
        category: CATEGORY_DAIRY,
        gate: &["cheese", "yogurt", "milk"],
        keywords: &[
            kw("cheese", &["cheese"], "Cheese"),
            kw("yogurt", &["yogurt"], "Yogurt"),
            kw("milk", &["milk"], "Milk"),
        ],
    },
    GroceryKeywordGroup {
        category: CATEGORY_SNACKS,
        gate: &["granola", "animal crackers", "trail mix", "protein bar"],
        keywords: &[
            kw("granola", &["granola"], "Granola bars"),
            kw("animal crackers", &["animal crackers"], "Animal crackers"),
            kw("trail mix", &["trail mix"], "Trail mix"),
            kw("protein bar", &["protein bar"], "Protein bars"),
        ],
    },
    GroceryKeywordGroup {
        category: CATEGORY_DRINKS,
        gate: &["water", "smoothie"],
        keywords: &[
            kw("fruit juice", &["fruit-infused"], "Fruit juice (for infusion)"),
            kw("smoothie ingredients", &["smoothie"], "Smoothie ingredients"),
        ],
    },
];

pub const PEANUT_BUTTER_TOKEN: &str = "peanut butter";
pub const JELLY_TOKEN: &str = "jelly";
pub const TUNA_MARKER: &str = "tuna";

pub const JELLY_ACCOMPANIMENT: &str = "Jelly/Jam";
pub const MAYONNAISE_ACCOMPANIMENT: &str = "Mayonnaise (light)";
pub const REUSABLE_SUPPLIES: [&str; 2] = ["Reusable water bottles", "Lunch containers"];

// ─────────────────────────────────────────────────────────────────────────────
// Staples
// ─────────────────────────────────────────────────────────────────────────────

/// Allergen-free fallback used when allergies leave a group empty.
///
/// Fields: name, description, calories, prep time.
pub const STAPLE_MAIN: (&str, &str, u32, &str) = (
    "Rice & Beans Bowl",
    "Simple rice bowl with beans and mild vegetables.",
    300,
    "10 mins",
);
pub const STAPLE_FRUIT: (&str, &str, u32, &str) = ("Apple Slices", "Sliced apple.", 60, "2 mins");
pub const STAPLE_VEGETABLE: (&str, &str, u32, &str) =
    ("Cucumber Slices", "Cucumber slices.", 15, "2 mins");
pub const STAPLE_SNACK: (&str, &str, u32, &str) =
    ("Rice Cakes", "Plain puffed rice cakes.", 70, "1 min");
pub const STAPLE_DRINK: (&str, &str, u32, &str) = (
    "Water",
    "Hydrating water in a reusable bottle.",
    0,
    "1 min",
);
