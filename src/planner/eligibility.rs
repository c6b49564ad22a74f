use tracing::warn;

use crate::config::StarvationPolicy;
use crate::error::{LunchboxError, Result};
use crate::models::{CatalogItem, Child, FoodGroup};
use crate::planner::catalog::{staple, MealOptions};
use crate::planner::constants::*;

/// Preference intents the filter enforces. Other preferences are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceIntent {
    Vegetarian,
    SugarFree,
    NutFree,
}

impl PreferenceIntent {
    fn excluded_terms(&self) -> &'static [&'static str] {
        match self {
            PreferenceIntent::Vegetarian => &NON_VEGETARIAN_TERMS,
            PreferenceIntent::SugarFree => &SUGARY_TERMS,
            PreferenceIntent::NutFree => &NUT_TERMS,
        }
    }

    /// Intents expressed by one lowercased preference string.
    fn parse(preference: &str) -> Vec<PreferenceIntent> {
        let mut intents = Vec::new();
        if VEGETARIAN_TRIGGERS.iter().any(|t| preference.contains(t)) {
            intents.push(PreferenceIntent::Vegetarian);
        }
        if SUGAR_FREE_TRIGGERS.iter().any(|t| preference.contains(t)) {
            intents.push(PreferenceIntent::SugarFree);
        }
        if NUT_FREE_TRIGGERS.iter().any(|t| preference.contains(t)) {
            intents.push(PreferenceIntent::NutFree);
        }
        intents
    }
}

/// Collect the recognized intents across a child's preferences.
pub fn recognized_intents(preferences: &[String]) -> Vec<PreferenceIntent> {
    let mut intents = Vec::new();
    for preference in preferences {
        for intent in PreferenceIntent::parse(&preference.to_lowercase()) {
            if !intents.contains(&intent) {
                intents.push(intent);
            }
        }
    }
    intents
}

/// Whether an item allergen matches a child allergy. Both must be lowercase.
///
/// Bidirectional substring match, plus "nuts"/"tree nuts" covering any
/// allergen containing "nut" and "peanuts".
pub fn allergen_matches(allergen: &str, allergy: &str) -> bool {
    if allergen.is_empty() || allergy.is_empty() {
        return false;
    }
    if allergen.contains(allergy) || allergy.contains(allergen) {
        return true;
    }
    NUT_ALLERGY_ALIASES.contains(&allergy)
        && (allergen.contains(NUT_ALLERGEN_TOKEN) || allergen == PEANUT_ALLERGEN)
}

/// True when none of the item's allergens match any of the allergies.
pub fn is_allergen_safe(allergens: &[String], allergies: &[String]) -> bool {
    !allergens.iter().any(|allergen| {
        let allergen = allergen.trim().to_lowercase();
        allergies
            .iter()
            .any(|allergy| allergen_matches(&allergen, &allergy.trim().to_lowercase()))
    })
}

pub fn filter_for_allergies(items: &[CatalogItem], allergies: &[String]) -> Vec<CatalogItem> {
    if allergies.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| is_allergen_safe(&item.allergens, allergies))
        .cloned()
        .collect()
}

/// Whether an item survives the recognized preference intents.
pub fn satisfies_preferences(item: &CatalogItem, intents: &[PreferenceIntent]) -> bool {
    let text = item.searchable_text();
    intents
        .iter()
        .all(|intent| !intent.excluded_terms().iter().any(|term| text.contains(term)))
}

pub fn filter_for_preferences(items: &[CatalogItem], preferences: &[String]) -> Vec<CatalogItem> {
    let intents = recognized_intents(preferences);
    if intents.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| satisfies_preferences(item, &intents))
        .cloned()
        .collect()
}

/// Items dropped by neither rule.
pub fn eligible_items(items: &[CatalogItem], child: &Child) -> Vec<CatalogItem> {
    let allergies = child.normalized_allergies();
    let preferences = child.normalized_preferences();
    filter_for_preferences(&filter_for_allergies(items, &allergies), &preferences)
}

/// Per-group eligible lists for one child.
///
/// Only built by [`EligibleMenu::for_child`], so every list is non-empty.
#[derive(Debug, Clone)]
pub struct EligibleMenu {
    mains: Vec<CatalogItem>,
    fruits: Vec<CatalogItem>,
    vegetables: Vec<CatalogItem>,
    snacks: Vec<CatalogItem>,
    drinks: Vec<CatalogItem>,
}

impl EligibleMenu {
    /// Filter every group of `options` for `child`.
    ///
    /// When allergies and preferences together empty a group, `policy`
    /// decides between failing and the group's staple.
    pub fn for_child(
        child: &Child,
        options: &MealOptions,
        policy: StarvationPolicy,
    ) -> Result<Self> {
        let allergies = child.normalized_allergies();
        let preferences = child.normalized_preferences();

        let eligible = |group: FoodGroup| -> Result<Vec<CatalogItem>> {
            let safe = filter_for_allergies(options.group(group), &allergies);
            let safe_count = safe.len();
            let items = filter_for_preferences(&safe, &preferences);
            if !items.is_empty() {
                return Ok(items);
            }

            let cause = if safe_count == 0 {
                "allergies"
            } else {
                "preferences"
            };
            match policy {
                StarvationPolicy::Fail => Err(LunchboxError::NoEligibleItems {
                    child: child.name.clone(),
                    group: group.to_string(),
                }),
                StarvationPolicy::Staple => {
                    let substitute = staple(group);
                    warn!(
                        child = %child.name,
                        group = %group,
                        staple = %substitute.name,
                        "{} exclude every {} item, substituting staple",
                        cause,
                        group
                    );
                    Ok(vec![substitute])
                }
            }
        };

        Ok(Self {
            mains: eligible(FoodGroup::Main)?,
            fruits: eligible(FoodGroup::Fruit)?,
            vegetables: eligible(FoodGroup::Vegetable)?,
            snacks: eligible(FoodGroup::Snack)?,
            drinks: eligible(FoodGroup::Drink)?,
        })
    }

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
