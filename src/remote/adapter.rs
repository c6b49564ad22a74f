use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{LunchboxError, Result};
use crate::models::{Child, ChildLunchPlan, DailyLunch, FoodGroup, LunchItem, NutritionalInfo};
use crate::planner::assembler::weekday;
use crate::planner::eligibility::is_allergen_safe;
use crate::remote::RemoteChildPlan;

#[derive(Debug, Deserialize)]
struct RemotePayload {
    #[serde(alias = "meal_plan")]
    daily_lunches: IndexMap<String, RemoteDay>,
    grocery_list: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RemoteDay {
    main: RemoteItem,
    fruit: RemoteItem,
    vegetable: RemoteItem,
    snack: RemoteItem,
    drink: RemoteItem,
}

#[derive(Debug, Deserialize)]
struct RemoteItem {
    name: String,
    description: String,
    nutritional_info: RemoteNutrition,
    allergens: Vec<String>,
    prep_time: String,
}

#[derive(Debug, Deserialize)]
struct RemoteNutrition {
    calories: u32,
    protein: String,
    carbs: String,
    fat: String,
}

impl RemoteDay {
    fn into_items(self) -> [(FoodGroup, RemoteItem); 5] {
        [
            (FoodGroup::Main, self.main),
            (FoodGroup::Fruit, self.fruit),
            (FoodGroup::Vegetable, self.vegetable),
            (FoodGroup::Snack, self.snack),
            (FoodGroup::Drink, self.drink),
        ]
    }
}

fn invalid(message: String) -> LunchboxError {
    LunchboxError::Remote(message)
}

/// Drop a surrounding Markdown code fence, if any.
fn strip_code_fence(body: &str) -> &str {
    let trimmed = body.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn convert_item(
    child: &Child,
    day: &str,
    group: FoodGroup,
    item: RemoteItem,
) -> Result<LunchItem> {
    if item.name.trim().is_empty() {
        return Err(invalid(format!("{day} {group} has an empty name")));
    }
    if !is_allergen_safe(&item.allergens, &child.normalized_allergies()) {
        return Err(invalid(format!(
            "{day} {group} '{}' conflicts with {}'s allergies",
            item.name, child.name
        )));
    }

    Ok(LunchItem {
        name: item.name,
        description: item.description,
        nutritional_info: NutritionalInfo {
            calories: item.nutritional_info.calories,
            protein: item.nutritional_info.protein,
            carbs: item.nutritional_info.carbs,
            fat: item.nutritional_info.fat,
        },
        allergens: item.allergens,
        prep_time: item.prep_time,
    })
}

/// Convert a remote planner response body into a typed child plan.
///
/// Every field is required. Each requested weekday must be present, and no
/// item may conflict with the child's allergies. Extra days are ignored.
pub fn parse_child_plan(child: &Child, days: u32, body: &str) -> Result<RemoteChildPlan> {
    let mut payload: RemotePayload = serde_json::from_str(strip_code_fence(body))
        .map_err(|e| invalid(format!("malformed payload: {e}")))?;

    let mut plan = ChildLunchPlan::new(child.name.clone(), child.age);
    for day_index in 0..days as usize {
        let day = weekday(day_index);
        let remote_day = payload
            .daily_lunches
            .shift_remove(day)
            .ok_or_else(|| invalid(format!("missing {day}")))?;

        let [main, fruit, vegetable, snack, drink] = remote_day
            .into_items()
            .map(|(group, item)| convert_item(child, day, group, item));

        plan.daily_lunches.insert(
            day.to_string(),
            DailyLunch {
                main: main?,
                fruit: fruit?,
                vegetable: vegetable?,
                snack: snack?,
                drink: drink?,
            },
        );
    }

    if !payload.daily_lunches.is_empty() {
        debug!(
            child = %child.name,
            extra = payload.daily_lunches.len(),
            "ignoring days beyond the requested range"
        );
    }

    Ok(RemoteChildPlan {
        plan,
        grocery_list: payload.grocery_list,
    })
}
