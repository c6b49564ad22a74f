pub mod assembler;
pub mod catalog;
pub mod constants;
pub mod eligibility;
pub mod grocery;
pub mod nutrition;
pub mod picker;

pub use assembler::{assemble_child_plan, weekday};
pub use catalog::{meals_for_age, staple, AgeTier, MealOptions};
pub use constants::*;
pub use eligibility::{
    allergen_matches, eligible_items, filter_for_allergies, filter_for_preferences,
    is_allergen_safe, recognized_intents, EligibleMenu, PreferenceIntent,
};
pub use grocery::{build_grocery_list, build_grocery_list_from_items, merge_grocery_lists};
pub use nutrition::{annotate, nutrition_band};
pub use picker::{ItemPicker, RandomPicker, ScriptedPicker};

use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{Child, ChildLunchPlan, LunchboxPlan, LunchboxRequest};

/// Catalog, filter and assemble one child's plan.
pub fn plan_child(
    child: &Child,
    days: usize,
    config: &PlannerConfig,
    picker: &mut dyn ItemPicker,
) -> Result<ChildLunchPlan> {
    let tier = AgeTier::from_age(child.age);
    debug!(child = %child.name, age = child.age, %tier, "planning child");

    let options = meals_for_age(child.age);
    let menu = EligibleMenu::for_child(child, &options, config.starvation)?;
    Ok(assemble_child_plan(
        child,
        days,
        &menu,
        config.max_main_redraws,
        picker,
    ))
}

/// Generate a full plan with the rule-based engine.
///
/// Validates the request, plans each child independently, then builds the
/// grocery list over the whole plan.
pub fn generate_lunchbox_plan(
    request: &LunchboxRequest,
    config: &PlannerConfig,
    picker: &mut dyn ItemPicker,
) -> Result<LunchboxPlan> {
    request.validate()?;
    info!(
        children = request.children.len(),
        days = request.days,
        "generating lunchbox plan"
    );

    let days = request.days as usize;
    let children = request
        .children
        .iter()
        .map(|child| plan_child(child, days, config, picker))
        .collect::<Result<Vec<_>>>()?;

    let mut plan = LunchboxPlan {
        children,
        grocery_list: Default::default(),
    };
    plan.grocery_list = build_grocery_list(&plan);

    info!(
        categories = plan.grocery_list.len(),
        "lunchbox plan generated"
    );
    Ok(plan)
}
