use crate::models::{CatalogItem, GroceryList, LunchboxPlan};
use crate::planner::catalog::{AgeTier, MealOptions};
use crate::service::PlanSource;

/// Render a plan as text, one block per child.
pub fn format_lunchbox_plan(plan: &LunchboxPlan) -> String {
    let mut out = String::new();

    for child in &plan.children {
        out.push_str(&format!(
            "=== {} (age {}) ===\n",
            child.child_name, child.age
        ));

        for (day, lunch) in &child.daily_lunches {
            out.push_str(&format!("\n{} - {} cal\n", day, lunch.total_calories()));
            let roles = ["Main", "Fruit", "Vegetable", "Snack", "Drink"];
            for (role, item) in roles.iter().zip(lunch.items()) {
                out.push_str(&format!(
                    "  {:<10} {} ({} cal, {})\n",
                    role, item.name, item.nutritional_info.calories, item.prep_time
                ));
            }
        }
        out.push('\n');
    }

    out.push_str(&format_grocery_list(&plan.grocery_list));
    out
}

/// Render the grocery list as a checklist.
pub fn format_grocery_list(grocery_list: &GroceryList) -> String {
    if grocery_list.is_empty() {
        return "Grocery list: (empty)\n".to_string();
    }

    let mut out = String::from("--- Grocery List ---\n");
    for (category, items) in grocery_list {
        out.push_str(&format!("\n{}:\n", category));
        for item in items {
            out.push_str(&format!("  [ ] {}\n", item));
        }
    }
    out
}

/// Display a plan and where it came from.
pub fn display_lunchbox_plan(plan: &LunchboxPlan, source: PlanSource) {
    println!();
    match source {
        PlanSource::Remote => println!("Plan generated by the remote planner."),
        PlanSource::RuleBased => println!("Plan generated by the rule-based planner."),
    }
    println!();
    print!("{}", format_lunchbox_plan(plan));
}

fn format_items(title: &str, items: &[CatalogItem]) -> String {
    let mut out = format!("\n{} ({} items)\n", title, items.len());
    for item in items {
        let allergens = if item.allergens.is_empty() {
            "none".to_string()
        } else {
            item.allergens.join(", ")
        };
        out.push_str(&format!(
            "  {} - {} cal, {}, allergens: {}\n    {}\n",
            item.name, item.calories, item.prep_time, allergens, item.description
        ));
    }
    out
}

/// Display the catalog for an age.
pub fn display_catalog(age: u32, options: &MealOptions) {
    println!();
    println!("=== Catalog for age {} ({}) ===", age, AgeTier::from_age(age));
    print!("{}", format_items("Mains", &options.mains));
    print!("{}", format_items("Fruits", &options.fruits));
    print!("{}", format_items("Vegetables", &options.vegetables));
    print!("{}", format_items("Snacks", &options.snacks));
    print!("{}", format_items("Drinks", &options.drinks));
    println!();
}
