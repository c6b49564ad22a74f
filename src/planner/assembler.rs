use tracing::debug;

use crate::models::{CatalogItem, Child, ChildLunchPlan, DailyLunch, FoodGroup, LunchItem};
use crate::planner::constants::DAYS_OF_WEEK;
use crate::planner::eligibility::EligibleMenu;
use crate::planner::nutrition::annotate;
use crate::planner::picker::ItemPicker;

/// Weekday key for a zero-based day index.
pub fn weekday(index: usize) -> &'static str {
    DAYS_OF_WEEK[index % DAYS_OF_WEEK.len()]
}

/// Choose the main dish index, avoiding a repeat of `previous_main`.
///
/// Redraws up to `max_redraws` times. If the dish still repeats and another
/// one exists, the draw is made from the remaining dishes.
fn choose_main(
    mains: &[CatalogItem],
    first_draw: usize,
    previous_main: Option<&str>,
    max_redraws: u32,
    picker: &mut dyn ItemPicker,
) -> usize {
    let Some(previous) = previous_main else {
        return first_draw;
    };
    if mains.len() <= 1 {
        return first_draw;
    }

    let mut index = first_draw;
    let mut attempts = 0;
    while mains[index].name == previous && attempts < max_redraws {
        index = picker.pick(mains.len());
        attempts += 1;
    }

    if mains[index].name == previous {
        let others: Vec<usize> = (0..mains.len())
            .filter(|&i| mains[i].name != previous)
            .collect();
        if !others.is_empty() {
            debug!(previous, attempts, "main still repeats after redraws");
            index = others[picker.pick(others.len())];
        }
    }

    index
}

fn draw<'a>(
    menu: &'a EligibleMenu,
    group: FoodGroup,
    picker: &mut dyn ItemPicker,
) -> &'a CatalogItem {
    let items = menu.group(group);
    &items[picker.pick(items.len())]
}

fn lunch_item(item: &CatalogItem, group: FoodGroup, age: u32) -> LunchItem {
    LunchItem::from_catalog(item, annotate(item, group, age))
}

/// Build one child's plan for `days` days from an eligible menu.
///
/// Each day draws main, fruit, vegetable, snack, drink in that order, then
/// redraws the main if it repeats the previous day's.
pub fn assemble_child_plan(
    child: &Child,
    days: usize,
    menu: &EligibleMenu,
    max_redraws: u32,
    picker: &mut dyn ItemPicker,
) -> ChildLunchPlan {
    let mut plan = ChildLunchPlan::new(child.name.clone(), child.age);
    let mut previous_main: Option<String> = None;

    for day_index in 0..days {
        let day = weekday(day_index);

        let mains = menu.group(FoodGroup::Main);
        let main_draw = picker.pick(mains.len());
        let fruit = draw(menu, FoodGroup::Fruit, picker);
        let vegetable = draw(menu, FoodGroup::Vegetable, picker);
        let snack = draw(menu, FoodGroup::Snack, picker);
        let drink = draw(menu, FoodGroup::Drink, picker);

        let main_index = choose_main(
            mains,
            main_draw,
            previous_main.as_deref(),
            max_redraws,
            picker,
        );
        let main = &mains[main_index];

        debug!(child = %child.name, day, main = %main.name, "assembled lunch");

        previous_main = Some(main.name.clone());
        plan.daily_lunches.insert(
            day.to_string(),
            DailyLunch {
                main: lunch_item(main, FoodGroup::Main, child.age),
                fruit: lunch_item(fruit, FoodGroup::Fruit, child.age),
                vegetable: lunch_item(vegetable, FoodGroup::Vegetable, child.age),
                snack: lunch_item(snack, FoodGroup::Snack, child.age),
                drink: lunch_item(drink, FoodGroup::Drink, child.age),
            },
        );
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StarvationPolicy;
    use crate::planner::catalog::meals_for_age;
    use crate::planner::constants::MAX_MAIN_REDRAWS;
    use crate::planner::picker::{RandomPicker, ScriptedPicker};

    fn menu_for(child: &Child) -> EligibleMenu {
        EligibleMenu::for_child(child, &meals_for_age(child.age), StarvationPolicy::Fail).unwrap()
    }

    #[test]
    fn test_weekday_cycle() {
        assert_eq!(weekday(0), "Monday");
        assert_eq!(weekday(6), "Sunday");
        assert_eq!(weekday(7), "Monday");
    }

    #[test]
    fn test_scripted_plan_is_exact() {
        let child = Child::new("Ada", 4);
        let menu = menu_for(&child);
        // Day 1: main 1, fruit 1, veg 0, snack 1, drink 1.
        let mut picker = ScriptedPicker::new(vec![1, 1, 0, 1, 1]);
        let plan = assemble_child_plan(&child, 1, &menu, MAX_MAIN_REDRAWS, &mut picker);

        let monday = &plan.daily_lunches["Monday"];
        assert_eq!(monday.main.name, "Cheese & Crackers Plate");
        assert_eq!(monday.fruit.name, "Banana");
        assert_eq!(monday.vegetable.name, "Carrot Sticks");
        assert_eq!(monday.snack.name, "Yogurt Tube");
        assert_eq!(monday.drink.name, "Milk");
        assert_eq!(monday.drink.nutritional_info.protein, "8g");
        assert_eq!(monday.main.nutritional_info.protein, "5-8g");
        assert_eq!(picker.draws(), 5);
    }

    #[test]
    fn test_repeat_main_is_redrawn() {
        let child = Child::new("Ada", 4);
        let menu = menu_for(&child);
        // Both days draw main 0 first; the redraw on day 2 picks main 2.
        let mut picker = ScriptedPicker::new(vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2]);
        let plan = assemble_child_plan(&child, 2, &menu, MAX_MAIN_REDRAWS, &mut picker);

        assert_eq!(
            plan.main_names(),
            vec!["PB&J Sandwich (Cut into Quarters)", "Mini Turkey Wrap"]
        );
    }

    #[test]
    fn test_repeat_survives_exhausted_redraws_by_excluding_previous() {
        let child = Child::new("Ada", 4);
        let menu = menu_for(&child);
        // Always draws 0: redraws cannot escape, final draw over the others.
        let mut picker = ScriptedPicker::new(vec![0]);
        let plan = assemble_child_plan(&child, 3, &menu, MAX_MAIN_REDRAWS, &mut picker);

        let mains = plan.main_names();
        assert_ne!(mains[0], mains[1]);
        assert_ne!(mains[1], mains[2]);
    }

    #[test]
    fn test_single_main_repeats() {
        let child = Child::new("Ola", 14).with_preferences(&["vegetarian"]);
        let menu = menu_for(&child);
        assert_eq!(menu.group(FoodGroup::Main).len(), 1);

        let mut picker = RandomPicker::seeded(3);
        let plan = assemble_child_plan(&child, 5, &menu, MAX_MAIN_REDRAWS, &mut picker);
        assert!(plan.main_names().iter().all(|m| *m == "Quinoa Salad with Beans"));
    }

    #[test]
    fn test_random_plans_never_repeat_consecutive_mains() {
        let child = Child::new("Ben", 8);
        let menu = menu_for(&child);
        for seed in 0..50 {
            let mut picker = RandomPicker::seeded(seed);
            let plan = assemble_child_plan(&child, 7, &menu, MAX_MAIN_REDRAWS, &mut picker);
            let mains = plan.main_names();
            assert_eq!(mains.len(), 7);
            for pair in mains.windows(2) {
                assert_ne!(pair[0], pair[1], "seed {seed}");
            }
        }
    }
}
