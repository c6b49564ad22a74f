use lunchbox_planner_rs::config::{PlannerConfig, StarvationPolicy};
use lunchbox_planner_rs::error::LunchboxError;
use lunchbox_planner_rs::models::{Child, LunchItem, LunchboxRequest, NutritionalInfo};
use lunchbox_planner_rs::planner::{
    build_grocery_list_from_items, generate_lunchbox_plan, RandomPicker, ScriptedPicker,
};

fn item(name: &str) -> LunchItem {
    LunchItem {
        name: name.to_string(),
        description: String::new(),
        nutritional_info: NutritionalInfo {
            calories: 100,
            protein: "1g".to_string(),
            carbs: "1g".to_string(),
            fat: "1g".to_string(),
        },
        allergens: Vec::new(),
        prep_time: "1 min".to_string(),
    }
}

#[test]
fn test_toddler_three_day_plan() {
    let request = LunchboxRequest::new(vec![Child::new("Ada", 4)], 3);
    let plan = generate_lunchbox_plan(
        &request,
        &PlannerConfig::default(),
        &mut RandomPicker::seeded(21),
    )
    .unwrap();

    let child = &plan.children[0];
    let days: Vec<&String> = child.daily_lunches.keys().collect();
    assert_eq!(days, ["Monday", "Tuesday", "Wednesday"]);

    let toddler_mains = [
        "PB&J Sandwich (Cut into Quarters)",
        "Cheese & Crackers Plate",
        "Mini Turkey Wrap",
    ];
    for main in child.main_names() {
        assert!(toddler_mains.contains(&main), "{} is not a toddler main", main);
    }

    let proteins = plan.grocery_list.get("Proteins").cloned().unwrap_or_default();
    assert!(!proteins.contains(&"Canned tuna".to_string()));
    assert!(!proteins.contains(&"Chicken breast".to_string()));

    let other = &plan.grocery_list["Other"];
    assert!(other.contains(&"Reusable water bottles".to_string()));
    assert!(other.contains(&"Lunch containers".to_string()));
}

#[test]
fn test_teen_with_peanut_allergy_gets_staple_snack() {
    let request =
        LunchboxRequest::new(vec![Child::new("Dev", 15).with_allergies(&["peanuts"])], 1);
    let plan = generate_lunchbox_plan(
        &request,
        &PlannerConfig::default(),
        &mut ScriptedPicker::new(vec![0]),
    )
    .unwrap();

    let lunch = &plan.children[0].daily_lunches["Monday"];
    assert!(!lunch.main.name.contains("PB&J"));
    assert_eq!(lunch.snack.name, "Rice Cakes");
    assert!(lunch.snack.allergens.is_empty());
    for item in lunch.items() {
        assert!(!item.allergens.iter().any(|a| a == "peanuts" || a == "nuts"));
    }
}

#[test]
fn test_starvation_fails_when_policy_is_fail() {
    let request =
        LunchboxRequest::new(vec![Child::new("Dev", 15).with_allergies(&["peanuts"])], 1);
    let config = PlannerConfig {
        starvation: StarvationPolicy::Fail,
        ..Default::default()
    };

    let err = generate_lunchbox_plan(&request, &config, &mut ScriptedPicker::new(vec![0]))
        .unwrap_err();
    match err {
        LunchboxError::NoEligibleItems { child, group } => {
            assert_eq!(child, "Dev");
            assert_eq!(group, "snack");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_nut_free_teen_with_soy_allergy_never_gets_nut_snack() {
    let child = Child::new("Theo", 15)
        .with_allergies(&["soy"])
        .with_preferences(&["nut free"]);
    let request = LunchboxRequest::new(vec![child], 1);

    let fail = PlannerConfig {
        starvation: StarvationPolicy::Fail,
        ..Default::default()
    };
    let err = generate_lunchbox_plan(&request, &fail, &mut ScriptedPicker::new(vec![0]))
        .unwrap_err();
    assert!(matches!(
        err,
        LunchboxError::NoEligibleItems { ref group, .. } if group == "snack"
    ));

    let plan = generate_lunchbox_plan(
        &request,
        &PlannerConfig::default(),
        &mut ScriptedPicker::new(vec![0]),
    )
    .unwrap();
    let snack = &plan.children[0].daily_lunches["Monday"].snack;
    assert_eq!(snack.name, "Rice Cakes");
    assert!(!snack.description.to_lowercase().contains("nut"));
}

#[test]
fn test_sugar_free_child_with_dairy_allergy_never_gets_sweet_snack() {
    let child = Child::new("Mia", 7)
        .with_allergies(&["dairy"])
        .with_preferences(&["sugar free"]);
    let request = LunchboxRequest::new(vec![child], 2);

    let plan = generate_lunchbox_plan(
        &request,
        &PlannerConfig::default(),
        &mut RandomPicker::seeded(8),
    )
    .unwrap();
    for lunch in plan.children[0].daily_lunches.values() {
        assert_eq!(lunch.snack.name, "Rice Cakes");
    }
}

#[test]
fn test_peanut_butter_brings_jelly() {
    let items = [item("Peanut Butter Celery"), item("Apple Slices")];
    let groceries = build_grocery_list_from_items(&items);

    assert_eq!(groceries["Proteins"], vec!["Peanut butter"]);
    assert_eq!(groceries["Fruits"], vec!["Apples"]);
    assert_eq!(
        groceries["Other"],
        vec!["Jelly/Jam", "Reusable water bottles", "Lunch containers"]
    );
}

#[test]
fn test_tuna_brings_mayonnaise() {
    let items = [item("Tuna Sandwich on Whole Grain")];
    let groceries = build_grocery_list_from_items(&items);

    assert_eq!(groceries["Proteins"], vec!["Canned tuna"]);
    assert!(groceries["Other"].contains(&"Mayonnaise (light)".to_string()));
}

#[test]
fn test_invalid_requests_are_rejected() {
    let config = PlannerConfig::default();
    let mut picker = ScriptedPicker::new(vec![0]);

    let empty = LunchboxRequest::new(Vec::new(), 3);
    assert!(matches!(
        generate_lunchbox_plan(&empty, &config, &mut picker),
        Err(LunchboxError::InvalidRequest(_))
    ));

    for days in [0, 8] {
        let request = LunchboxRequest::new(vec![Child::new("Ada", 4)], days);
        assert!(matches!(
            generate_lunchbox_plan(&request, &config, &mut picker),
            Err(LunchboxError::InvalidRequest(_))
        ));
    }
}
