use std::cell::Cell;
use std::rc::Rc;

use indexmap::IndexMap;
use tempfile::tempdir;

use lunchbox_planner_rs::config::PlannerConfig;
use lunchbox_planner_rs::error::{LunchboxError, Result};
use lunchbox_planner_rs::models::{Child, LunchboxRequest};
use lunchbox_planner_rs::persistence::{load_request, save_plan, save_request, write_grocery_csv};
use lunchbox_planner_rs::planner::ScriptedPicker;
use lunchbox_planner_rs::remote::{parse_child_plan, RemoteChildPlan, RemotePlanner};
use lunchbox_planner_rs::service::{LunchboxService, PlanSource};

/// Serves canned JSON bodies through the real response adapter.
struct CannedRemote {
    body: String,
    calls: Rc<Cell<usize>>,
}

impl RemotePlanner for CannedRemote {
    fn generate_child_plan(&self, child: &Child, days: u32) -> Result<RemoteChildPlan> {
        self.calls.set(self.calls.get() + 1);
        parse_child_plan(child, days, &self.body)
    }
}

struct DownRemote;

impl RemotePlanner for DownRemote {
    fn generate_child_plan(&self, _child: &Child, _days: u32) -> Result<RemoteChildPlan> {
        Err(LunchboxError::Remote("connection refused".to_string()))
    }
}

fn remote_body() -> String {
    let item = |name: &str, allergens: &[&str]| {
        serde_json::json!({
            "name": name,
            "description": "",
            "nutritional_info": {"calories": 100, "protein": "2g", "carbs": "10g", "fat": "1g"},
            "allergens": allergens,
            "prep_time": "2 mins"
        })
    };
    serde_json::json!({
        "daily_lunches": {
            "Monday": {
                "main": item("Hummus Wrap", &["wheat"]),
                "fruit": item("Pear", &[]),
                "vegetable": item("Snap Peas", &[]),
                "snack": item("Pretzels", &["wheat"]),
                "drink": item("Water", &[])
            }
        },
        "grocery_list": {"Grains": ["Tortillas"], "Fruits": ["Pears"]}
    })
    .to_string()
}

fn request() -> LunchboxRequest {
    LunchboxRequest::new(vec![Child::new("Ada", 6), Child::new("Ben", 9)], 1)
}

#[test]
fn test_remote_plans_are_merged() {
    let remote = CannedRemote {
        body: remote_body(),
        calls: Rc::new(Cell::new(0)),
    };
    let service = LunchboxService::new(PlannerConfig::default()).with_remote(Box::new(remote));

    let generated = service
        .generate_with_picker(&request(), &mut ScriptedPicker::new(vec![0]))
        .unwrap();

    assert_eq!(generated.source, PlanSource::Remote);
    assert_eq!(generated.plan.children.len(), 2);
    assert_eq!(generated.plan.children[1].child_name, "Ben");
    assert_eq!(generated.plan.grocery_list["Grains"], vec!["Tortillas"]);
    assert_eq!(generated.plan.grocery_list["Fruits"], vec!["Pears"]);
}

#[test]
fn test_unsafe_remote_plan_falls_back() {
    let remote = CannedRemote {
        body: remote_body(),
        calls: Rc::new(Cell::new(0)),
    };
    let service = LunchboxService::new(PlannerConfig::default()).with_remote(Box::new(remote));
    let request = LunchboxRequest::new(vec![Child::new("Cleo", 7).with_allergies(&["wheat"])], 1);

    let generated = service
        .generate_with_picker(&request, &mut ScriptedPicker::new(vec![0]))
        .unwrap();

    assert_eq!(generated.source, PlanSource::RuleBased);
    for item in generated.plan.all_items() {
        assert!(!item.allergens.iter().any(|a| a == "wheat"));
    }
}

#[test]
fn test_unreachable_remote_falls_back() {
    let service = LunchboxService::new(PlannerConfig::default()).with_remote(Box::new(DownRemote));

    let generated = service
        .generate_with_picker(&request(), &mut ScriptedPicker::new(vec![1, 0, 2]))
        .unwrap();

    assert_eq!(generated.source, PlanSource::RuleBased);
    assert_eq!(generated.plan.children.len(), 2);
    assert!(!generated.plan.grocery_list.is_empty());
}

#[test]
fn test_invalid_request_skips_remote() {
    let calls = Rc::new(Cell::new(0));
    let remote = CannedRemote {
        body: remote_body(),
        calls: Rc::clone(&calls),
    };
    let service = LunchboxService::new(PlannerConfig::default()).with_remote(Box::new(remote));

    let result = service.generate(&LunchboxRequest::new(Vec::new(), 2));
    assert!(matches!(result, Err(LunchboxError::InvalidRequest(_))));

    let result = service.generate(&LunchboxRequest::new(vec![Child::new("Ada", 6)], 8));
    assert!(matches!(result, Err(LunchboxError::InvalidRequest(_))));
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_remote_called_once_per_child() {
    let calls = Rc::new(Cell::new(0));
    let remote = CannedRemote {
        body: remote_body(),
        calls: Rc::clone(&calls),
    };
    let service = LunchboxService::new(PlannerConfig::default()).with_remote(Box::new(remote));

    service
        .generate_with_picker(&request(), &mut ScriptedPicker::new(vec![0]))
        .unwrap();
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_seeded_service_is_reproducible() {
    let config = PlannerConfig {
        seed: Some(314),
        ..Default::default()
    };
    let service = LunchboxService::from_config(config).unwrap();

    let first = service.generate(&request()).unwrap();
    let second = service.generate(&request()).unwrap();
    assert_eq!(first.plan, second.plan);
}

#[test]
fn test_request_and_plan_files_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let request_path = dir.path().join("request.json");
    let plan_path = dir.path().join("plan.json");
    let csv_path = dir.path().join("groceries.csv");

    save_request(&request_path, &request()).unwrap();
    let loaded = load_request(&request_path).unwrap();
    assert_eq!(loaded.children, request().children);

    let service = LunchboxService::new(PlannerConfig::default());
    let generated = service
        .generate_with_picker(&loaded, &mut ScriptedPicker::new(vec![0, 1]))
        .unwrap();

    save_plan(&plan_path, &generated.plan).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&plan_path).unwrap()).unwrap();
    assert!(json["children"][0]["daily_lunches"]["Monday"]["main"]["nutritional_info"]["calories"]
        .is_u64());
    let grocery: IndexMap<String, Vec<String>> =
        serde_json::from_value(json["grocery_list"].clone()).unwrap();
    assert_eq!(grocery, generated.plan.grocery_list);

    write_grocery_csv(&csv_path, &generated.plan.grocery_list).unwrap();
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("category,item\n"));
    assert!(csv.contains("Other,Lunch containers"));
}

#[test]
fn test_missing_request_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = load_request(dir.path().join("nope.json"));
    assert!(matches!(result, Err(LunchboxError::Io(_))));
}
