use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{GroceryList, LunchboxPlan, LunchboxRequest};

/// Load a plan request from a JSON file.
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<LunchboxRequest> {
    let content = fs::read_to_string(path)?;
    let request: LunchboxRequest = serde_json::from_str(&content)?;
    Ok(request)
}

/// Save a plan request as pretty JSON.
pub fn save_request<P: AsRef<Path>>(path: P, request: &LunchboxRequest) -> Result<()> {
    let json = serde_json::to_string_pretty(request)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save a plan as pretty JSON.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &LunchboxPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the grocery list as `category,item` rows.
pub fn write_grocery_csv<P: AsRef<Path>>(path: P, grocery_list: &GroceryList) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["category", "item"])?;
    for (category, items) in grocery_list {
        for item in items {
            writer.write_record([category.as_str(), item.as_str()])?;
        }
    }
    writer.flush()?;
    Ok(())
}
