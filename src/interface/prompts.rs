use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{LunchboxError, Result};
use crate::models::{Child, LunchboxRequest};
use crate::planner::constants::{KNOWN_ALLERGENS, MAX_PLAN_DAYS, MIN_PLAN_DAYS};

/// Minimum Jaro-Winkler score for an allergen suggestion.
const ALLERGEN_MATCH_THRESHOLD: f64 = 0.7;

/// Prompt for the next child's name; `None` when the roster is finished.
pub fn prompt_child_name(index: usize) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Name of child #{} (or press Enter to finish)",
            index + 1
        ))
        .allow_empty(true)
        .interact_text()?;

    let name = input.trim();
    Ok(if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    })
}

/// Prompt for a child's age.
pub fn prompt_age(name: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("How old is {}?", name))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| LunchboxError::InvalidRequest("Invalid age".to_string()))
}

/// Prompt for the number of days to plan.
pub fn prompt_days() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!(
            "How many days should the plan cover? ({}-{})",
            MIN_PLAN_DAYS, MAX_PLAN_DAYS
        ))
        .default("5".to_string())
        .interact_text()?;

    let days: u32 = input
        .trim()
        .parse()
        .map_err(|_| LunchboxError::InvalidRequest("Invalid number".to_string()))?;

    if !(MIN_PLAN_DAYS..=MAX_PLAN_DAYS).contains(&days) {
        return Err(LunchboxError::InvalidRequest(
            "Days must be between 1 and 7".to_string(),
        ));
    }

    Ok(days)
}

/// Resolve free-text allergy input against the known allergens.
///
/// Exact matches are taken as-is; close matches are offered as suggestions;
/// anything else can still be kept verbatim.
fn resolve_allergy(input: &str) -> Result<Option<String>> {
    let lowered = input.to_lowercase();

    if KNOWN_ALLERGENS.contains(&lowered.as_str()) {
        return Ok(Some(lowered));
    }

    let mut candidates: Vec<(&str, f64)> = KNOWN_ALLERGENS
        .iter()
        .map(|a| (*a, jaro_winkler(a, &lowered)))
        .filter(|(_, score)| *score > ALLERGEN_MATCH_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        let keep = Confirm::new()
            .with_prompt(format!("'{}' is not a known allergen. Keep it anyway?", input))
            .default(true)
            .interact()?;
        return Ok(keep.then(|| input.to_string()));
    }

    let mut options: Vec<String> = candidates
        .iter()
        .take(3)
        .map(|(a, _)| a.to_string())
        .collect();
    let suggestions = options.len();
    options.push(format!("Keep '{}' as entered", input));
    options.push("Skip".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection < suggestions {
        Some(options[selection].clone())
    } else if selection == suggestions {
        Some(input.to_string())
    } else {
        None
    })
}

/// Prompt for a child's allergies with fuzzy suggestions.
pub fn prompt_allergies(name: &str) -> Result<Vec<String>> {
    let mut allergies = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt(format!(
                "Enter an allergy for {} (or press Enter to finish)",
                name
            ))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if let Some(allergy) = resolve_allergy(input)? {
            if !allergies.contains(&allergy) {
                println!("Added allergy: {}", allergy);
                allergies.push(allergy);
            }
        }
    }

    Ok(allergies)
}

/// Prompt for free-text food preferences.
///
/// Only "vegetarian", "sugar free"/"no sugar" and "nut free"/"no nuts" change
/// which items are chosen; other preferences are recorded but advisory.
pub fn prompt_preferences(name: &str) -> Result<Vec<String>> {
    let mut preferences = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt(format!(
                "Enter a food preference for {} (e.g. vegetarian, sugar free, nut free; Enter to finish)",
                name
            ))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }
        preferences.push(input.to_string());
    }

    Ok(preferences)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full roster and day count interactively.
pub fn collect_roster() -> Result<LunchboxRequest> {
    let mut children = Vec::new();

    while let Some(name) = prompt_child_name(children.len())? {
        let age = prompt_age(&name)?;
        let allergies = prompt_allergies(&name)?;
        let preferences = prompt_preferences(&name)?;
        children.push(Child {
            name,
            age,
            preferences,
            allergies,
        });
        println!();
    }

    let days = prompt_days()?;
    Ok(LunchboxRequest::new(children, days))
}
