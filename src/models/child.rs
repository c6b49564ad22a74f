use serde::{Deserialize, Serialize};

use crate::error::{LunchboxError, Result};
use crate::planner::constants::{MAX_PLAN_DAYS, MIN_PLAN_DAYS};

/// A child on the lunch roster.
///
/// Identity is positional within the roster; names need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub name: String,

    pub age: u32,

    #[serde(default)]
    pub preferences: Vec<String>,

    #[serde(default)]
    pub allergies: Vec<String>,
}

impl Child {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
            preferences: Vec::new(),
            allergies: Vec::new(),
        }
    }

    pub fn with_allergies(mut self, allergies: &[&str]) -> Self {
        self.allergies = allergies.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_preferences(mut self, preferences: &[&str]) -> Self {
        self.preferences = preferences.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Allergies normalized to lowercase, blank entries dropped.
    pub fn normalized_allergies(&self) -> Vec<String> {
        normalize(&self.allergies)
    }

    /// Preferences normalized to lowercase, blank entries dropped.
    pub fn normalized_preferences(&self) -> Vec<String> {
        normalize(&self.preferences)
    }
}

fn normalize(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Inbound request for a lunchbox plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LunchboxRequest {
    #[serde(default)]
    pub children: Vec<Child>,

    #[serde(default)]
    pub days: u32,
}

impl LunchboxRequest {
    pub fn new(children: Vec<Child>, days: u32) -> Self {
        Self { children, days }
    }

    /// Reject an empty roster or a day count outside 1..=7.
    pub fn validate(&self) -> Result<()> {
        if self.children.is_empty() {
            return Err(LunchboxError::InvalidRequest(
                "At least one child must be specified".to_string(),
            ));
        }

        if !(MIN_PLAN_DAYS..=MAX_PLAN_DAYS).contains(&self.days) {
            return Err(LunchboxError::InvalidRequest(
                "Days must be between 1 and 7".to_string(),
            ));
        }

        Ok(())
    }
}
