pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod persistence;
pub mod planner;
pub mod remote;
pub mod service;

pub use config::{PlannerConfig, StarvationPolicy};
pub use error::{LunchboxError, Result};
pub use models::{Child, LunchboxPlan, LunchboxRequest};
pub use service::{GeneratedPlan, LunchboxService, PlanSource};
