use thiserror::Error;

#[derive(Debug, Error)]
pub enum LunchboxError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No eligible {group} items for {child}")]
    NoEligibleItems { child: String, group: String },

    #[error("Remote planner error: {0}")]
    Remote(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, LunchboxError>;
