use std::time::Duration;

use clap::ValueEnum;

use crate::planner::constants::MAX_MAIN_REDRAWS;

/// Default timeout for the remote meal planner.
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

/// What to do when allergies leave a food group with no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StarvationPolicy {
    /// Substitute an allergen-free staple for that group.
    #[default]
    Staple,
    /// Reject the request.
    Fail,
}

/// Connection settings for the remote meal planner.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl RemoteConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Runtime settings for plan generation.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub starvation: StarvationPolicy,
    pub max_main_redraws: u32,
    /// Fixed seed for reproducible plans; entropy when absent.
    pub seed: Option<u64>,
    pub remote: Option<RemoteConfig>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            starvation: StarvationPolicy::default(),
            max_main_redraws: MAX_MAIN_REDRAWS,
            seed: None,
            remote: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.starvation, StarvationPolicy::Staple);
        assert_eq!(config.max_main_redraws, 5);
        assert!(config.seed.is_none());
        assert!(config.remote.is_none());
    }

    #[test]
    fn test_remote_timeout() {
        let remote = RemoteConfig::new("http://localhost:8000/lunchbox");
        assert_eq!(remote.timeout(), Duration::from_secs(30));
    }
}
