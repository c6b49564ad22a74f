use tracing::{info, warn};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{LunchboxPlan, LunchboxRequest};
use crate::planner::{generate_lunchbox_plan, merge_grocery_lists, ItemPicker, RandomPicker};
use crate::remote::{HttpRemotePlanner, RemoteChildPlan, RemotePlanner};

/// Which engine produced a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanSource {
    Remote,
    RuleBased,
}

/// A plan with its provenance.
#[derive(Debug, Clone)]
pub struct GeneratedPlan {
    pub plan: LunchboxPlan,
    pub source: PlanSource,
}

/// Entry point for plan generation.
///
/// Tries the remote planner when one is configured; any failure there
/// regenerates the whole roster with the rule-based engine.
pub struct LunchboxService {
    config: PlannerConfig,
    remote: Option<Box<dyn RemotePlanner>>,
}

impl LunchboxService {
    /// Rule-based engine only.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            remote: None,
        }
    }

    /// Wire the HTTP remote planner when the config names one.
    pub fn from_config(config: PlannerConfig) -> Result<Self> {
        let remote = match &config.remote {
            Some(remote_config) => {
                let planner = HttpRemotePlanner::new(remote_config)?;
                info!(endpoint = planner.endpoint(), "remote planner enabled");
                Some(Box::new(planner) as Box<dyn RemotePlanner>)
            }
            None => None,
        };
        Ok(Self { config, remote })
    }

    pub fn with_remote(mut self, remote: Box<dyn RemotePlanner>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate a plan with the configured seed (or entropy).
    pub fn generate(&self, request: &LunchboxRequest) -> Result<GeneratedPlan> {
        let mut picker = RandomPicker::from_seed_option(self.config.seed);
        self.generate_with_picker(request, &mut picker)
    }

    /// Generate a plan drawing rule-based choices from `picker`.
    ///
    /// Validation errors are returned before any generation is attempted.
    pub fn generate_with_picker(
        &self,
        request: &LunchboxRequest,
        picker: &mut dyn ItemPicker,
    ) -> Result<GeneratedPlan> {
        request.validate()?;

        if let Some(remote) = &self.remote {
            match remote_plan(remote.as_ref(), request) {
                Ok(plan) => {
                    info!(children = plan.children.len(), "remote plan generated");
                    return Ok(GeneratedPlan {
                        plan,
                        source: PlanSource::Remote,
                    });
                }
                Err(e) => {
                    warn!("remote planner failed, using rule-based engine: {}", e);
                }
            }
        }

        let plan = generate_lunchbox_plan(request, &self.config, picker)?;
        Ok(GeneratedPlan {
            plan,
            source: PlanSource::RuleBased,
        })
    }
}

/// Ask the remote planner for every child; the first failure aborts.
fn remote_plan(remote: &dyn RemotePlanner, request: &LunchboxRequest) -> Result<LunchboxPlan> {
    let results = request
        .children
        .iter()
        .map(|child| remote.generate_child_plan(child, request.days))
        .collect::<Result<Vec<RemoteChildPlan>>>()?;

    let grocery_list = merge_grocery_lists(results.iter().map(|r| &r.grocery_list));
    let children = results.into_iter().map(|r| r.plan).collect();

    Ok(LunchboxPlan {
        children,
        grocery_list,
    })
}
