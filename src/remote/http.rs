use reqwest::blocking::Client;
use serde::Serialize;

use crate::config::RemoteConfig;
use crate::error::{LunchboxError, Result};
use crate::models::Child;
use crate::remote::{parse_child_plan, RemoteChildPlan, RemotePlanner};

/// Remote planner reached over HTTP with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpRemotePlanner {
    endpoint: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChildPlanRequest<'a> {
    child: &'a Child,
    days: u32,
}

impl HttpRemotePlanner {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LunchboxError::Remote(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl RemotePlanner for HttpRemotePlanner {
    fn generate_child_plan(&self, child: &Child, days: u32) -> Result<RemoteChildPlan> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChildPlanRequest { child, days })
            .send()
            .map_err(|e| {
                tracing::error!("Remote planner request failed: {}", e);
                LunchboxError::Remote(format!("request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            tracing::error!("Remote planner error: {} - {}", status, error_text);
            return Err(LunchboxError::Remote(format!(
                "remote planner returned {status}: {error_text}"
            )));
        }

        let body = response.text().map_err(|e| {
            tracing::error!("Failed to read remote planner response: {}", e);
            LunchboxError::Remote(format!("failed to read response: {e}"))
        })?;

        parse_child_plan(child, days, &body)
    }
}
