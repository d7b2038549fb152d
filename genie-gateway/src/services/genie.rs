//! Genie space lookups.
//!
//! [`GenieSpaces`] is the seam between the HTTP layer and Databricks; the
//! gateway asks a [`ManagerFactory`] for a fresh adapter on every request.

use super::databricks::{DatabricksClient, DatabricksError};
use crate::config::DatabricksConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Fetch-by-identifier for Genie spaces.
#[async_trait]
pub trait GenieSpaces: Send + Sync {
    /// Returns the space as Databricks describes it, or `None` when it does not exist.
    async fn genie_get(&self, space_id: &str) -> Result<Option<Value>, DatabricksError>;
}

/// Builds one [`GenieSpaces`] adapter per request.
pub trait ManagerFactory: Send + Sync {
    fn manager(&self) -> Box<dyn GenieSpaces>;
}

/// Agent Bricks manager backed by the Databricks REST API.
pub struct AgentBricksManager {
    client: DatabricksClient,
}

impl AgentBricksManager {
    pub fn new(http: Client, config: &DatabricksConfig) -> Self {
        Self {
            client: DatabricksClient::new(http, config),
        }
    }
}

#[async_trait]
impl GenieSpaces for AgentBricksManager {
    async fn genie_get(&self, space_id: &str) -> Result<Option<Value>, DatabricksError> {
        if !is_addressable_segment(space_id) {
            tracing::debug!(space_id = %space_id, "Space id cannot name a single resource");
            return Ok(None);
        }

        let url = self
            .client
            .endpoint(&["api", "2.0", "genie", "spaces", space_id]);

        match self.client.get(url).await {
            Err(err) if err.is_not_found() => {
                tracing::debug!(space_id = %space_id, "Genie space not found upstream");
                Ok(None)
            }
            result => result,
        }
    }
}

/// URL path resolution drops `.` and `..` and an empty segment collapses onto
/// the collection, so these ids would address the space listing instead.
fn is_addressable_segment(space_id: &str) -> bool {
    !matches!(space_id, "" | "." | "..")
}

/// Production factory: one shared connection pool, explicit workspace settings.
pub struct DatabricksManagerFactory {
    http: Client,
    config: DatabricksConfig,
}

impl DatabricksManagerFactory {
    pub fn new(http: Client, config: DatabricksConfig) -> Self {
        Self { http, config }
    }
}

impl ManagerFactory for DatabricksManagerFactory {
    fn manager(&self) -> Box<dyn GenieSpaces> {
        Box::new(AgentBricksManager::new(self.http.clone(), &self.config))
    }
}
