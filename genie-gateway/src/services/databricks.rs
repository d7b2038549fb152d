//! Minimal Databricks REST client.
//!
//! Authenticates with a bearer token and maps non-2xx replies to
//! [`DatabricksError::Api`] carrying the raw response body, so callers can
//! inspect Databricks' own error text.

use crate::config::DatabricksConfig;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use service_core::observability::TracedClientExt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabricksError {
    #[error("Databricks API {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Databricks request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl DatabricksError {
    pub fn status(&self) -> Option<u16> {
        match self {
            DatabricksError::Api { status, .. } => Some(*status),
            DatabricksError::Http(err) => err.status().map(|s| s.as_u16()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }
}

/// Cheap to construct: shares the caller's connection pool.
#[derive(Clone)]
pub struct DatabricksClient {
    http: Client,
    base_url: Url,
    token: Secret<String>,
}

impl DatabricksClient {
    pub fn new(http: Client, config: &DatabricksConfig) -> Self {
        Self {
            http,
            base_url: config.host.clone(),
            token: config.token.clone(),
        }
    }

    /// Appends escaped path segments to the workspace URL.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // DatabricksConfig only admits base URLs, so segments are always available.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET returning the decoded body.
    ///
    /// An empty body or JSON `null` yields `None`; a body that is not JSON is
    /// returned as a string value.
    pub async fn get(&self, url: Url) -> Result<Option<Value>, DatabricksError> {
        tracing::debug!(url = %url, "Databricks GET");

        let response = self
            .http
            .traced_get(url.clone())
            .bearer_auth(self.token.expose_secret())
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send GET request to {}: {}", url, e);
                e
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = %status, url = %url, "Databricks API returned an error");
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };
            return Err(DatabricksError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(decode_body(&body))
    }
}

fn decode_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(body.to_string())),
    }
}
