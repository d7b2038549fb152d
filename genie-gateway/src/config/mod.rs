use reqwest::Url;
use secrecy::Secret;
use service_core::config::{self as core_config, required_env};
use service_core::error::AppError;
use std::env;

pub const DATABRICKS_HOST_VAR: &str = "DATABRICKS_HOST";
pub const DATABRICKS_TOKEN_VAR: &str = "DATABRICKS_TOKEN";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub common: core_config::Config,
    pub databricks: DatabricksConfig,
    /// OTLP/gRPC collector; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

/// Workspace connection settings, read once at startup.
#[derive(Debug, Clone)]
pub struct DatabricksConfig {
    /// Workspace base URL, e.g. `https://adb-123.4.azuredatabricks.net`.
    pub host: Url,
    /// Personal access token sent as a bearer credential.
    pub token: Secret<String>,
}

impl GatewayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(GatewayConfig {
            common,
            databricks: DatabricksConfig::from_env()?,
            otlp_endpoint: env::var("OTLP_ENDPOINT")
                .ok()
                .filter(|endpoint| !endpoint.trim().is_empty()),
        })
    }
}

impl DatabricksConfig {
    pub fn new(host: &str, token: impl Into<String>) -> Result<Self, AppError> {
        Ok(Self {
            host: normalize_host(host)?,
            token: Secret::new(token.into()),
        })
    }

    /// Reads `DATABRICKS_HOST` and `DATABRICKS_TOKEN`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = required_env(DATABRICKS_HOST_VAR)?;
        let token = required_env(DATABRICKS_TOKEN_VAR)?;
        Self::new(&host, token)
    }
}

/// Accepts bare hostnames and trailing slashes; the result always has a scheme
/// and can carry appended path segments.
fn normalize_host(raw: &str) -> Result<Url, AppError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let url = Url::parse(&with_scheme).map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "{} is not a valid URL ({}): {}",
            DATABRICKS_HOST_VAR,
            raw,
            e
        ))
    })?;

    if url.cannot_be_a_base() {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "{} cannot be used as a base URL: {}",
            DATABRICKS_HOST_VAR,
            raw
        )));
    }

    Ok(url)
}
