#![allow(dead_code)]

use async_trait::async_trait;
use genie_gateway::config::{DatabricksConfig, GatewayConfig};
use genie_gateway::services::{DatabricksError, GenieSpaces, ManagerFactory};
use genie_gateway::startup::Application;
use serde_json::Value;
use service_core::config::Config as CoreConfig;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// What the stubbed adapter does for every lookup.
#[derive(Clone)]
pub enum Outcome {
    Found(Value),
    Absent,
    Fails(String),
}

/// Stub adapter factory that records how many adapters were built.
pub struct StubFactory {
    outcome: Outcome,
    built: AtomicUsize,
}

impl StubFactory {
    pub fn new(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            built: AtomicUsize::new(0),
        })
    }

    pub fn managers_built(&self) -> usize {
        self.built.load(Ordering::SeqCst)
    }
}

impl ManagerFactory for StubFactory {
    fn manager(&self) -> Box<dyn GenieSpaces> {
        self.built.fetch_add(1, Ordering::SeqCst);
        Box::new(StubManager {
            outcome: self.outcome.clone(),
        })
    }
}

struct StubManager {
    outcome: Outcome,
}

#[async_trait]
impl GenieSpaces for StubManager {
    async fn genie_get(&self, _space_id: &str) -> Result<Option<Value>, DatabricksError> {
        match &self.outcome {
            Outcome::Found(value) => Ok(Some(value.clone())),
            Outcome::Absent => Ok(None),
            Outcome::Fails(message) => Err(DatabricksError::Api {
                status: 400,
                message: message.clone(),
            }),
        }
    }
}

pub fn test_config(databricks_host: &str) -> GatewayConfig {
    GatewayConfig {
        // Use random port for testing (port 0)
        common: CoreConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
        },
        databricks: DatabricksConfig::new(databricks_host, "dapi-test-token")
            .expect("valid test host"),
        otlp_endpoint: None,
    }
}

pub struct TestApp {
    pub http_address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the real application pointed at `databricks_host`.
    pub async fn spawn(databricks_host: &str) -> Self {
        let app = Application::build(test_config(databricks_host))
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    /// Spawn the application with a stubbed adapter factory.
    pub async fn spawn_with(managers: Arc<dyn ManagerFactory>) -> Self {
        let app = Application::build_with_factory(test_config("https://example.invalid"), managers)
            .await
            .expect("Failed to build test application");
        Self::run(app).await
    }

    async fn run(app: Application) -> Self {
        let port = app.port();
        let http_address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", http_address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { http_address, port }
    }
}
