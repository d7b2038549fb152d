//! Fetch one Genie space by ID and print it.
//!
//! Usage: `get-genie [SPACE_ID]`. Reads `DATABRICKS_HOST` and `DATABRICKS_TOKEN`
//! from the environment (or `.env`).

use anyhow::Context;
use genie_gateway::config::DatabricksConfig;
use genie_gateway::services::{AgentBricksManager, GenieSpaces};
use reqwest::Client;
use service_core::observability::init_tracing;

const DEFAULT_SPACE_ID: &str = "01f0eca3dc1b1cbc9b65fa58f94c18ad";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing("get-genie", "warn", None)?;

    let space_id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SPACE_ID.to_string());

    let config = DatabricksConfig::from_env().context("Databricks configuration")?;
    let manager = AgentBricksManager::new(Client::new(), &config);

    let result = manager
        .genie_get(&space_id)
        .await
        .with_context(|| format!("genie_get({:?}) failed", space_id))?;

    println!("genie_get({:?}):", space_id);
    match result {
        Some(space) => println!("{}", serde_json::to_string_pretty(&space)?),
        None => println!("None"),
    }

    Ok(())
}
