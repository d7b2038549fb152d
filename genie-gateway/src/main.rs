use dotenvy::dotenv;
use genie_gateway::config::GatewayConfig;
use genie_gateway::startup::Application;
use service_core::observability::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = GatewayConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "genie-gateway",
        "info",
        configuration.otlp_endpoint.as_deref(),
    )?;

    info!(
        databricks_host = %configuration.databricks.host,
        address = %configuration.common.socket_addr(),
        "Starting genie-gateway"
    );

    let application = Application::build(configuration).await?;
    application.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
