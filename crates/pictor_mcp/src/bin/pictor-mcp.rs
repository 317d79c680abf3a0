//! Pictor MCP server binary.

use anyhow::Result;
use pictor_mcp::PictorRouter;
use pictor_models::DescriberConfig;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{self, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    // stdout carries the protocol stream, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Pictor MCP server");

    let config = DescriberConfig::from_env()?;
    let router = PictorRouter::from_config(&config)?;

    tracing::info!(
        name = router.name(),
        version = router.version(),
        tools = router.tools().len(),
        "Router initialized"
    );

    let service = router.serve(stdio()).await?;

    tracing::info!("Server ready, listening on stdio");
    let reason = service.waiting().await?;
    tracing::info!(?reason, "Server stopped");

    Ok(())
}
