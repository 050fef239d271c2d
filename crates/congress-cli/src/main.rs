//! congress-mcp: Congress.gov data for MCP clients, served over stdio.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use congress_api::ApiClient;
use congress_config::{CliOverrides, CongressConfig};
use congress_mcp::{McpServer, ToolRegistry};

#[derive(Parser)]
#[command(
    name = "congress-mcp",
    version,
    about = "MCP server for the Congress.gov API (speaks JSON-RPC over stdio)"
)]
struct Cli {
    /// Congress.gov API key (overrides CONGRESS_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// API base URL (overrides CONGRESS_API_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<f64>,

    /// Enable verbose/debug logging
    #[arg(long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Print the available tools and exit
    #[arg(long)]
    list_tools: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_tools {
        print_tools(&ToolRegistry::with_builtins());
        return Ok(());
    }

    // Logs go to stderr; stdout carries the protocol
    let log_level = if cli.verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = CongressConfig::load(CliOverrides {
        api_key: cli.api_key,
        base_url: cli.base_url,
        timeout_secs: cli.timeout,
    })
    .context("Failed to load configuration")?;
    tracing::debug!("Configuration: {config:?}");

    let client =
        ApiClient::new(config.client_config()).context("Failed to create API client")?;
    let server = Arc::new(McpServer::new(Arc::new(client)));
    tracing::info!(
        "congress-mcp {} serving {} tools on stdio ({})",
        env!("CARGO_PKG_VERSION"),
        server.tools().len(),
        config.base_url
    );

    congress_mcp::serve_stdio(server)
        .await
        .context("MCP server stopped")?;
    tracing::info!("Client disconnected; shutting down");
    Ok(())
}

fn print_tools(registry: &ToolRegistry) {
    for name in registry.names() {
        let summary = registry
            .get(name)
            .map(|spec| first_sentence(spec.description))
            .unwrap_or_default();
        println!("{name:<42} {summary}");
    }
    println!("\n{} tools", registry.len());
}

fn first_sentence(text: &str) -> &str {
    match text.find(". ") {
        Some(end) => &text[..=end],
        None => text,
    }
}
