mod cli;

use anyhow::Context;
use owo_colors::OwoColorize;
use portico::{api, AppState, Config};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse_args();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("portico=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        None | Some(cli::Commands::Serve) => serve().await,
        Some(cli::Commands::Tools) => print_tools().await,
        Some(cli::Commands::Mcp) => run_mcp().await,
    }
}

async fn serve() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::from_config(config).await?;

    let app = api::router(state).layer(TraceLayer::new_for_http()).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!(%addr, "portico gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}

async fn print_tools() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let state = AppState::from_config(config).await?;

    for def in state.registry.definitions() {
        println!("{}", def.name.green().bold());
        println!("  {}", def.description);
        if let Some(props) = def.parameters.get("properties").and_then(|p| p.as_object()) {
            for (name, prop) in props {
                let ty = prop.get("type").and_then(|t| t.as_str()).unwrap_or("any");
                println!("  - {}: {}", name.cyan(), ty);
            }
        }
        println!();
    }

    Ok(())
}

#[cfg(feature = "mcp")]
async fn run_mcp() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let state = AppState::from_config(config).await?;
    portico::mcp::start_stdio_server(state.dispatcher).await
}

#[cfg(not(feature = "mcp"))]
async fn run_mcp() -> anyhow::Result<()> {
    anyhow::bail!("this build does not include MCP support; rebuild with `--features mcp`")
}
