use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use tabletop_engine::Profile;
use tabletop_runtime::bootstrap::build_manager;
use tabletop_runtime::config::{load_config, validate_config, RuntimeConfig};
use tabletop_runtime::logging::init_tracing;
use tabletop_runtime::server::create_router;

#[derive(Parser, Debug)]
#[command(name = "tabletop-server", about = "Incident-response tabletop exercise API")]
struct Args {
    /// YAML config file. Defaults apply when omitted.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Overrides server.listen, e.g. 127.0.0.1:3000.
    #[arg(long)]
    listen: Option<String>,

    #[arg(long)]
    profile: Option<Profile>,

    /// Seed for the procedural source.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path).with_context(|| format!("loading config {}", path.display()))?,
        None => RuntimeConfig::default(),
    };
    config
        .apply_env_overrides()
        .context("applying TABLETOP_* environment overrides")?;
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    if let Some(profile) = args.profile {
        config.exercise.profile = profile;
    }
    if args.seed.is_some() {
        config.exercise.seed = args.seed;
    }
    validate_config(&config).context("validating configuration")?;

    init_tracing(&config.observability.log_level);

    let manager = build_manager(&config).context("building session manager")?;
    let app = create_router(Arc::new(manager));

    let listener = tokio::net::TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("binding {}", config.server.listen))?;
    info!(listen = %config.server.listen, profile = %config.exercise.profile, "tabletop server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
