//! fip-server - Feedback Insights service
//!
//! Stores free-text feedback, analyzes each message in the background and
//! serves aggregated insights over HTTP + SSE.

use anyhow::{Context, Result};
use clap::Parser;
use fip_analysis::{FeedbackPipeline, NlpResources};
use fip_common::config::{
    default_config_path, load_toml_config_or_default, CliOverrides, RootFolderInitializer,
    ServerSettings,
};
use fip_common::events::EventBus;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use fip_server::{build_router, logging, AppState, MODULE_NAME};

/// Event bus capacity per SSE subscriber
const EVENT_BUS_CAPACITY: usize = 100;

#[derive(Debug, Parser)]
#[command(name = "fip-server", version, about = "Feedback insights service")]
struct Args {
    /// Root folder holding the database
    #[arg(long)]
    root_folder: Option<PathBuf>,

    /// Listen host
    #[arg(long)]
    host: Option<String>,

    /// Listen port
    #[arg(long)]
    port: Option<u16>,

    /// TOML config file (default ~/.config/fip/fip-server.toml)
    #[arg(long, env = "FIP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Subscriber comes up before config loading; the configured level is
    // swapped in once settings resolve
    let rust_log = EnvFilter::try_from_default_env().ok();
    let has_rust_log = rust_log.is_some();
    let (subscriber, log_level) = logging::build_subscriber(
        rust_log.unwrap_or_else(|| EnvFilter::new("info")),
        std::io::stdout,
    );
    subscriber.init();

    let config_path = args.config.clone().or_else(|| default_config_path(MODULE_NAME));
    let toml_config = load_toml_config_or_default(config_path.as_deref());

    let cli = CliOverrides {
        root_folder: args.root_folder,
        host: args.host,
        port: args.port,
    };
    let settings = ServerSettings::resolve(MODULE_NAME, &cli, &toml_config)?;

    // RUST_LOG wins over the configured level
    if !has_rust_log {
        if let Err(e) = log_level.apply(&settings.log_level) {
            warn!("{:#}, keeping info", e);
        }
    }

    info!(
        "Starting Feedback Insights ({}) v{} [{}] built {} ({})",
        MODULE_NAME,
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let initializer = RootFolderInitializer::new(settings.root_folder.clone());
    initializer
        .ensure_directory_exists()
        .context("Failed to initialize root folder")?;

    let db_path = initializer.database_path();
    info!("Database: {}", db_path.display());

    let db_pool = fip_common::db::init_database(&db_path)
        .await
        .context("Failed to open database")?;
    let feedback_count = fip_server::db::count_feedback(&db_pool).await?;
    info!("Database ready ({} feedback messages)", feedback_count);

    let resources = NlpResources::english();
    let pipeline = FeedbackPipeline::new(&resources);

    let state = AppState::new(db_pool, EventBus::new(EVENT_BUS_CAPACITY), pipeline);
    let app = build_router(state, &settings.cors_origins);

    let bind_address = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;
    info!("Listening on http://{}", bind_address);
    info!("Health check: http://{}/health", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
