pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod infra;
pub mod state;

use crate::config::Config;
use crate::infra::factory::bootstrap_state;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("./logs", "eventdesk.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("info,eventdesk=debug"));

    // Keep stdout for the screens; diagnostics go to stderr, quiet by default.
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

pub async fn run() {
    let _guard = init_logging();

    let config = Config::from_env();
    info!(
        "eventdesk starting (directory: {}, api: {})",
        config.directory_url, config.api_url
    );

    let state = Arc::new(bootstrap_state(&config));

    if let Err(e) = console::run_loop(state).await {
        eprintln!("fatal: {e}");
    }
}
