//! Launch Dashboard HTTP Server Binary
//!
//! This is the main entry point for the dashboard. It loads the launch
//! dataset, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # From the workspace root or from backend/, serves the bundled sample
//! cargo run --bin launch-dash-server
//!
//! DASHBOARD_DATA=/srv/launches.csv PORT=8080 cargo run --bin launch-dash-server
//!
//! RUST_LOG=launch_dash=debug,tower_http=debug cargo run --bin launch-dash-server
//! ```
//!
//! See [`launch_dash::config`] for every setting. `RUST_LOG` takes
//! `EnvFilter` directives (default: info).

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use launch_dash::config::DashboardConfig;
use launch_dash::dataset::Dataset;
use launch_dash::http::{create_router, AppState};

/// `RUST_LOG` directives, falling back to `info` when unset or unparsable.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting launch dashboard server");

    let config = DashboardConfig::load().context("Failed to load configuration")?;

    // The dataset is loaded exactly once; a bad file stops the process here.
    let data_path = config.data.resolve();
    let dataset = Dataset::load(&data_path)
        .with_context(|| format!("Failed to load dataset {}", data_path.display()))?;
    info!(
        records = dataset.len(),
        sites = dataset.distinct_sites().len(),
        checksum = dataset.checksum(),
        "Dataset loaded"
    );

    let state = AppState::new(Arc::new(dataset)).with_pie_options(config.pie_options());
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Dashboard listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
