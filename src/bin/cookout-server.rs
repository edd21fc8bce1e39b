// ABOUTME: Cookout server binary serving plan recommendations over HTTP
// ABOUTME: Initializes logging, loads environment config, and runs the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Cookout Server Binary
//!
//! Starts the HTTP API backed by an in-memory store loaded from a JSON snapshot.

use anyhow::{Context, Result};
use clap::Parser;
use cookout_planner::{
    config::ServerConfig,
    constants::routes,
    cookout::{CookoutStore, InMemoryCookoutStore, PlanRecommendationService},
    logging,
    routes::{build_router, DataStatus},
};
use std::future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "cookout-server")]
#[command(about = "Cookout Planner - decides who brings which ingredient")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// JSON snapshot to serve, overriding `COOKOUT_DATA_PATH`
    #[arg(short, long)]
    data: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if args.data.is_some() {
        config.data_path = args.data;
    }

    info!("Starting Cookout Planner server");
    info!("{}", config.summary());

    let (store, data) = match &config.data_path {
        Some(path) => {
            let store = InMemoryCookoutStore::load(path)
                .await
                .with_context(|| format!("Failed to load cookout data from {}", path.display()))?;
            let data = DataStatus::loaded(path.clone(), store.snapshot());
            (store, data)
        }
        None => {
            warn!("No cookout data configured; serving an empty store and reporting not ready");
            (InMemoryCookoutStore::default(), DataStatus::default())
        }
    };

    let store: Arc<dyn CookoutStore> = Arc::new(store);
    let service = Arc::new(PlanRecommendationService::new(store, config.planner));
    let app = build_router(service, Arc::new(data), &config);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address()))?;

    info!("=== Available API Endpoints ===");
    info!("  POST http://{}{}", config.bind_address(), routes::PLAN_RECOMMENDATION);
    info!("  GET  http://{}{}", config.bind_address(), routes::HEALTH);
    info!("  GET  http://{}{}", config.bind_address(), routes::READY);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Cookout server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
