// ABOUTME: Diet Planner server binary
// ABOUTME: Loads configuration and the recipe catalog, then serves the HTTP API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Diet Planner Server Binary
//!
//! Startup aborts if the engine configuration or the embedded catalog is
//! invalid; everything after that is served without failing requests.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use diet_intelligence::{PlannerConfig, RecipeCatalog};
use diet_planner::{config::ServerConfig, logging, resources::ServerResources, routes};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "diet-planner-server")]
#[command(about = "Diet Planner - meal plans and calorie goals over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    info!("{}", config.summary());

    let planner = PlannerConfig::load().map_err(|e| {
        error!("Invalid planner configuration: {e}");
        e
    })?;
    let catalog = RecipeCatalog::embedded().map_err(|e| {
        error!("Recipe catalog failed to load: {e}");
        e
    })?;

    let (host, port) = config.bind_address();
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {host}:{port}"))?;
    let local_addr = listener.local_addr().context("Listener has no local address")?;

    let resources = Arc::new(ServerResources::from_config(catalog, planner, config)?);
    let app = routes::router(resources);

    info!("Diet Planner listening on http://{local_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Diet Planner stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
