use std::future::IntoFuture;

use crate::model::{MemoryStore, ModelManager};
use crate::utils::signal::shutdown_signal;
use crate::{error::AppResult, web::AppState};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub mod config;
pub use config::{Config, ConfigError, ConfigResult};

pub mod error;
pub mod graph;
pub mod model;
pub mod utils;
pub mod web;

static APPLICATION_NAME: &str = "edtech";

pub async fn build_server() -> AppResult<(AppState, Router)> {
    let use_local = cfg!(debug_assertions);
    let config = config::Config::get_or_init(use_local).await;

    Ok(build_server_with_store(MemoryStore::seeded(), config))
}

pub fn build_server_with_store(store: MemoryStore, config: &Config) -> (AppState, Router) {
    let mm = ModelManager::new(store);
    let state = AppState::new(mm);
    let app = web::routes::build_app(state.clone(), config);
    (state, app)
}

#[tracing::instrument]
pub async fn setup_workers() -> AppResult<()> {
    let (_, app) = build_server().await?;
    let config = Config::get_or_init(cfg!(debug_assertions)).await;
    let listener = TcpListener::bind(config.host().bindto()).await?;

    tracing::info!("axum is starting at: {}", config.host().bindto());

    let shutdown = CancellationToken::new();
    let axum_handle = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .into_future();

    let grace = config.app().shutdown_grace();
    let deadline = async {
        shutdown_signal().await;
        shutdown.cancel();
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        res = axum_handle => res?,
        _ = deadline => {
            tracing::warn!("in-flight requests still running after {:?}, exiting.", grace);
        }
    }

    tracing::info!("server stopped.");
    Ok(())
}

fn setup_trace() {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

    // load .env file for RUST_LOG etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .with(ErrorLayer::default())
        .init();

    tracing::debug!("tracing initialized.");
}

#[tracing::instrument]
pub async fn run() -> AppResult<()> {
    setup_trace();
    setup_workers().await?;
    Ok(())
}
