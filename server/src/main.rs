mod config;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::services::products::HttpProductFetcher;
use crate::services::storage::S3ObjectLister;

#[tokio::main]
async fn main() {
    // A missing .env is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    if config.storage.bucket_name.is_none() {
        tracing::warn!("REACT_APP_S3_BUCKET_NAME not set; bucket listing will fail");
    }

    let products = match HttpProductFetcher::new(&config.catalog) {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(error = %e, "failed to build catalog http client");
            std::process::exit(1);
        }
    };
    tracing::info!(endpoint = products.endpoint(), "catalog fetcher ready");
    let objects = S3ObjectLister::new(config.storage.clone());

    let state = state::AppState::new(Arc::new(products), Arc::new(objects));

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to assemble router");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let listener = match tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %port, "failed to bind");
            std::process::exit(1);
        }
    };

    tracing::info!(%port, region = %config.storage.region, "storefront listening");
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server failed");
        std::process::exit(1);
    }
}
