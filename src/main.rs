mod client;
mod config;
mod error;
mod generator;
mod handlers;
mod logger;
mod models;
mod templates;

use axum::{routing::{get, post, Router}};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use client::GroqClient;
use config::Config;
use generator::Generator;
use logger::RequestLog;

// Shared by all handlers. The provider client inside the generator is built
// once at startup and reused, so its connection pool is shared too.
#[derive(Clone)]
pub struct AppState {
    pub generator: Generator,
    pub request_log: RequestLog
}

pub fn build_router(state: AppState) -> Router {

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/generate", post(handlers::generate_handler))
        .with_state(state)

}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    let provider = GroqClient::new(&config.provider)?;

    let state = AppState {
        generator: Generator::new(Arc::new(provider)),
        request_log: RequestLog::new(config.log_path.clone())
    };

    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await?;

    Ok(())

}
