pub mod api;
pub mod client;
pub mod config;
pub mod gemini;
pub mod generation;
pub mod review;
pub mod telemetry;

use std::sync::Arc;

use axum::Router;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::gemini::GeminiClient;
use crate::generation::TextGenerator;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub model: String,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        if config.gemini.api_key.is_none() {
            tracing::warn!("GEMINI_API_KEY is not set; reviews will fail until it is configured");
        }
        let client = GeminiClient::new(&config.gemini)?;
        Ok(Self::new(Arc::new(client), config.gemini.model.clone()))
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

pub async fn run_server(app: Router, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
