//! Application startup and lifecycle management.

use crate::config::BfhlConfig;
use crate::handlers::{bfhl::dispatch, health::health_check};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: BfhlConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Build the service router. Exposed separately so tests can drive it
/// in-process with `tower::ServiceExt::oneshot`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/bfhl", post(dispatch))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: BfhlConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
        };
        let text_provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini text provider"
        );

        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state: AppState {
                config,
                text_provider,
            },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
