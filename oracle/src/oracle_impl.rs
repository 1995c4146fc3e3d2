//! Main oracle server implementation
//!
//! Owns the configuration and handler state, assembles the router and runs
//! the HTTP server until a shutdown signal arrives.

use axum::{
    Router,
    routing::{get, post},
};
use shared::{ServiceId, logging, service_info};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::{API_BASE_PATH, OracleConfig};
use crate::core::{OracleEngine, StatusReporter};
use crate::error::{OracleError, OracleResult};
use crate::state::AppState;
use crate::traits::RandomSource;
use crate::web::handlers::api;

/// HTTP server with an injected random source
pub struct OracleServer<R: RandomSource> {
    config: OracleConfig,
    state: AppState<R>,
    shutdown_tx: mpsc::Sender<()>,
    shutdown_rx: mpsc::Receiver<()>,
}

impl<R> OracleServer<R>
where
    R: RandomSource + 'static,
{
    pub fn new(config: OracleConfig, rng: R) -> Self {
        let engine = OracleEngine::new(rng);
        let reporter = StatusReporter::new(config.service_name.clone());
        let (shutdown_tx, shutdown_rx) = mpsc::channel(1);

        Self {
            config,
            state: AppState::new(engine, reporter),
            shutdown_tx,
            shutdown_rx,
        }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState<R> {
        &self.state
    }

    /// Sender that stops `run`/`serve` gracefully when a message arrives
    pub fn get_shutdown_sender(&self) -> mpsc::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        let api_routes = Router::new()
            .route(
                "/health",
                get(api::health::<R>).fallback(api::method_not_allowed),
            )
            .route(
                "/status",
                get(api::status::<R>).fallback(api::method_not_allowed),
            )
            .route(
                "/predict",
                post(api::predict::<R>).fallback(api::method_not_allowed),
            )
            .route(
                "/optimize",
                post(api::optimize::<R>).fallback(api::method_not_allowed),
            );

        Router::new()
            .nest(API_BASE_PATH, api_routes)
            .fallback(api::not_found)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.state.clone())
    }

    /// Bind the configured address and serve until shutdown
    pub async fn run(self) -> OracleResult<()> {
        let address = self.config.bind_address;
        let listener = TcpListener::bind(address).await.map_err(|e| {
            OracleError::ServerStartup(format!("Failed to bind to {address}: {e}"))
        })?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until shutdown
    pub async fn serve(self, listener: TcpListener) -> OracleResult<()> {
        let router = self.build_router();
        let local_addr = listener.local_addr()?;

        let OracleServer {
            shutdown_tx,
            mut shutdown_rx,
            ..
        } = self;

        service_info!(
            ServiceId::current(),
            "🌐 Quantum oracle listening on http://{}{}",
            local_addr,
            API_BASE_PATH
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown_rx.recv().await;
                logging::log_shutdown(ServiceId::current(), "Shutdown signal received");
            })
            .await?;

        // Held until here so the channel cannot close while serving
        drop(shutdown_tx);

        Ok(())
    }
}
