//! AutoOps Server - Shift Coverage HTTP Backend
//!
//! A small axum service in front of the coverage gateway, providing:
//! - `GET /` and `GET /health` service metadata
//! - `POST /event/shift-missing` to request a replacement employee
//!
//! The decision itself is made by an external workflow; see `autoops-core`.

pub mod api;

use std::net::SocketAddr;
use std::sync::Arc;

use autoops_core::{AppState, AppStateInner, ServerError, WorkflowConfig};
use axum::response::IntoResponse;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Configuration for the AutoOps backend server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workflow: WorkflowConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            workflow: WorkflowConfig::default(),
        }
    }
}

/// Create a shared `AppState` from workflow configuration.
///
/// An unconfigured workflow URL still yields a usable state; coverage
/// requests are then answered with a configuration error.
pub fn create_app_state(workflow: &WorkflowConfig) -> Result<AppState, String> {
    let inner = AppStateInner::from_config(workflow)
        .map_err(|e| format!("Failed to initialize coverage gateway: {}", e))?;
    Ok(Arc::new(inner))
}

/// Build the full router (API routes plus middleware) for a given state.
pub fn app_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::api_router())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the AutoOps backend server.
///
/// Returns the actual address the server is listening on.
pub async fn start_server(config: ServerConfig) -> Result<SocketAddr, String> {
    // Initialize tracing (no-op if the binary already did)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "autoops_core=info,autoops_server=info,tower_http=info".into()),
        )
        .try_init();

    tracing::info!(
        "Starting AutoOps backend server on {}:{}",
        config.host,
        config.port
    );

    let state = create_app_state(&config.workflow)?;

    start_server_with_state(config, state).await
}

/// Start the HTTP server with a pre-built `AppState`.
pub async fn start_server_with_state(
    config: ServerConfig,
    state: AppState,
) -> Result<SocketAddr, String> {
    let app = app_router(state);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get local address: {}", e))?;

    tracing::info!("AutoOps backend server listening on {}", local_addr);

    // Spawn the server in a background task
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Server error: {}", e);
        }
    });

    Ok(local_addr)
}

/// Turn a handler panic into the generic 500 body.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::response::Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ServerError::Internal(format!("handler panicked: {}", detail)).into_response()
}
