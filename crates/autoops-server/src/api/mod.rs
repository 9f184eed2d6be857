pub mod events;
pub mod meta;

use axum::Router;

use autoops_core::AppState;

/// Build the complete API router with all sub-routes.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(meta::router())
        .nest("/event", events::router())
}
