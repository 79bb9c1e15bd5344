use axum::Router;
use tower_http::trace::TraceLayer;

use super::AppState;

/// Build the Axum app.
///
/// No routes are registered yet; every request falls through to axum's
/// default not-found response. Future handlers reach the pool through
/// [`AppState`].
pub fn create_app(state: AppState) -> Router {
    Router::new()
        // Add middleware
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}
