use axum::{Router, routing::get};

use super::handlers::system::{health, route_not_found, service_banner};
use super::{AppState, routes};

/// Application routes without transport middleware. Shared by the HTTP
/// server and the edge adapter.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_banner))
        .route("/health", get(health))
        .merge(routes::router())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(state)
}
