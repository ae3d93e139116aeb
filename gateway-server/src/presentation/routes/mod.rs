use axum::Router;

use super::AppState;

pub(crate) mod data;
pub(crate) mod users;

/// Both collections answer under `/api/<resource>` and `/<resource>`.
pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .nest("/api/users", users::router())
        .nest("/api/data", data::router())
        .nest("/users", users::router())
        .nest("/data", data::router())
}
