use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::data::{
    create_item, delete_item, get_item, list_items, stats_overview, update_item,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/stats/overview", get(stats_overview))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
}
