use axum::Router;
use axum::routing::get;

use crate::presentation::AppState;
use crate::presentation::handlers::users::{
    create_user, delete_user, get_user, list_users, update_user,
};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
}
