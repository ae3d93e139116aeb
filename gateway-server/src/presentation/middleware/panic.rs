use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use crate::presentation::app_error::AppError;

/// Turns handler panics into the 500 envelope. The panic text is only sent
/// to clients when `expose_details` is set.
pub(crate) fn apply_catch_panic(router: Router, expose_details: bool) -> Router {
    router.layer(CatchPanicLayer::custom(
        move |payload: Box<dyn Any + Send + 'static>| panic_response(payload, expose_details),
    ))
}

pub(crate) fn panic_response(payload: Box<dyn Any + Send + 'static>, expose_details: bool) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "request handler panicked");

    AppError::Internal {
        detail: expose_details.then_some(detail),
    }
    .into_response()
}
