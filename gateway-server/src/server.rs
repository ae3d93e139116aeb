use anyhow::Result;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::limit::ConcurrencyLimitLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::infrastructure::port::bind_with_fallback;
use crate::infrastructure::settings::Settings;
use crate::presentation::middleware::cors::apply_cors;
use crate::presentation::middleware::panic::apply_catch_panic;
use crate::presentation::middleware::trace::apply_trace;
use crate::presentation::openapi::ApiDoc;
use crate::presentation::{AppState, http_handlers};

pub async fn run_http(settings: &Settings, state: AppState) -> Result<()> {
    let app = build_app(settings, state)?;

    let listener =
        bind_with_fallback(&settings.http_host, settings.port, settings.port_max_attempts).await?;
    let addr = listener.local_addr()?;

    info!(environment = settings.environment.as_str(), "HTTP server listening on {addr}");
    info!("users endpoint: http://{addr}/api/users");
    info!("data endpoint: http://{addr}/api/data");
    info!("API docs: http://{addr}/swagger-ui");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Full HTTP application: routes, OpenAPI UI and the middleware stack.
pub fn build_app(settings: &Settings, state: AppState) -> Result<Router> {
    let app = build_router(state)
        .layer(DefaultBodyLimit::max(settings.http_request_body_limit_bytes))
        .layer(ConcurrencyLimitLayer::new(settings.http_concurrency_limit));
    let app = apply_catch_panic(app, !settings.is_production());
    let app = apply_cors(app, settings)?;
    Ok(apply_trace(app))
}

pub(crate) fn build_router(state: AppState) -> Router {
    http_handlers::routes(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
