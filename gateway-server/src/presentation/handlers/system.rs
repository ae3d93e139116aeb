use axum::{Json, extract::OriginalUri, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::clock::iso_timestamp;
use crate::presentation::AppState;
use crate::presentation::app_error::AppError;
use crate::presentation::envelope::ApiResponse;

const BANNER: &str = "🚀 API Gateway";

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfoDto {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub timestamp: String,
    pub endpoints: EndpointsDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointsDto {
    pub users: &'static str,
    pub data: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthDto {
    pub status: &'static str,
    pub timestamp: String,
    pub platform: &'static str,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "system",
    responses(
        (status = 200, description = "Service banner", body = ApiResponse<ServiceInfoDto>)
    )
)]
pub async fn service_banner(State(state): State<AppState>) -> Json<ApiResponse<ServiceInfoDto>> {
    let info = ServiceInfoDto {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
        timestamp: iso_timestamp(state.clock.now()),
        endpoints: EndpointsDto {
            users: "/api/users",
            data: "/api/data",
        },
    };

    Json(ApiResponse::ok(info).with_message(BANNER))
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Liveness check", body = ApiResponse<HealthDto>)
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthDto>> {
    Json(ApiResponse::ok(HealthDto {
        status: "ok",
        timestamp: iso_timestamp(state.clock.now()),
        platform: state.platform.as_str(),
    }))
}

/// Answers unknown paths and unsupported methods alike.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
