use axum::{
    Json,
    extract::rejection::{BytesRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::domain::error::DomainError;

const ROUTE_NOT_FOUND: &str = "接口不存在";
const METHOD_NOT_ALLOWED: &str = "不支持的请求方法";
const INTERNAL_ERROR: &str = "服务器内部错误";
const RETRY_LATER: &str = "请稍后重试";
const MALFORMED_BODY: &str = "请求体格式错误";

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("request body rejected: {0}")]
    BodyRejected(#[from] BytesRejection),

    #[error("path rejected: {0}")]
    PathRejected(#[from] PathRejection),

    #[error("query string rejected: {0}")]
    QueryRejected(#[from] QueryRejection),

    #[error("no route for {path}")]
    RouteNotFound { path: String },

    #[error("method not allowed")]
    MethodNotAllowed,

    /// `detail` is only populated outside production.
    #[error("internal error")]
    Internal { detail: Option<String> },
}

pub type AppResult<T> = Result<T, AppError>;

/// Error-side shape of the response envelope.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Domain(err) => {
                let status = match &err {
                    DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
                    DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                };
                (
                    status,
                    ErrorBody {
                        message: Some(err.message().to_string()),
                        ..ErrorBody::default()
                    },
                )
            }
            AppError::MalformedBody(detail) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: Some(MALFORMED_BODY.to_string()),
                    message: Some(detail),
                    ..ErrorBody::default()
                },
            ),
            AppError::BodyRejected(rejection) => (
                rejection.status(),
                ErrorBody {
                    error: Some(rejection.body_text()),
                    ..ErrorBody::default()
                },
            ),
            AppError::PathRejected(rejection) => (
                rejection.status(),
                ErrorBody {
                    error: Some(rejection.body_text()),
                    ..ErrorBody::default()
                },
            ),
            AppError::QueryRejected(rejection) => (
                rejection.status(),
                ErrorBody {
                    error: Some(rejection.body_text()),
                    ..ErrorBody::default()
                },
            ),
            AppError::RouteNotFound { path } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: Some(ROUTE_NOT_FOUND.to_string()),
                    path: Some(path),
                    ..ErrorBody::default()
                },
            ),
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody {
                    error: Some(METHOD_NOT_ALLOWED.to_string()),
                    ..ErrorBody::default()
                },
            ),
            AppError::Internal { detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: Some(INTERNAL_ERROR.to_string()),
                    message: Some(detail.unwrap_or_else(|| RETRY_LATER.to_string())),
                    ..ErrorBody::default()
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
