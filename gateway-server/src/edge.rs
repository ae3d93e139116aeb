//! Per-event adapter for edge hosting.
//!
//! Each inbound event is turned into a request against the same router the
//! HTTP server mounts, so both entry points answer identically. The adapter
//! adds its own CORS headers, short-circuits preflight requests and only
//! exposes the read-mostly subset of the API.

use std::collections::BTreeMap;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Uri, uri::InvalidUri};
use axum::response::{IntoResponse, Response};
use http_body_util::BodyExt;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tower::ServiceExt;
use tracing::debug;

use crate::infrastructure::settings::Settings;
use crate::presentation::app_error::AppError;
use crate::presentation::middleware::panic::apply_catch_panic;
use crate::presentation::{AppState, Platform, http_handlers};

pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, PUT, DELETE, OPTIONS"),
    (
        "access-control-allow-headers",
        "Content-Type, Authorization, X-Requested-With",
    ),
    ("content-type", "application/json"),
];

/// One inbound event. `url` may be absolute (`https://host/path?q`) or a bare path.
#[derive(Debug, Clone, Deserialize)]
pub struct EdgeRequest {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl EdgeResponse {
    fn new(status: u16, body: Option<String>) -> Self {
        Self {
            status,
            headers: cors_headers(),
            body,
        }
    }

    pub fn preflight() -> Self {
        Self::new(200, None)
    }

    /// Response for an event the adapter could not turn into a request.
    pub fn rejected(err: &EdgeError) -> Self {
        let body = json!({ "success": false, "error": err.to_string() });
        Self::new(400, Some(body.to_string()))
    }
}

fn cors_headers() -> BTreeMap<String, String> {
    CORS_HEADERS
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("invalid event: {0}")]
    Event(#[from] serde_json::Error),

    #[error("invalid method '{0}'")]
    InvalidMethod(String),

    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: InvalidUri,
    },

    #[error("failed to build request: {0}")]
    Request(#[from] axum::http::Error),

    #[error("failed to read response body: {0}")]
    Body(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeRoute {
    Forward,
    MethodNotAllowed,
    NotFound,
}

fn classify(method: &Method, path: &str) -> EdgeRoute {
    let allowed: &[Method] = if path == "/" || path == "/health" {
        &[Method::GET]
    } else if path.starts_with("/api/users") {
        &[Method::GET, Method::POST]
    } else if path.starts_with("/api/data") {
        &[Method::GET]
    } else {
        return EdgeRoute::NotFound;
    };

    if allowed.contains(method) {
        EdgeRoute::Forward
    } else {
        EdgeRoute::MethodNotAllowed
    }
}

pub struct EdgeDispatcher {
    router: Router,
}

impl EdgeDispatcher {
    pub fn new(settings: &Settings, state: AppState) -> Self {
        let router = http_handlers::routes(state.with_platform(Platform::Edge));
        Self {
            router: apply_catch_panic(router, !settings.is_production()),
        }
    }

    pub async fn dispatch(&self, event: EdgeRequest) -> Result<EdgeResponse, EdgeError> {
        let method = Method::from_bytes(event.method.to_ascii_uppercase().as_bytes())
            .map_err(|_| EdgeError::InvalidMethod(event.method.clone()))?;
        let uri: Uri = event.url.parse().map_err(|source| EdgeError::InvalidUrl {
            url: event.url.clone(),
            source,
        })?;

        if method == Method::OPTIONS {
            return Ok(EdgeResponse::preflight());
        }

        let path = uri.path().to_string();
        let route = classify(&method, &path);
        debug!(%method, %path, ?route, "edge event");

        let response = match route {
            EdgeRoute::Forward => self.forward(method, &uri, event.headers, event.body).await?,
            EdgeRoute::MethodNotAllowed => AppError::MethodNotAllowed.into_response(),
            EdgeRoute::NotFound => AppError::RouteNotFound { path }.into_response(),
        };

        into_edge_response(response).await
    }

    async fn forward(
        &self,
        method: Method,
        uri: &Uri,
        headers: BTreeMap<String, String>,
        body: Option<String>,
    ) -> Result<Response, EdgeError> {
        let target = uri
            .path_and_query()
            .map_or_else(|| uri.path().to_string(), ToString::to_string);

        let mut builder = Request::builder().method(method).uri(target);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let request = builder.body(Body::from(body.unwrap_or_default()))?;

        let Ok(response) = self.router.clone().oneshot(request).await;
        Ok(response)
    }
}

async fn into_edge_response(response: Response) -> Result<EdgeResponse, EdgeError> {
    let status = response.status().as_u16();
    let bytes = response
        .into_body()
        .collect()
        .await
        .map_err(|err| EdgeError::Body(err.to_string()))?
        .to_bytes();

    let body = if bytes.is_empty() {
        None
    } else {
        Some(String::from_utf8(bytes.to_vec()).map_err(|err| EdgeError::Body(err.to_string()))?)
    };

    Ok(EdgeResponse::new(status, body))
}
