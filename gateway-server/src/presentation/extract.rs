use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::PathRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::app_error::AppError;
use crate::domain::id::RecordId;

/// JSON body extractor that accepts a missing body as `T::default()` and
/// ignores the content type.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| AppError::MalformedBody(err.to_string()))
    }
}

/// `{id}` path segment read with leading-integer semantics.
///
/// A segment that does not percent-decode to UTF-8 is an unparsed id, the
/// same as any other non-numeric segment.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub RecordId);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(Self(RecordId::parse(&raw))),
            Err(PathRejection::FailedToDeserializePathParams(err)) => {
                debug!(error = %err, "path id not decodable");
                Ok(Self(RecordId::UNPARSED))
            }
            Err(rejection) => Err(rejection.into()),
        }
    }
}

/// Decoded query pairs in request order; failures render as the error envelope.
#[derive(Debug, Clone, Default)]
pub struct QueryPairs(pub Vec<(String, String)>);

impl<S> FromRequestParts<S> for QueryPairs
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state).await?;
        Ok(Self(pairs))
    }
}

/// First value of `key` in a decoded query string.
pub fn first_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}
