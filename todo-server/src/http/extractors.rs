//! Custom Axum extractors
//!
//! Rejections are mapped to [`ApiError`] so that every input failure
//! answers 400 with a fixed message.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

pub const QUERY_PARSE_FAILED: &str = "failed to parse query params";
pub const ID_NOT_INTEGER: &str = "id must be an integer";
pub const ID_REQUIRED: &str = "id is required";
pub const INVALID_JSON: &str = "invalid json data";

/// Required integer `id` from the query string (`?id=42`).
///
/// Parsed as `i64` so any integer is accepted here; values that cannot be
/// a stored id are left for the lookup to reject. When the key repeats,
/// the first value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdQuery(pub i64);

impl<S> FromRequestParts<S> for IdQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw_query = parts.uri.query().unwrap_or_default();
        if !is_well_formed_query(raw_query) {
            tracing::debug!(query = %raw_query, "query rejected");
            return Err(ApiError::bad_request(QUERY_PARSE_FAILED));
        }

        let Query(params): Query<Vec<(String, String)>> = Query::try_from_uri(&parts.uri)
            .map_err(|e| {
                tracing::debug!(error = %e, "query rejected");
                ApiError::bad_request(QUERY_PARSE_FAILED)
            })?;

        let raw = params
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value))
            .ok_or_else(|| ApiError::bad_request(ID_REQUIRED))?;

        let id = raw.parse::<i64>().map_err(|e| {
            tracing::debug!(error = %e, value = %raw, "id rejected");
            ApiError::bad_request(ID_NOT_INTEGER)
        })?;

        Ok(Self(id))
    }
}

/// Strict query check: `;` separators and `%` not followed by two hex
/// digits are rejected (the form decoder behind [`Query`] accepts both).
fn is_well_formed_query(query: &str) -> bool {
    if query.contains(';') {
        return false;
    }

    let bytes = query.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

/// JSON body that does not insist on a `Content-Type` header.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "body rejected");
            ApiError::bad_request(INVALID_JSON)
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "json rejected");
            ApiError::bad_request(INVALID_JSON)
        })?;

        Ok(Self(value))
    }
}
