//! HTTP request handlers.
//!
//! Every request goes through [`dispatch`], which walks the pipeline
//! route -> parse -> compute -> format and bails out with an [`ApiError`]
//! at the first failure.

use axum::{
    body::Body,
    extract::{Query, Request},
    http::{Method, Uri},
    Json,
};

use crate::api::types::{MeanRequest, QueryPairs};
use crate::domain::{NumericResult, Operation, ResultEnvelope, Segments};
use crate::engine;
use crate::error::{ApiError, ApiResult};

/// Upper bound on the body read for `/mean`.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Route a request to its operation and compute the result.
///
/// Only `GET` is served; anything else is reported as not found, the same as
/// an unknown path.
pub async fn dispatch(request: Request) -> ApiResult<Json<ResultEnvelope<NumericResult>>> {
    let (parts, body) = request.into_parts();

    if parts.method != Method::GET {
        return Err(ApiError::not_found(parts.method.as_str(), parts.uri.path()));
    }

    let segments = Segments::parse(parts.uri.path());
    let operation = segments
        .get(1)
        .and_then(|name| name.parse::<Operation>().ok())
        .ok_or_else(|| ApiError::not_found(parts.method.as_str(), parts.uri.path()))?;

    tracing::debug!(%operation, uri = %parts.uri, "Dispatching request");

    let result = match operation {
        Operation::Fibonacci => fibonacci(&segments)?,
        Operation::Factorial => factorial(&parts.uri)?,
        Operation::Mean => mean(body).await?,
    };

    Ok(Json(ResultEnvelope::new(result)))
}

/// GET /fibonacci/{n}
fn fibonacci(segments: &Segments) -> ApiResult<NumericResult> {
    let raw = segments
        .get(2)
        .ok_or_else(|| ApiError::malformed("Missing path segment for n"))?;
    let n = parse_int(raw)?;

    Ok(NumericResult::Integer(engine::fibonacci(n)?))
}

/// GET /factorial?n={n}
fn factorial(uri: &Uri) -> ApiResult<NumericResult> {
    let Query(query) = Query::<QueryPairs>::try_from_uri(uri).map_err(ApiError::malformed)?;
    let raw = query
        .first("n")
        .ok_or_else(|| ApiError::malformed("Missing query parameter n"))?;
    let n = parse_int(raw)?;

    Ok(NumericResult::Integer(engine::factorial(n)?))
}

/// GET /mean with a JSON array body
async fn mean(body: Body) -> ApiResult<NumericResult> {
    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(ApiError::malformed)?;
    let request: MeanRequest = serde_json::from_slice(&bytes).map_err(ApiError::malformed)?;
    let values = request.values().map_err(ApiError::Malformed)?;

    Ok(NumericResult::Float(engine::mean(&values)?))
}

/// Parse a signed decimal integer, tolerating surrounding whitespace.
fn parse_int(raw: &str) -> ApiResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| ApiError::malformed(format!("Invalid integer '{}': {}", raw, e)))
}
