//! Router construction.
//!
//! Routing is done by [`handlers::dispatch`] rather than axum's path
//! matcher: the operation name is the first path segment, non-`GET` methods
//! are reported as 404 instead of 405, and a missing `{n}` segment is a
//! malformed request rather than an unmatched route.

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::handlers;

/// Build the API router.
pub fn build_router() -> Router {
    Router::new()
        .fallback(handlers::dispatch)
        .layer(TraceLayer::new_for_http())
}
