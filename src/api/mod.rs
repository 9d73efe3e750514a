//! HTTP API layer for Mathserve.
//!
//! Routes every request through a single dispatcher that selects the
//! operation from the first path segment.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
