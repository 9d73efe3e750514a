//! Domain types for Mathserve.
//!
//! Operations, request paths and the JSON envelopes wrapped around results.

mod envelope;
mod operation;
mod path;

pub use envelope::*;
pub use operation::*;
pub use path::*;
