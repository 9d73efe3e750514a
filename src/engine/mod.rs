//! Pure numeric computations behind the HTTP surface.
//!
//! - Sequence: Fibonacci terms and factorials over arbitrary-precision integers
//! - Stats: arithmetic mean over floats
//!
//! Nothing in here touches I/O or shared state.

mod error;
mod sequence;
mod stats;

pub use error::*;
pub use sequence::*;
pub use stats::*;
