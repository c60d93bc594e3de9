//! Unified error types for longan.
//!
//! Detection itself is infallible. Errors only come from assembling a
//! classification tree with an invalid configuration, or from the I/O
//! adapters that materialize the bounded prefix.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
