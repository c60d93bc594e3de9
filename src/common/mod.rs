//! Common types and utilities shared by the tree and the matchers.

// Submodule declarations
pub mod binary;
pub mod bom;
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
