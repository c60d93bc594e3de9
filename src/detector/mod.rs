//! Matching engine and its bounded-input front end.
//!
//! A [`Detector`] pairs a shared, immutable [`Tree`] with the
//! [`DetectOptions`] that decide how much of the input the signatures get to
//! see. Detection never fails: anything that matches nothing more specific
//! is reported as the root classification.

// Submodule declarations
pub(crate) mod engine;
pub mod options;
pub mod reader;

// Re-exports
pub use options::{DEFAULT_READ_LIMIT, DetectOptions};
pub use reader::read_prefix;

use std::sync::Arc;

use rayon::prelude::*;

use crate::catalog;
use crate::common::error::Result;
use crate::mime::Mime;
use crate::tree::Tree;

/// Content-type detector over a shared classification tree.
///
/// Cloning is cheap; clones share the tree.
///
/// # Examples
///
/// ```rust
/// use longan::Detector;
///
/// # fn main() -> longan::Result<()> {
/// let detector = Detector::builtin()?;
///
/// let mime = detector.detect(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR");
/// assert_eq!(mime.mime(), "image/png");
/// assert_eq!(mime.extension(), "png");
///
/// // Nothing recognizable: the generic binary type.
/// let unknown = detector.detect(&[0x8F, 0x03, 0xD1]);
/// assert_eq!(unknown.mime(), "application/octet-stream");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Detector {
    tree: Arc<Tree>,
    options: DetectOptions,
}

impl Detector {
    /// Detector over `tree` with default options.
    pub fn new(tree: impl Into<Arc<Tree>>) -> Self {
        Self {
            tree: tree.into(),
            options: DetectOptions::default(),
        }
    }

    /// Detector over the built-in catalog.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(catalog::default_tree()?))
    }

    /// Replace the options, keeping the tree.
    #[inline]
    pub fn with_options(mut self, options: DetectOptions) -> Self {
        self.options = options;
        self
    }

    /// The classification tree.
    #[inline]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Current options.
    #[inline]
    pub fn options(&self) -> &DetectOptions {
        &self.options
    }

    /// Classify `buf`. Only the first `read_limit` bytes are inspected.
    pub fn detect(&self, buf: &[u8]) -> Mime<'_> {
        let bounded = self.options.bound(buf);
        let id = engine::traverse(&self.tree, bounded, self.options.isolate_faults);
        self.tree.handle(id)
    }

    /// Classify many buffers in parallel. Results keep the input order.
    pub fn detect_batch<B>(&self, bufs: &[B]) -> Vec<Mime<'_>>
    where
        B: AsRef<[u8]> + Sync,
    {
        bufs.par_iter().map(|b| self.detect(b.as_ref())).collect()
    }
}
