//! Longan - content type detection by hierarchical signature matching
//!
//! This library classifies byte content by walking a tree of signature
//! predicates. Every node carries a canonical MIME type, a default extension,
//! optional aliases and a predicate; children refine their parent. Detection
//! starts at the universal root, descends into the first child whose
//! predicate accepts the input, and stops at the deepest match.
//!
//! # Features
//!
//! - **Built-in catalog**: archives, Office and OpenDocument files, images,
//!   audio, video, fonts, executables, text, XML and JSON vocabularies
//! - **Custom trees**: assemble your own hierarchy with [`TreeBuilder`]
//! - **Bounded reads**: only a configurable prefix of the input is inspected
//! - **Fault isolation**: a panicking predicate is logged and treated as a
//!   non-match
//! - **Thread safety**: trees are immutable and shared behind an `Arc`
//!
//! # Example - Detecting a buffer
//!
//! ```
//! use longan::Detector;
//!
//! # fn main() -> longan::Result<()> {
//! let detector = Detector::builtin()?;
//!
//! let gz = detector.detect(&[0x1F, 0x8B, 0x08, 0x00]);
//! assert_eq!(gz.mime(), "application/gzip");
//! assert_eq!(gz.extension(), "gz");
//! assert!(gz.is("application/x-gzip"));
//!
//! let unknown = detector.detect(&[0x8F, 0x03, 0xD1]);
//! assert_eq!(unknown.mime(), "application/octet-stream");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Detecting a file
//!
//! ```no_run
//! use longan::Detector;
//!
//! # fn main() -> longan::Result<()> {
//! let detector = Detector::builtin()?;
//! let mime = detector.detect_file("report.docx")?;
//!
//! // The whole chain from the root down to the match.
//! for step in mime.ancestors() {
//!     println!("{} (.{})", step.mime(), step.extension());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - A custom tree
//!
//! ```
//! use longan::TreeBuilder;
//! use longan::tree::signature::any;
//!
//! # fn main() -> longan::Result<()> {
//! let mut builder = TreeBuilder::new();
//! let rss = builder.node("application/rss+xml", "rss", |buf: &[u8]| buf.starts_with(b"<rss"));
//! builder.alias(rss, ["text/rss"])?;
//! let root = builder.node_with("application/octet-stream", "", any, [rss])?;
//! let tree = builder.build(root)?;
//!
//! assert!(tree.detect(b"<rss version=\"2.0\">").is("text/rss"));
//! # Ok(())
//! # }
//! ```

/// Built-in format table and its compiler
pub mod catalog;

/// Binary readers, byte order marks and the error type
pub mod common;

/// Detection entry points: options, traversal and reader adapters
pub mod detector;

/// Signature predicates grouped by format family
pub mod matchers;

/// Detection result handle
pub mod mime;

/// Classification tree, nodes, builder and alias index
pub mod tree;

// Re-export commonly used types for convenience
pub use common::error::{Error, Result};
pub use detector::Detector;
pub use detector::options::DetectOptions;
pub use mime::Mime;
pub use tree::{NodeId, Signature, Tree, TreeBuilder};
