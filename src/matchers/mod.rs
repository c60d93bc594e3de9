//! Signature predicates used by the built-in catalog.
//!
//! Every predicate has the shape `fn(&[u8]) -> bool`, is pure, and answers
//! `false` on input too short to decide. A predicate only needs to tell its
//! format apart from its siblings; the tree guarantees that its parent
//! already matched.

pub mod archive;
pub mod audio;
pub mod database;
pub mod document;
pub mod executable;
pub mod font;
pub mod image;
pub mod isobmff;
pub mod json;
pub mod ole;
pub mod text;
pub mod video;
pub mod xml;
pub mod zip;
