//! Detection result.
//!
//! A [`Mime`] is a cheap, copyable handle to the node a detection call
//! stopped at. It borrows the tree it came from.

use std::fmt;

use smallvec::SmallVec;

use crate::tree::{NodeId, Tree};

/// The `type/subtype` part of a media type, without parameters or padding.
#[inline]
pub(crate) fn essence(mime: &str) -> &str {
    mime.split(';').next().unwrap_or(mime).trim()
}

/// Lowercased essence, used as the key for alias lookups.
#[inline]
pub(crate) fn normalize(mime: &str) -> String {
    essence(mime).to_ascii_lowercase()
}

/// A classification produced by walking a [`Tree`].
#[derive(Clone, Copy)]
pub struct Mime<'t> {
    tree: &'t Tree,
    id: NodeId,
}

impl<'t> Mime<'t> {
    #[inline]
    pub(crate) fn new(tree: &'t Tree, id: NodeId) -> Self {
        Self { tree, id }
    }

    /// Id of the matched node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The tree this result belongs to.
    #[inline]
    pub fn tree(&self) -> &'t Tree {
        self.tree
    }

    /// Canonical type string, parameters included (e.g. `text/plain; charset=utf-8`).
    #[inline]
    pub fn mime(&self) -> &'t str {
        self.tree.node(self.id).mime()
    }

    /// Default extension without the dot. Empty for umbrella nodes.
    #[inline]
    pub fn extension(&self) -> &'t str {
        self.tree.node(self.id).extension()
    }

    /// Aliases declared on the matched node.
    pub fn aliases(&self) -> impl ExactSizeIterator<Item = &'t str> + use<'t> {
        self.tree.node(self.id).aliases()
    }

    /// Whether `candidate` names this classification.
    ///
    /// Parameters are stripped and the comparison is ASCII case-insensitive.
    /// Only the matched node's own type and aliases are consulted, never
    /// those of its ancestors or of unrelated nodes.
    ///
    /// ```rust
    /// # fn main() -> longan::Result<()> {
    /// let tree = longan::catalog::default_tree()?;
    /// let gz = tree.detect(&[0x1F, 0x8B, 0x08, 0x00]);
    /// assert!(gz.is("application/gzip"));
    /// assert!(gz.is("application/x-gzip"));
    /// assert!(!gz.is("application/octet-stream"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn is(&self, candidate: &str) -> bool {
        let candidate = essence(candidate);
        essence(self.mime()).eq_ignore_ascii_case(candidate)
            || self
                .aliases()
                .any(|alias| essence(alias).eq_ignore_ascii_case(candidate))
    }

    /// Direct parent classification, `None` at the root.
    pub fn parent(&self) -> Option<Mime<'t>> {
        self.tree
            .node(self.id)
            .parent()
            .map(|p| Mime::new(self.tree, p))
    }

    /// Chain from the root down to (and including) this node.
    pub fn ancestors(&self) -> SmallVec<[Mime<'t>; 8]> {
        let mut chain: SmallVec<[Mime<'t>; 8]> = SmallVec::new();
        let mut cursor = Some(*self);
        while let Some(m) = cursor {
            chain.push(m);
            cursor = m.parent();
        }
        chain.reverse();
        chain
    }

    /// Number of edges between the root and this node.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent();
        while let Some(m) = cursor {
            depth += 1;
            cursor = m.parent();
        }
        depth
    }

    /// Whether this is the root (nothing more specific matched).
    #[inline]
    pub fn is_root(&self) -> bool {
        self.id == self.tree.root()
    }

    /// Whether `other` lies on this node's ancestor chain (itself included).
    pub fn descends_from(&self, other: &Mime<'_>) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.ancestors().iter().any(|m| m.id == other.id)
    }
}

impl PartialEq for Mime<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Mime<'_> {}

impl fmt::Debug for Mime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mime")
            .field("mime", &self.mime())
            .field("extension", &self.extension())
            .finish()
    }
}

impl fmt::Display for Mime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}
