//! Classification tree data model.
//!
//! A [`Tree`] is an arena of [`Node`]s rooted at a universal fallback node.
//! It is assembled once by a [`TreeBuilder`], is immutable afterwards, and
//! can be shared freely between threads.

// Submodule declarations
pub mod alias;
pub mod builder;
pub mod node;
pub mod signature;

// Re-exports
pub use alias::AliasIndex;
pub use builder::{NodeRef, TreeBuilder};
pub use node::{Node, NodeId};
pub use signature::Signature;

use crate::detector::engine;
use crate::mime::Mime;

/// An immutable, rooted hierarchy of classification rules.
#[derive(Debug)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    pub(crate) aliases: AliasIndex,
    pub(crate) depth: usize,
}

impl Tree {
    /// Id of the root node.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Unchecked access for ids this tree handed out itself.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Access a node by id, returning `None` for ids from another tree.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Result handle for `id`, or `None` for ids from another tree.
    #[inline]
    pub fn mime(&self, id: NodeId) -> Option<Mime<'_>> {
        self.get(id).map(|_| Mime::new(self, id))
    }

    #[inline]
    pub(crate) fn handle(&self, id: NodeId) -> Mime<'_> {
        Mime::new(self, id)
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Length of the longest root-to-leaf path, in edges.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Alias registry built together with the tree.
    #[inline]
    pub fn aliases(&self) -> &AliasIndex {
        &self.aliases
    }

    /// Node that declared `alias`.
    pub fn alias_owner(&self, alias: &str) -> Option<Mime<'_>> {
        self.aliases.owner(alias).map(|id| self.handle(id))
    }

    /// First node, in pre-order, whose canonical type or aliases match `mime`.
    ///
    /// Parameters such as `; charset=utf-8` are ignored on both sides.
    ///
    /// ```rust
    /// # fn main() -> longan::Result<()> {
    /// let tree = longan::catalog::default_tree()?;
    /// let xml = tree.lookup("text/xml").expect("xml is registered");
    /// assert_eq!(xml.extension(), "xml");
    /// assert!(tree.lookup("application/x-nonexistent").is_none());
    /// # Ok(())
    /// # }
    /// ```
    pub fn lookup(&self, mime: &str) -> Option<Mime<'_>> {
        self.walk().find(|m| m.is(mime))
    }

    /// Pre-order walk in declared child order, starting at the root.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: vec![self.root],
        }
    }

    /// Classify `buf` by walking the tree from the root.
    ///
    /// No prefix limit is applied here; see
    /// [`Detector`](crate::detector::Detector) for the bounded variant.
    #[inline]
    pub fn detect(&self, buf: &[u8]) -> Mime<'_> {
        self.handle(engine::traverse(self, buf, true))
    }
}

/// Pre-order iterator returned by [`Tree::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'t> {
    tree: &'t Tree,
    stack: Vec<NodeId>,
}

impl<'t> Iterator for Walk<'t> {
    type Item = Mime<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.node(id).children().iter().rev().copied());
        Some(self.tree.handle(id))
    }
}
