//! Assembly of a classification tree.
//!
//! Nodes are declared first, then attached to their parents. Attaching a
//! list of children in one call reproduces the nested declarative style:
//!
//! ```rust
//! use longan::tree::TreeBuilder;
//! use longan::tree::signature::any;
//!
//! # fn main() -> longan::Result<()> {
//! let mut builder = TreeBuilder::new();
//! let gzip = builder.node("application/gzip", "gz", |b: &[u8]| b.starts_with(&[0x1F, 0x8B]));
//! builder.alias(gzip, ["application/x-gzip"])?;
//! let root = builder.node_with("application/octet-stream", "", any, [gzip])?;
//! let tree = builder.build(root)?;
//!
//! assert_eq!(tree.detect(&[0x1F, 0x8B, 0x08]).extension(), "gz");
//! # Ok(())
//! # }
//! ```
//!
//! Every structural mistake (a node with two parents, a cycle, an alias
//! declared on two nodes, a node nobody attached) is reported by the
//! builder. A built [`Tree`] can no longer be modified.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::debug;

use crate::common::error::{Error, Result};

use super::Tree;
use super::alias::AliasIndex;
use super::node::{Node, NodeId};
use super::signature::Signature;

static NEXT_BUILDER: AtomicUsize = AtomicUsize::new(0);

/// Handle to a node declared in a [`TreeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    builder: usize,
    index: usize,
}

/// Collects nodes and their parent links, then freezes them into a [`Tree`].
#[derive(Debug)]
pub struct TreeBuilder {
    id: usize,
    nodes: Vec<Node>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            id: NEXT_BUILDER.fetch_add(1, Ordering::Relaxed),
            nodes: Vec::new(),
        }
    }

    /// Declare a detached node.
    pub fn node<S>(
        &mut self,
        mime: impl Into<Cow<'static, str>>,
        extension: impl Into<Cow<'static, str>>,
        signature: S,
    ) -> NodeRef
    where
        S: Signature + 'static,
    {
        let index = self.nodes.len();
        self.nodes
            .push(Node::new(mime.into(), extension.into(), Box::new(signature)));
        NodeRef {
            builder: self.id,
            index,
        }
    }

    /// Declare a node and attach `children` to it in the given order.
    pub fn node_with<S>(
        &mut self,
        mime: impl Into<Cow<'static, str>>,
        extension: impl Into<Cow<'static, str>>,
        signature: S,
        children: impl IntoIterator<Item = NodeRef>,
    ) -> Result<NodeRef>
    where
        S: Signature + 'static,
    {
        let parent = self.node(mime, extension, signature);
        for child in children {
            self.attach(parent, child)?;
        }
        Ok(parent)
    }

    /// Append `child` to the end of `parent`'s child list.
    ///
    /// A node can be attached only once, and never below itself.
    pub fn attach(&mut self, parent: NodeRef, child: NodeRef) -> Result<()> {
        let parent = self.resolve(parent)?;
        let child = self.resolve(child)?;

        if let Some(existing) = self.nodes[child.0].parent {
            return Err(Error::AlreadyAttached {
                node: self.nodes[child.0].mime().to_string(),
                parent: self.nodes[existing.0].mime().to_string(),
            });
        }

        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(Error::CyclicAttachment {
                    node: self.nodes[child.0].mime().to_string(),
                });
            }
            cursor = self.nodes[id.0].parent;
        }

        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    /// Record alias strings on `node` and hand the node back for chaining.
    ///
    /// Repeating an alias on the same node is ignored. Declaring it on a
    /// second node fails when the tree is built.
    pub fn alias<I, A>(&mut self, node: NodeRef, aliases: I) -> Result<NodeRef>
    where
        I: IntoIterator<Item = A>,
        A: Into<Cow<'static, str>>,
    {
        let id = self.resolve(node)?;
        let target = &mut self.nodes[id.0];
        for alias in aliases {
            let alias = alias.into();
            if !target.aliases.iter().any(|a| *a == alias) {
                target.aliases.push(alias);
            }
        }
        Ok(node)
    }

    /// Number of declared nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been declared yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Validate the hierarchy below `root` and freeze it.
    pub fn build(self, root: NodeRef) -> Result<Tree> {
        let root = self.resolve(root)?;
        let nodes = self.nodes;

        if nodes[root.0].parent.is_some() {
            return Err(Error::RootAttached(nodes[root.0].mime().to_string()));
        }

        // Breadth-first walk for reachability and depth.
        let mut reached = vec![false; nodes.len()];
        let mut order = Vec::with_capacity(nodes.len());
        let mut depth = 0;
        let mut queue = VecDeque::from([(root, 0usize)]);
        while let Some((id, level)) = queue.pop_front() {
            reached[id.0] = true;
            order.push(id);
            depth = depth.max(level);
            queue.extend(nodes[id.0].children.iter().map(|&c| (c, level + 1)));
        }

        if let Some(orphan) = reached.iter().position(|r| !r) {
            return Err(Error::Unattached {
                node: nodes[orphan].mime().to_string(),
            });
        }

        let aliases = AliasIndex::build(&nodes, order)?;

        debug!(
            nodes = nodes.len(),
            aliases = aliases.len(),
            depth,
            root = nodes[root.0].mime(),
            "built classification tree"
        );

        Ok(Tree {
            nodes,
            root,
            aliases,
            depth,
        })
    }

    fn resolve(&self, node: NodeRef) -> Result<NodeId> {
        if node.builder != self.id || node.index >= self.nodes.len() {
            return Err(Error::UnknownNode(node.index));
        }
        Ok(NodeId(node.index))
    }
}
