//! Classification rule stored in a [`Tree`](super::Tree).

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use super::signature::Signature;

/// Index of a node inside its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One immutable classification rule.
///
/// Children are kept in declared order; that order is the precedence the
/// matching engine honors among overlapping siblings. The parent link is a
/// plain index back into the arena and never owns anything.
pub struct Node {
    pub(crate) mime: Cow<'static, str>,
    pub(crate) extension: Cow<'static, str>,
    pub(crate) aliases: SmallVec<[Cow<'static, str>; 2]>,
    pub(crate) signature: Box<dyn Signature>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    pub(crate) fn new(
        mime: Cow<'static, str>,
        extension: Cow<'static, str>,
        signature: Box<dyn Signature>,
    ) -> Self {
        Self {
            mime,
            extension,
            aliases: SmallVec::new(),
            signature,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Canonical `type/subtype[; parameters]` string.
    #[inline]
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Default file extension, without the leading dot. May be empty.
    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Additional type strings equivalent to [`mime`](Self::mime) for this node.
    pub fn aliases(&self) -> impl ExactSizeIterator<Item = &str> {
        self.aliases.iter().map(|a| a.as_ref())
    }

    /// Children in declared (precedence) order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent node, `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub(crate) fn signature(&self) -> &dyn Signature {
        self.signature.as_ref()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("mime", &self.mime)
            .field("extension", &self.extension)
            .field("aliases", &self.aliases)
            .field("children", &self.children)
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}
