//! Tree-wide alias registry.
//!
//! Built once, right after the tree is assembled, by visiting every node and
//! recording each of its declared aliases. The index exists to reject
//! duplicate registrations and to answer "who owns this alias" queries;
//! equivalence checks on a detection result never consult it and only look
//! at the matched node's own aliases.

use std::collections::HashMap;

use crate::common::error::{Error, Result};
use crate::mime::normalize;

use super::node::{Node, NodeId};

/// Map from normalized alias string to the node that declared it.
#[derive(Debug, Default)]
pub struct AliasIndex {
    owners: HashMap<String, NodeId>,
}

impl AliasIndex {
    /// Visit `order` and register every alias of every node.
    ///
    /// Fails with [`Error::DuplicateAlias`] on the first alias that is
    /// declared by two different nodes.
    pub(crate) fn build(nodes: &[Node], order: impl IntoIterator<Item = NodeId>) -> Result<Self> {
        let mut owners: HashMap<String, NodeId> = HashMap::new();

        for id in order {
            let node = &nodes[id.0];
            for alias in node.aliases() {
                let key = normalize(alias);
                match owners.get(&key) {
                    Some(&owner) if owner != id => {
                        return Err(Error::DuplicateAlias {
                            alias: alias.to_string(),
                            first: nodes[owner.0].mime().to_string(),
                            second: node.mime().to_string(),
                        });
                    },
                    Some(_) => {},
                    None => {
                        owners.insert(key, id);
                    },
                }
            }
        }

        Ok(Self { owners })
    }

    /// Node that declared `alias`, if any.
    pub fn owner(&self, alias: &str) -> Option<NodeId> {
        self.owners.get(&normalize(alias)).copied()
    }

    /// Number of registered aliases.
    #[inline]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Whether no aliases are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
