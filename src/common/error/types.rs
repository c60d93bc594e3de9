//! Error type shared by the tree builder, the catalog and the reader adapters.
use thiserror::Error;

/// Main error type for longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading the prefix to inspect
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The same alias string was registered on two nodes
    #[error("alias '{alias}' is registered on both '{first}' and '{second}'")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    /// A node was attached under a second parent
    #[error("node '{node}' is already attached under '{parent}'")]
    AlreadyAttached { node: String, parent: String },

    /// Attaching the node would make it its own ancestor
    #[error("attaching '{node}' would create a cycle")]
    CyclicAttachment { node: String },

    /// The node chosen as root has a parent
    #[error("root node '{0}' is attached under another node")]
    RootAttached(String),

    /// A declared node cannot be reached from the root
    #[error("node '{node}' is not reachable from the root")]
    Unattached { node: String },

    /// A node handle that does not belong to this builder
    #[error("node handle {0} does not belong to this builder")]
    UnknownNode(usize),

    /// Two catalog entries share a key
    #[error("catalog key '{0}' is declared twice")]
    DuplicateKey(String),

    /// A catalog entry names a parent key that is not declared
    #[error("catalog entry '{node}' names unknown parent '{parent}'")]
    UnknownParent { node: String, parent: String },

    /// A catalog has no entry without a parent
    #[error("catalog has no root entry")]
    MissingRoot,
}

/// Result type for longan operations.
pub type Result<T> = std::result::Result<T, Error>;
