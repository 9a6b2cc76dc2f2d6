use thiserror::Error;

use crate::node::NodeId;

/// Errors returned by fallible `TrieMap` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The key contains an empty segment or a segment holding the separator.
    #[error("invalid key `{0}`: segments must be non-empty and must not contain `|`")]
    InvalidArgument(String),
    /// The key does not hold a value.
    #[error("`{0}` does not exist in trie map")]
    KeyNotFound(String),
    /// The handle points at a node that has since been released.
    #[error("stale trie node handle {0:?}")]
    StaleNode(NodeId),
}

pub type Result<T> = std::result::Result<T, TrieError>;
