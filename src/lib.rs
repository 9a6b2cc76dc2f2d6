//! A path-keyed trie map.
//!
//! This crate provides a `TrieMap`, an ordered tree in which string keys made
//! of `|`-delimited segments address values stored at arbitrary nodes, and the
//! prefixes of a key address the ancestors of its node.
//!
//! # Features
//!
//! - Lookups in O(s) where s is the number of segments in the key
//! - Prefix-scoped, lazy, pre-order enumeration of keys and values
//! - Longest/shortest key extraction over the whole tree
//! - Bulk subtree removal
//! - Stable node handles that detect released subtrees
//! - Entry API for in-place updates
//!
//! ```
//! use pathtrie::TrieMap;
//!
//! let mut badges = TrieMap::new();
//! badges.add("Root|Mails|Secrete", 1).unwrap();
//! badges.add("Root|Mails|System|0", 10).unwrap();
//!
//! let mails: i32 = badges.values_by("Root|Mails").sum();
//! assert_eq!(mails, 11);
//! ```

mod arena;
mod as_path;
mod entry;
mod error;
mod iter;
mod node;
mod trie_map;

pub use as_path::AsPath;
pub use entry::{Entry, OccupiedEntry, VacantEntry};
pub use error::{Result, TrieError};
pub use iter::{Iter, Keys, Values};
pub use node::{NodeId, TrieNode};
pub use trie_map::TrieMap;

/// Separates the segments of a key.
pub const SEPARATOR: char = '|';

/// Segment label of the root node.
pub const ROOT_SEGMENT: &str = "root";

#[cfg(test)]
mod proptest_trie_map;
