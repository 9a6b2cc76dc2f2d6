use std::fmt;

use tracing::{debug, trace, warn};

use crate::arena::NodeArena;
use crate::as_path::AsPath;
use crate::entry::{Entry, OccupiedEntry, VacantEntry};
use crate::error::{Result, TrieError};
use crate::iter::{Iter, Keys, Values};
use crate::node::{NodeId, TrieNode};

const LOG_TARGET: &str = "pathtrie::trie_map";

/// A `TrieMap` stores values at nodes addressed by `|`-delimited paths.
///
/// Every segment of a key names one level of the tree, so the prefixes of a
/// key address the ancestors of its node. A node may hold a value, may only
/// lead to other nodes, or both.
///
/// # Examples
///
/// ```
/// use pathtrie::TrieMap;
///
/// let mut map = TrieMap::new();
///
/// map.add("Root|Mails|Secrete", 1).unwrap();
/// map.add("Root|Mails|System|0", 10).unwrap();
///
/// assert_eq!(map.value_by("Root|Mails|Secrete").unwrap(), 1);
/// assert!(map.has_key_prefix("Root|Mails"));
/// assert!(!map.has_key("Root|Mails"));
///
/// let keys: Vec<String> = map.keys_by("Root|Mails").collect();
/// assert_eq!(keys, ["Root|Mails|Secrete", "Root|Mails|System|0"]);
/// ```
pub struct TrieMap<V> {
    pub(crate) arena: NodeArena<V>,
    pub(crate) size: usize,
}

fn validate<K: AsPath + ?Sized>(key: &K) -> Result<()> {
    if key.is_valid_path() {
        Ok(())
    } else {
        Err(TrieError::InvalidArgument(key.to_key()))
    }
}

impl<V> Default for TrieMap<V> {
    /// Creates a new empty `TrieMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let map: TrieMap<i32> = Default::default();
    /// assert!(map.is_empty());
    /// ```
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> Clone for TrieMap<V> {
    fn clone(&self) -> Self {
        TrieMap {
            arena: self.arena.clone(),
            size: self.size,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for TrieMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.key_value_pairs()).finish()
    }
}

impl<V: PartialEq> PartialEq for TrieMap<V> {
    fn eq(&self, other: &Self) -> bool {
        if self.size != other.size {
            return false;
        }

        self.key_value_pairs()
            .all(|(key, value)| other.get(key.as_str()) == Some(value))
    }
}

impl<V: Eq> Eq for TrieMap<V> {}

impl<K: AsPath, V> Extend<(K, V)> for TrieMap<V> {
    /// Adds every pair, skipping keys that contain empty segments.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(err) = self.add(&key, value) {
                warn!(target: LOG_TARGET, %err, "Skipping malformed key");
            }
        }
    }
}

impl<K: AsPath, V> FromIterator<(K, V)> for TrieMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TrieMap::new();
        map.extend(iter);
        map
    }
}

impl<'a, V> IntoIterator for &'a TrieMap<V> {
    type Item = (String, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.key_value_pairs()
    }
}

impl<V> TrieMap<V> {
    /// Creates a new empty `TrieMap`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let map: TrieMap<i32> = TrieMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        TrieMap {
            arena: NodeArena::new(),
            size: 0,
        }
    }

    /// Creates a new `TrieMap` with room for at least `capacity` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let map: TrieMap<i32> = TrieMap::with_capacity(64);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        TrieMap {
            arena: NodeArena::with_capacity(capacity),
            size: 0,
        }
    }

    /// Returns the number of keys holding a value.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of live nodes, the root included.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// assert_eq!(map.node_count(), 1);
    ///
    /// map.add("a|b", 1).unwrap();
    /// assert_eq!(map.node_count(), 3);
    /// ```
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Walks from the root along the segments of `key`.
    ///
    /// Malformed keys never resolve: no node is ever created for an empty
    /// segment or for a segment containing the separator.
    fn descend<K: AsPath + ?Sized>(&self, key: &K) -> Option<NodeId> {
        key.segments().try_fold(self.arena.root(), |current, segment| {
            self.arena.get(current)?.get_child(segment)
        })
    }

    /// Walks from the root along the segments of `key`, creating every
    /// missing node on the way. `key` must already be validated.
    pub(crate) fn create_path<K: AsPath + ?Sized>(&mut self, key: &K) -> Result<NodeId> {
        let mut current = self.arena.root();

        for segment in key.segments() {
            let node = self.arena.get(current).ok_or(TrieError::StaleNode(current))?;
            current = match node.get_child(segment) {
                Some(child) => child,
                None => {
                    trace!(target: LOG_TARGET, segment, "Creating trie node");
                    self.arena
                        .add_child(current, segment)
                        .ok_or(TrieError::StaleNode(current))?
                }
            };
        }

        Ok(current)
    }

    /// Adds a value for `key`, creating any missing node along its path.
    ///
    /// Overwrites a previous value and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidArgument`] if the key has an empty segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// assert_eq!(map.add("a|b", 1).unwrap(), None);
    /// assert_eq!(map.add("a|b", 2).unwrap(), Some(1));
    /// assert_eq!(map.get("a|b"), Some(&2));
    ///
    /// assert!(map.add("a||b", 3).is_err());
    /// ```
    pub fn add<K: AsPath>(&mut self, key: K, value: V) -> Result<Option<V>> {
        validate(&key)?;
        let node_id = self.create_path(&key)?;
        self.set_value_at(node_id, value)
    }

    /// Returns the value stored for `key`, or `V::default()` when the key has
    /// no value.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidArgument`] if the key has an empty segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("Root|Mails", 3).unwrap();
    ///
    /// assert_eq!(map.value_by("Root|Mails").unwrap(), 3);
    /// assert_eq!(map.value_by("Root|Missing").unwrap(), 0);
    /// ```
    pub fn value_by<K: AsPath>(&self, key: K) -> Result<V>
    where
        V: Clone + Default,
    {
        validate(&key)?;
        Ok(self.get(&key).cloned().unwrap_or_default())
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a", 1).unwrap();
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("b"), None);
    /// ```
    pub fn get<K: AsPath>(&self, key: K) -> Option<&V> {
        let node_id = self.descend(&key)?;
        self.value_at(node_id)
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a", 1).unwrap();
    ///
    /// if let Some(value) = map.get_mut("a") {
    ///     *value = 10;
    /// }
    /// assert_eq!(map.get("a"), Some(&10));
    /// ```
    pub fn get_mut<K: AsPath>(&mut self, key: K) -> Option<&mut V> {
        let node_id = self.descend(&key)?;
        self.value_at_mut(node_id)
    }

    /// Returns `true` if a node exists for `key` and holds a value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a|b", 1).unwrap();
    /// assert!(map.has_key("a|b"));
    /// assert!(!map.has_key("a"));
    /// ```
    pub fn has_key<K: AsPath>(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Returns `true` if a node exists for `prefix`, with or without a value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a|b", 1).unwrap();
    /// assert!(map.has_key_prefix("a"));
    /// assert!(map.has_key_prefix("a|b"));
    /// assert!(!map.has_key_prefix("a|c"));
    /// ```
    pub fn has_key_prefix<K: AsPath>(&self, prefix: K) -> bool {
        self.descend(&prefix).is_some()
    }

    /// Resolves `prefix` to the handle of its node.
    ///
    /// The empty prefix resolves to the root. Handles stay valid until their
    /// node is released, so they can be cached and used with
    /// [`value_at_mut`](Self::value_at_mut) and friends.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("Root|Mails", 1).unwrap();
    ///
    /// let mails = map.get_trie_node("Root|Mails").unwrap();
    /// assert_eq!(map.get_trie_node("Root|Mails"), Some(mails));
    /// assert_eq!(map.get_trie_node(""), Some(map.get_root_trie_node()));
    /// assert_eq!(map.get_trie_node("Root|Other"), None);
    /// ```
    pub fn get_trie_node<K: AsPath>(&self, prefix: K) -> Option<NodeId> {
        self.descend(&prefix)
    }

    /// Returns the handle of the root node. It stays valid for the lifetime
    /// of the map, across [`clear`](Self::clear) included.
    pub fn get_root_trie_node(&self) -> NodeId {
        self.arena.root()
    }

    /// Gets the node behind a handle, or `None` if the handle is stale.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a|b", 1).unwrap();
    ///
    /// let a = map.get_trie_node("a").unwrap();
    /// let node = map.node(a).unwrap();
    /// assert_eq!(node.segment(), "a");
    /// assert!(!node.has_value());
    /// assert_eq!(node.child_segments().collect::<Vec<_>>(), ["b"]);
    /// ```
    pub fn node(&self, id: NodeId) -> Option<&TrieNode<V>> {
        self.arena.get(id)
    }

    /// Looks up the child of `id` for a single segment.
    pub fn child_of(&self, id: NodeId, segment: &str) -> Option<NodeId> {
        self.arena.get(id)?.get_child(segment)
    }

    pub fn value_at(&self, id: NodeId) -> Option<&V> {
        self.arena.get(id)?.value()
    }

    pub fn value_at_mut(&mut self, id: NodeId) -> Option<&mut V> {
        self.arena.get_mut(id)?.value.as_mut()
    }

    /// Stores a value on the node behind `id`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::StaleNode`] if the node has been released.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a|b", 1).unwrap();
    ///
    /// let a = map.get_trie_node("a").unwrap();
    /// assert_eq!(map.set_value_at(a, 5).unwrap(), None);
    /// assert_eq!(map.get("a"), Some(&5));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn set_value_at(&mut self, id: NodeId, value: V) -> Result<Option<V>> {
        let node = self.arena.get_mut(id).ok_or(TrieError::StaleNode(id))?;
        let previous = node.set_value(value);
        if previous.is_none() {
            self.size += 1;
        }
        Ok(previous)
    }

    /// Takes the value off the node behind `id`, leaving its children alone.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::StaleNode`] if the node has been released.
    pub fn take_value_at(&mut self, id: NodeId) -> Result<Option<V>> {
        let node = self.arena.get_mut(id).ok_or(TrieError::StaleNode(id))?;
        let value = node.take_value();
        if value.is_some() {
            self.size -= 1;
        }
        Ok(value)
    }

    /// Drops the value and the whole subtree below the node behind `id`.
    ///
    /// The node itself stays in place. Returns `false` if the handle is stale.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a", 1).unwrap();
    /// map.add("a|b", 2).unwrap();
    ///
    /// let a = map.get_trie_node("a").unwrap();
    /// assert!(map.clear_node(a));
    /// assert!(map.has_key_prefix("a"));
    /// assert!(!map.has_key_prefix("a|b"));
    /// assert!(map.is_empty());
    /// ```
    pub fn clear_node(&mut self, id: NodeId) -> bool {
        match self.arena.clear_subtree(id) {
            Some((values, released)) => {
                self.size -= values;
                debug!(target: LOG_TARGET, values, released, "Cleared trie node");
                true
            }
            None => false,
        }
    }

    /// Takes the value of `id` and drops its subtree. `None` if the node
    /// holds no value, in which case nothing changes.
    pub(crate) fn remove_at(&mut self, id: NodeId) -> Option<V> {
        let value = self.arena.get_mut(id)?.take_value()?;
        self.size -= 1;
        self.clear_node(id);
        Some(value)
    }

    /// Removes the value stored for `key` together with every value below it.
    ///
    /// The node for `key` stays in place, so the key remains a valid prefix.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::KeyNotFound`] if the key holds no value, or
    /// [`TrieError::InvalidArgument`] if the key has an empty segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::{TrieMap, TrieError};
    /// let mut map = TrieMap::new();
    /// map.add("a", 1).unwrap();
    /// map.add("a|b", 2).unwrap();
    ///
    /// assert_eq!(map.remove("a"), Ok(1));
    /// assert!(!map.has_key("a|b"));
    /// assert!(map.has_key_prefix("a"));
    /// assert_eq!(map.remove("a"), Err(TrieError::KeyNotFound("a".to_string())));
    /// ```
    pub fn remove<K: AsPath>(&mut self, key: K) -> Result<V> {
        validate(&key)?;
        self.descend(&key)
            .and_then(|node_id| self.remove_at(node_id))
            .ok_or_else(|| TrieError::KeyNotFound(key.to_key()))
    }

    /// Overwrites the value for `key` if it already holds one.
    ///
    /// Returns `false`, without touching the map, when the key has no value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a", 1).unwrap();
    ///
    /// assert!(map.update("a", 2));
    /// assert_eq!(map.get("a"), Some(&2));
    ///
    /// assert!(!map.update("b", 3));
    /// assert!(!map.has_key("b"));
    /// ```
    pub fn update<K: AsPath>(&mut self, key: K, value: V) -> bool {
        match self.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Applies `f` to the value for `key` if it holds one.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("Root|Mails", 1).unwrap();
    ///
    /// assert!(map.update_with("Root|Mails", |count| *count += 4));
    /// assert_eq!(map.get("Root|Mails"), Some(&5));
    /// assert!(!map.update_with("Root", |count| *count += 4));
    /// ```
    pub fn update_with<K: AsPath, F>(&mut self, key: K, f: F) -> bool
    where
        F: FnOnce(&mut V),
    {
        match self.get_mut(key) {
            Some(value) => {
                f(value);
                true
            }
            None => false,
        }
    }

    /// Detaches the node for `prefix` and its whole subtree from the map.
    ///
    /// The empty prefix clears the map. Returns whether a node was found.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("X", 1).unwrap();
    /// map.add("X|Y", 2).unwrap();
    ///
    /// assert!(map.remove_key_prefix("X"));
    /// assert!(!map.has_key_prefix("X"));
    /// assert!(!map.has_key("X|Y"));
    /// assert!(!map.remove_key_prefix("X"));
    /// ```
    pub fn remove_key_prefix<K: AsPath>(&mut self, prefix: K) -> bool {
        let mut parent = None;
        let mut current = self.arena.root();

        for segment in prefix.segments() {
            match self.child_of(current, segment) {
                Some(child) => {
                    parent = Some((current, segment));
                    current = child;
                }
                None => return false,
            }
        }

        let Some((parent, segment)) = parent else {
            self.clear();
            return true;
        };

        match self.arena.remove_child(parent, segment) {
            Some((values, released)) => {
                self.size -= values;
                debug!(target: LOG_TARGET, prefix = %prefix.to_key(), values, released, "Removed key prefix");
                true
            }
            None => false,
        }
    }

    /// Removes every value and every node but the root.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a", 1).unwrap();
    /// map.add("b|c", 2).unwrap();
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.node_count(), 1);
    /// ```
    pub fn clear(&mut self) {
        let root = self.arena.root();
        self.clear_node(root);
    }

    /// Removes nodes that hold no value and lead to no value.
    ///
    /// Returns the number of nodes released. The root is never released.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a|b|c", 1).unwrap();
    /// map.add("a|d", 2).unwrap();
    ///
    /// let c = map.get_trie_node("a|b|c").unwrap();
    /// map.take_value_at(c).unwrap();
    ///
    /// assert_eq!(map.prune(), 2);
    /// assert!(!map.has_key_prefix("a|b"));
    /// assert!(map.has_key("a|d"));
    /// ```
    pub fn prune(&mut self) -> usize {
        // Post-order: a node is dropped once its children are finished and it
        // is left without a value or children.
        let mut stack: Vec<(NodeId, Option<(NodeId, Box<str>)>, bool)> =
            vec![(self.arena.root(), None, false)];
        let mut pruned = 0;

        while let Some((id, parent, children_done)) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };

            if !children_done {
                let children: Vec<(Box<str>, NodeId)> = node
                    .children
                    .iter()
                    .map(|(segment, &child)| (segment.clone(), child))
                    .collect();
                stack.push((id, parent, true));
                stack.extend(
                    children
                        .into_iter()
                        .map(|(segment, child)| (child, Some((id, segment)), false)),
                );
                continue;
            }

            if node.has_value() || !node.is_leaf() {
                continue;
            }
            if let Some((parent, segment)) = parent {
                if let Some((_, released)) = self.arena.remove_child(parent, &segment) {
                    pruned += released;
                }
            }
        }

        if pruned > 0 {
            debug!(target: LOG_TARGET, pruned, "Pruned empty trie nodes");
        }
        pruned
    }

    /// Returns an entry for in-place manipulation of the value at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidArgument`] if the key has an empty segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    ///
    /// *map.entry("Root|Mails").unwrap().or_insert(0) += 1;
    /// *map.entry("Root|Mails").unwrap().or_insert(0) += 1;
    ///
    /// assert_eq!(map.get("Root|Mails"), Some(&2));
    /// ```
    pub fn entry<K: AsPath>(&mut self, key: K) -> Result<Entry<'_, V>> {
        validate(&key)?;
        let key_string = key.to_key();

        match self.descend(&key) {
            Some(node) if self.value_at(node).is_some() => Ok(Entry::Occupied(OccupiedEntry {
                map: self,
                key: key_string,
                node,
            })),
            _ => Ok(Entry::Vacant(VacantEntry {
                map: self,
                key: key_string,
            })),
        }
    }

    /// Returns a lazy pre-order iterator over the key-value pairs at and below
    /// `prefix`.
    ///
    /// Keys are rebuilt from the prefix and the segments below it. If the
    /// prefix has no node the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("a", 1).unwrap();
    /// map.add("a|b", 2).unwrap();
    /// map.add("c", 3).unwrap();
    ///
    /// let pairs: Vec<_> = map.key_value_pairs_by("a").collect();
    /// assert_eq!(pairs, [("a".to_string(), &1), ("a|b".to_string(), &2)]);
    /// ```
    pub fn key_value_pairs_by<K: AsPath>(&self, prefix: K) -> Iter<'_, V> {
        match self.descend(&prefix) {
            Some(node_id) => Iter::new(&self.arena, Some((node_id, prefix.to_key()))),
            None => Iter::empty(&self.arena),
        }
    }

    /// Returns a lazy iterator over the keys at and below `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("Root|Mails|Secrete", 1).unwrap();
    /// map.add("Root|Shop", 2).unwrap();
    ///
    /// let keys: Vec<_> = map.keys_by("Root|Mails").collect();
    /// assert_eq!(keys, ["Root|Mails|Secrete"]);
    /// ```
    pub fn keys_by<K: AsPath>(&self, prefix: K) -> Keys<'_, V> {
        Keys {
            inner: self.key_value_pairs_by(prefix),
        }
    }

    /// Returns a lazy iterator over the values at and below `prefix`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("Root|Mails|Secrete", 1).unwrap();
    /// map.add("Root|Mails|System|0", 10).unwrap();
    ///
    /// let total: i32 = map.values_by("Root|Mails").sum();
    /// assert_eq!(total, 11);
    /// ```
    pub fn values_by<K: AsPath>(&self, prefix: K) -> Values<'_, V> {
        Values {
            inner: self.key_value_pairs_by(prefix),
        }
    }

    /// Returns a lazy pre-order iterator over every key-value pair.
    pub fn key_value_pairs(&self) -> Iter<'_, V> {
        self.key_value_pairs_by("")
    }

    pub fn keys(&self) -> Keys<'_, V> {
        self.keys_by("")
    }

    pub fn values(&self) -> Values<'_, V> {
        self.values_by("")
    }

    /// Returns every key-value pair whose key has the greatest length, in
    /// characters, among all keys holding a value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("A", 0).unwrap();
    /// map.add("A|B", 1).unwrap();
    /// map.add("A|C", 2).unwrap();
    ///
    /// let longest = map.get_longest_key_value_pairs();
    /// assert_eq!(longest, [("A|B".to_string(), &1), ("A|C".to_string(), &2)]);
    /// ```
    pub fn get_longest_key_value_pairs(&self) -> Vec<(String, &V)> {
        self.extreme_key_value_pairs(usize::max)
    }

    /// Returns every key-value pair whose key has the smallest length, in
    /// characters, among all keys holding a value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    /// map.add("A|B", 1).unwrap();
    /// map.add("C", 2).unwrap();
    /// map.add("D", 3).unwrap();
    ///
    /// let shortest = map.get_shortest_key_value_pairs();
    /// assert_eq!(shortest, [("C".to_string(), &2), ("D".to_string(), &3)]);
    /// ```
    pub fn get_shortest_key_value_pairs(&self) -> Vec<(String, &V)> {
        self.extreme_key_value_pairs(usize::min)
    }

    /// Finds the extreme key length first, then collects every pair of
    /// exactly that length, so ties are never lost to traversal order.
    fn extreme_key_value_pairs(&self, pick: fn(usize, usize) -> usize) -> Vec<(String, &V)> {
        let Some(target) = self.key_lengths().reduce(pick) else {
            return Vec::new();
        };

        self.key_value_pairs()
            .filter(|(key, _)| key.chars().count() == target)
            .collect()
    }

    /// Character lengths of all keys holding a value, without building them.
    fn key_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        let mut stack = vec![(self.arena.root(), 0usize)];

        std::iter::from_fn(move || {
            while let Some((node_id, len)) = stack.pop() {
                let Some(node) = self.arena.get(node_id) else {
                    continue;
                };

                let separator = usize::from(len > 0);
                for (segment, &child) in node.children.iter() {
                    stack.push((child, len + separator + segment.chars().count()));
                }

                if node.has_value() {
                    return Some(len);
                }
            }
            None
        })
    }
}
