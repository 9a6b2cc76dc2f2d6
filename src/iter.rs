use crate::SEPARATOR;
use crate::arena::NodeArena;
use crate::node::NodeId;

/// A lazy pre-order iterator over the key-value pairs of a subtree.
///
/// This struct is created by the [`key_value_pairs`] and
/// [`key_value_pairs_by`] methods on [`TrieMap`]. A node is yielded before
/// its children, children in insertion order. Every stack entry carries the
/// full key of its node, so sibling subtrees never share a path buffer.
///
/// [`key_value_pairs`]: crate::TrieMap::key_value_pairs
/// [`key_value_pairs_by`]: crate::TrieMap::key_value_pairs_by
/// [`TrieMap`]: crate::TrieMap
pub struct Iter<'a, V> {
    pub(crate) arena: &'a NodeArena<V>,
    pub(crate) stack: Vec<(NodeId, String)>, // Node handle and complete key to node
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(arena: &'a NodeArena<V>, start: Option<(NodeId, String)>) -> Self {
        Iter {
            arena,
            stack: start.into_iter().collect(),
        }
    }

    pub(crate) fn empty(arena: &'a NodeArena<V>) -> Self {
        Self::new(arena, None)
    }
}

pub(crate) fn child_key(parent: &str, segment: &str) -> String {
    let mut key = String::with_capacity(parent.len() + segment.len() + 1);
    key.push_str(parent);
    if !key.is_empty() {
        key.push(SEPARATOR);
    }
    key.push_str(segment);
    key
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (String, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node_id, path)) = self.stack.pop() {
            let Some(node) = self.arena.get(node_id) else {
                continue;
            };

            for (segment, &child_id) in node.children.iter().rev() {
                self.stack.push((child_id, child_key(&path, segment)));
            }

            if let Some(value) = node.value() {
                return Some((path, value));
            }
        }

        None
    }
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            arena: self.arena,
            stack: self.stack.clone(),
        }
    }
}

/// An iterator over the keys of a subtree.
///
/// This struct is created by the [`keys`] and [`keys_by`] methods on
/// [`TrieMap`].
///
/// [`keys`]: crate::TrieMap::keys
/// [`keys_by`]: crate::TrieMap::keys_by
/// [`TrieMap`]: crate::TrieMap
pub struct Keys<'a, V> {
    pub(crate) inner: Iter<'a, V>,
}

impl<V> Clone for Keys<'_, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<V> Iterator for Keys<'_, V> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }
}

/// An iterator over the values of a subtree.
///
/// This struct is created by the [`values`] and [`values_by`] methods on
/// [`TrieMap`].
///
/// [`values`]: crate::TrieMap::values
/// [`values_by`]: crate::TrieMap::values_by
/// [`TrieMap`]: crate::TrieMap
pub struct Values<'a, V> {
    pub(crate) inner: Iter<'a, V>,
}

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }
}
