use indexmap::IndexMap;

/// A handle to a node stored in a `TrieMap`.
///
/// Handles stay valid across unrelated insertions and removals. Once the node
/// they point at is released (by `remove`, `remove_key_prefix`, `clear` or
/// `prune`), the handle goes stale and every lookup through it fails instead of
/// reaching whatever node later reuses the slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        NodeId { index, generation }
    }
}

/// A single vertex of the trie: a path segment, an optional value and the
/// children keyed by their segment.
///
/// Children are kept in insertion order so that traversal order is
/// reproducible.
#[derive(Clone, Debug)]
pub struct TrieNode<V> {
    pub(crate) segment: Box<str>,
    pub(crate) value: Option<V>,
    pub(crate) children: IndexMap<Box<str>, NodeId>,
}

impl<V> TrieNode<V> {
    pub(crate) fn new(segment: &str) -> Self {
        TrieNode {
            segment: segment.into(),
            value: None,
            children: IndexMap::new(),
        }
    }

    /// The path token this node represents.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Returns `true` if a value was set on this node and not cleared since.
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Looks up the child for `segment`.
    pub fn get_child(&self, segment: &str) -> Option<NodeId> {
        self.children.get(segment).copied()
    }

    /// Handles of all children, in insertion order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    /// Segments of all children, in insertion order.
    pub fn child_segments(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.children.keys().map(|segment| &**segment)
    }

    pub fn child_len(&self) -> usize {
        self.children.len()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_value(&mut self, value: V) -> Option<V> {
        self.value.replace(value)
    }

    pub(crate) fn take_value(&mut self) -> Option<V> {
        self.value.take()
    }

    pub(crate) fn set_child(&mut self, segment: &str, child: NodeId) -> Option<NodeId> {
        self.children.insert(segment.into(), child)
    }
}
