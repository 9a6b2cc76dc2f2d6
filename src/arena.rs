use crate::node::{NodeId, TrieNode};
use crate::ROOT_SEGMENT;

#[derive(Clone, Debug)]
struct Slot<V> {
    generation: u32,
    node: Option<TrieNode<V>>,
}

/// Owns every node of a trie. Slots released by subtree removal go on a free
/// list and get their generation bumped before they are handed out again.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena<V> {
    slots: Vec<Slot<V>>,
    free_indices: Vec<usize>,
}

impl<V> NodeArena<V> {
    /// Creates an arena holding only the root node
    pub(crate) fn new() -> Self {
        Self::with_capacity(1)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity.max(1));
        slots.push(Slot {
            generation: 0,
            node: Some(TrieNode::new(ROOT_SEGMENT)),
        });
        NodeArena {
            slots,
            free_indices: Vec::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn root(&self) -> NodeId {
        NodeId::new(0, self.slots[0].generation)
    }

    /// Gets the node behind a handle, or `None` if the handle is stale
    #[inline(always)]
    pub(crate) fn get(&self, id: NodeId) -> Option<&TrieNode<V>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    #[inline(always)]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut TrieNode<V>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Number of live nodes, root included
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free_indices.len()
    }

    fn allocate(&mut self, segment: &str) -> NodeId {
        if let Some(index) = self.free_indices.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(TrieNode::new(segment));
            return NodeId::new(index, slot.generation);
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            node: Some(TrieNode::new(segment)),
        });
        NodeId::new(index, 0)
    }

    fn release(&mut self, id: NodeId) -> Option<TrieNode<V>> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_indices.push(id.index);
        Some(node)
    }

    /// Gets the child of `parent` for `segment`, creating it when missing.
    /// Returns `None` only if `parent` is stale.
    pub(crate) fn add_child(&mut self, parent: NodeId, segment: &str) -> Option<NodeId> {
        if let Some(child) = self.get(parent)?.get_child(segment) {
            return Some(child);
        }

        let child = self.allocate(segment);
        match self.get_mut(parent) {
            Some(node) => {
                node.set_child(segment, child);
                Some(child)
            }
            None => {
                self.release(child);
                None
            }
        }
    }

    /// Drops the value and every descendant of `id`, keeping `id` itself alive.
    ///
    /// Returns the number of values dropped and the number of nodes released,
    /// or `None` if the handle is stale.
    pub(crate) fn clear_subtree(&mut self, id: NodeId) -> Option<(usize, usize)> {
        let node = self.get_mut(id)?;
        let mut values = usize::from(node.take_value().is_some());
        let mut stack: Vec<NodeId> = std::mem::take(&mut node.children).into_values().collect();
        let mut released = 0;

        while let Some(child_id) = stack.pop() {
            if let Some(child) = self.release(child_id) {
                released += 1;
                values += usize::from(child.value.is_some());
                stack.extend(child.children.into_values());
            }
        }

        Some((values, released))
    }

    /// Removes the child of `parent` for `segment` along with its subtree.
    /// Returns the number of values dropped and the number of nodes released.
    pub(crate) fn remove_child(&mut self, parent: NodeId, segment: &str) -> Option<(usize, usize)> {
        let child = self.get_mut(parent)?.children.shift_remove(segment)?;
        let (values, released) = self.clear_subtree(child)?;
        self.release(child);
        Some((values, released + 1))
    }
}
