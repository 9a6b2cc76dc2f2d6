use crate::TrieMap;
use crate::node::NodeId;

const OCCUPIED: &str = "occupied entry always points at a live node holding a value";
const VALIDATED: &str = "vacant entry keys are validated when the entry is created";

/// Represents an entry in a `TrieMap` which may either be vacant or occupied.
///
/// This is part of the `Entry API` and is used to ensure that only a single lookup is performed.
///
/// # Examples
///
/// ```
/// use pathtrie::{TrieMap, Entry};
///
/// let mut map = TrieMap::new();
///
/// match map.entry("Root|Mails").unwrap() {
///     Entry::Vacant(entry) => {
///         entry.insert(1);
///     }
///     Entry::Occupied(entry) => {
///         *entry.into_mut() += 1;
///     }
/// }
/// assert_eq!(map.get("Root|Mails"), Some(&1));
/// ```
pub enum Entry<'a, V> {
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),
}

/// A view into an occupied entry in a `TrieMap`.
///
/// It is part of the [`Entry`] API.
pub struct OccupiedEntry<'a, V> {
    pub(crate) map: &'a mut TrieMap<V>,
    pub(crate) key: String,
    pub(crate) node: NodeId,
}

/// A view into a vacant entry in a `TrieMap`.
///
/// It is part of the [`Entry`] API.
pub struct VacantEntry<'a, V> {
    pub(crate) map: &'a mut TrieMap<V>,
    pub(crate) key: String,
}

impl<'a, V> Entry<'a, V> {
    /// Returns a reference to the value in the entry, if any.
    pub fn get(&self) -> Option<&V> {
        match self {
            Entry::Occupied(entry) => Some(entry.get()),
            Entry::Vacant(_) => None,
        }
    }

    /// Ensures a value is in the entry by inserting the default if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map: TrieMap<u32> = TrieMap::new();
    ///
    /// map.entry("a|b").unwrap().or_default();
    /// assert_eq!(map.get("a|b"), Some(&0));
    /// assert!(!map.has_key("a"));
    /// ```
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(V::default)
    }

    /// Ensures a value is in the entry by inserting the given value if empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    ///
    /// map.entry("a").unwrap().or_insert(1);
    /// assert_eq!(map.get("a"), Some(&1));
    ///
    /// *map.entry("a").unwrap().or_insert(10) *= 2;
    /// assert_eq!(map.get("a"), Some(&2));
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the function if empty.
    pub fn or_insert_with<F: FnOnce() -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Ensures a value is in the entry by inserting the result of the function if empty.
    ///
    /// The function is given the `|`-joined key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    ///
    /// map.entry(["Root", "Shop"]).unwrap().or_insert_with_key(|key| key.len());
    /// assert_eq!(map.get("Root|Shop"), Some(&9));
    /// ```
    pub fn or_insert_with_key<F: FnOnce(&str) -> V>(self, default: F) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let value = default(entry.key());
                entry.insert(value)
            }
        }
    }

    /// Returns the `|`-joined key of the entry.
    pub fn key(&self) -> &str {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }

    /// Provides in-place mutable access to an occupied entry.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::TrieMap;
    /// let mut map = TrieMap::new();
    ///
    /// map.entry("a").unwrap().and_modify(|v| *v += 1).or_insert(1);
    /// assert_eq!(map.get("a"), Some(&1));
    ///
    /// map.entry("a").unwrap().and_modify(|v| *v += 1).or_insert(0);
    /// assert_eq!(map.get("a"), Some(&2));
    /// ```
    pub fn and_modify<F: FnOnce(&mut V)>(self, f: F) -> Self {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }
}

impl<'a, V> OccupiedEntry<'a, V> {
    pub fn get(&self) -> &V {
        self.map.value_at(self.node).expect(OCCUPIED)
    }

    pub fn get_mut(&mut self) -> &mut V {
        self.map.value_at_mut(self.node).expect(OCCUPIED)
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        self.map.value_at_mut(self.node).expect(OCCUPIED)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The handle of the node holding the value.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Removes the value, and everything below it, returning the value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::{TrieMap, Entry};
    /// let mut map = TrieMap::new();
    /// map.add("a", 1).unwrap();
    /// map.add("a|b", 2).unwrap();
    ///
    /// if let Entry::Occupied(entry) = map.entry("a").unwrap() {
    ///     assert_eq!(entry.remove(), 1);
    /// }
    ///
    /// assert!(map.is_empty());
    /// ```
    pub fn remove(self) -> V {
        self.map.remove_at(self.node).expect(OCCUPIED)
    }

    /// Replaces the value in the entry with the given value, returning the old value.
    pub fn insert(&mut self, value: V) -> V {
        std::mem::replace(self.get_mut(), value)
    }
}

impl<'a, V> VacantEntry<'a, V> {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Inserts the given value, creating the path to it, and returns a
    /// mutable reference to it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use pathtrie::{TrieMap, Entry};
    /// let mut map = TrieMap::new();
    ///
    /// if let Entry::Vacant(entry) = map.entry("a|b").unwrap() {
    ///     entry.insert(1);
    /// }
    ///
    /// assert_eq!(map.get("a|b"), Some(&1));
    /// assert!(map.has_key_prefix("a"));
    /// ```
    pub fn insert(self, value: V) -> &'a mut V {
        let node = self.map.create_path(self.key.as_str()).expect(VALIDATED);
        self.map.set_value_at(node, value).expect(VALIDATED);
        self.map.value_at_mut(node).expect(VALIDATED)
    }
}
