use super::*;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

fn path() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-c]{1,2}", 1..5).prop_map(|segments| segments.join("|"))
}

fn key_value_pairs(min_pairs: usize, max_pairs: usize) -> impl Strategy<Value = Vec<(String, i32)>> {
    proptest::collection::vec((path(), proptest::num::i32::ANY), min_pairs..max_pairs)
}

#[derive(Debug, Clone)]
enum Operation {
    Add(String, i32),
    Remove(String),
    Update(String, i32),
    RemoveKeyPrefix(String),
}

fn operations(max_ops: usize) -> impl Strategy<Value = Vec<Operation>> {
    let op = prop_oneof![
        4 => (path(), any::<i32>()).prop_map(|(k, v)| Operation::Add(k, v)),
        2 => path().prop_map(Operation::Remove),
        1 => (path(), any::<i32>()).prop_map(|(k, v)| Operation::Update(k, v)),
        1 => path().prop_map(Operation::RemoveKeyPrefix),
    ];
    proptest::collection::vec(op, 1..max_ops)
}

fn is_at_or_below(key: &str, prefix: &str) -> bool {
    key == prefix
        || (key.starts_with(prefix) && key[prefix.len()..].starts_with(SEPARATOR))
}

fn prefixes_of(key: &str) -> impl Iterator<Item = String> + '_ {
    key.match_indices(SEPARATOR)
        .map(|(i, _)| key[..i].to_string())
        .chain(std::iter::once(key.to_string()))
}

/// Reference behaviour: present values plus the set of existing nodes.
#[derive(Default)]
struct Model {
    values: BTreeMap<String, i32>,
    nodes: BTreeSet<String>,
}

impl Model {
    fn add(&mut self, key: &str, value: i32) {
        self.nodes.extend(prefixes_of(key));
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<i32> {
        let value = self.values.remove(key)?;
        self.values.retain(|k, _| !is_at_or_below(k, key));
        self.nodes.retain(|k| k == key || !is_at_or_below(k, key));
        Some(value)
    }

    fn update(&mut self, key: &str, value: i32) -> bool {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    fn remove_key_prefix(&mut self, prefix: &str) -> bool {
        if !self.nodes.contains(prefix) {
            return false;
        }
        self.values.retain(|k, _| !is_at_or_below(k, prefix));
        self.nodes.retain(|k| !is_at_or_below(k, prefix));
        true
    }
}

#[test]
fn test_generic_value_defaults() {
    use serde_json::{Value, json};

    let mut trie: TrieMap<Value> = TrieMap::new();
    trie.add("Root|Config", json!({ "badge": 3, "muted": false }))
        .unwrap();

    assert_eq!(trie.value_by("Root|Config").unwrap()["badge"], json!(3));
    assert_eq!(trie.value_by("Root|Missing").unwrap(), Value::Null);
    assert_eq!(trie.value_by("Root").unwrap(), Value::Null);

    trie.add("Root", Value::Null).unwrap();
    assert!(trie.has_key("Root"));
    assert_eq!(trie.value_by("Root").unwrap(), Value::Null);
}

proptest! {
    #[test]
    fn added_keys_are_readable(pairs in key_value_pairs(1, 60)) {
        let mut trie = TrieMap::new();
        let mut reference_map = BTreeMap::new();

        for (key, value) in &pairs {
            trie.add(key, *value).unwrap();
            prop_assert_eq!(trie.value_by(key).unwrap(), *value);
            prop_assert!(trie.has_key(key));
            reference_map.insert(key.clone(), *value);
        }

        prop_assert_eq!(trie.len(), reference_map.len());
        for (key, value) in &reference_map {
            prop_assert_eq!(trie.get(key), Some(value));
        }
    }

    #[test]
    fn operations_match_model(ops in operations(80)) {
        let mut trie = TrieMap::new();
        let mut model = Model::default();

        for op in &ops {
            match op {
                Operation::Add(key, value) => {
                    trie.add(key, *value).unwrap();
                    model.add(key, *value);
                }
                Operation::Remove(key) => {
                    let expected = model.remove(key);
                    prop_assert_eq!(trie.remove(key).ok(), expected);
                    prop_assert!(!trie.has_key(key));
                }
                Operation::Update(key, value) => {
                    prop_assert_eq!(trie.update(key, *value), model.update(key, *value));
                }
                Operation::RemoveKeyPrefix(prefix) => {
                    prop_assert_eq!(trie.remove_key_prefix(prefix), model.remove_key_prefix(prefix));
                    prop_assert!(!trie.has_key_prefix(prefix));
                }
            }
        }

        prop_assert_eq!(trie.len(), model.values.len());
        // Model nodes exclude the root.
        prop_assert_eq!(trie.node_count(), model.nodes.len() + 1);

        let trie_pairs: BTreeMap<String, i32> = trie
            .key_value_pairs()
            .map(|(k, &v)| (k, v))
            .collect();
        prop_assert_eq!(&trie_pairs, &model.values);

        for node in &model.nodes {
            prop_assert!(trie.has_key_prefix(node));
        }
    }

    #[test]
    fn keys_by_returns_exactly_the_subtree(
        pairs in key_value_pairs(1, 60),
        prefix in path()
    ) {
        let trie: TrieMap<i32> = pairs.iter().cloned().collect();

        let keys: BTreeSet<String> = trie.keys_by(&prefix).collect();
        let expected: BTreeSet<String> = trie
            .keys()
            .filter(|k| is_at_or_below(k, &prefix))
            .collect();

        prop_assert_eq!(&keys, &expected);
        for key in &keys {
            prop_assert!(trie.has_key(key));
        }
        if !keys.is_empty() {
            prop_assert!(trie.has_key_prefix(&prefix));
        }
    }

    #[test]
    fn traversal_is_idempotent(pairs in key_value_pairs(0, 60), prefix in path()) {
        let trie: TrieMap<i32> = pairs.iter().cloned().collect();

        let first: Vec<_> = trie.key_value_pairs_by(&prefix).collect();
        let second: Vec<_> = trie.key_value_pairs_by(&prefix).collect();
        prop_assert_eq!(first, second);

        let first: Vec<_> = trie.keys().collect();
        let second: Vec<_> = trie.keys().collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn traversal_is_pre_order(pairs in key_value_pairs(1, 60)) {
        let trie: TrieMap<i32> = pairs.iter().cloned().collect();
        let keys: Vec<String> = trie.keys().collect();

        // A key's ancestors that hold values come before it.
        for (i, key) in keys.iter().enumerate() {
            for ancestor in prefixes_of(key).filter(|p| p != key) {
                if let Some(j) = keys.iter().position(|k| *k == ancestor) {
                    prop_assert!(j < i);
                }
            }
        }
    }

    #[test]
    fn extremes_collect_every_tie(pairs in key_value_pairs(0, 60)) {
        let trie: TrieMap<i32> = pairs.iter().cloned().collect();
        let reference_map: BTreeMap<String, i32> = pairs.iter().cloned().collect();

        let longest = trie.get_longest_key_value_pairs();
        let shortest = trie.get_shortest_key_value_pairs();

        prop_assert_eq!(longest.is_empty(), reference_map.is_empty());
        prop_assert_eq!(shortest.is_empty(), reference_map.is_empty());

        if let Some(max) = reference_map.keys().map(|k| k.chars().count()).max() {
            let expected: BTreeSet<&String> = reference_map
                .keys()
                .filter(|k| k.chars().count() == max)
                .collect();
            let got: BTreeSet<&String> = longest.iter().map(|(k, _)| k).collect();
            prop_assert_eq!(got, expected);
            for (key, value) in &longest {
                prop_assert_eq!(reference_map.get(key), Some(*value));
            }
        }

        if let Some(min) = reference_map.keys().map(|k| k.chars().count()).min() {
            let expected: BTreeSet<&String> = reference_map
                .keys()
                .filter(|k| k.chars().count() == min)
                .collect();
            let got: BTreeSet<&String> = shortest.iter().map(|(k, _)| k).collect();
            prop_assert_eq!(got, expected);
        }
    }

    #[test]
    fn remove_then_add_restores_presence(pairs in key_value_pairs(1, 40)) {
        let mut trie: TrieMap<i32> = pairs.iter().cloned().collect();

        for (key, value) in &pairs {
            let _ = trie.remove(key);
            prop_assert!(!trie.has_key(key));

            trie.add(key, *value).unwrap();
            prop_assert_eq!(trie.get(key), Some(value));
        }
    }

    #[test]
    fn prune_preserves_values(ops in operations(80)) {
        let mut trie = TrieMap::new();
        for op in &ops {
            match op {
                Operation::Add(key, value) => {
                    trie.add(key, *value).unwrap();
                }
                Operation::Remove(key) => {
                    let _ = trie.remove(key);
                }
                Operation::Update(key, value) => {
                    trie.update(key, *value);
                }
                Operation::RemoveKeyPrefix(prefix) => {
                    trie.remove_key_prefix(prefix);
                }
            }
        }
        let before: Vec<(String, i32)> = trie.key_value_pairs().map(|(k, &v)| (k, v)).collect();

        trie.prune();
        let after: Vec<(String, i32)> = trie.key_value_pairs().map(|(k, &v)| (k, v)).collect();

        prop_assert_eq!(before, after);
        prop_assert_eq!(trie.prune(), 0);

        // Every remaining node now leads to a value.
        let live_prefixes: BTreeSet<String> = trie
            .keys()
            .flat_map(|k| prefixes_of(&k).collect::<Vec<_>>())
            .collect();
        prop_assert_eq!(trie.node_count(), live_prefixes.len() + 1);
    }
}
