//! [`OrderedObject`] — a JSON object that respects insertion order.

use crate::pair::Pair;

/// A JSON object that preserves the order in which keys were first set.
///
/// Entries are stored as a flat sequence rather than a hash map, so the
/// storage order is the output order and serialization needs no extra
/// bookkeeping. `set`, `has` and `get` scan linearly; O(n) per call is a
/// deliberate trade-off for the small-to-moderate objects this type
/// targets, not a map built for large workloads.
///
/// Two invariants hold at all times:
///
/// 1. No two entries share a key; `set` on an existing key overwrites
///    its value in place.
/// 2. Entry order is exactly first-insertion order; overwriting a value
///    never moves its entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedObject<V>(pub(crate) Vec<Pair<V>>);

impl<V> OrderedObject<V> {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty object with storage pre-reserved for `capacity`
    /// entries. A performance hint only; the object grows as needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Sets `key` to `value`.
    ///
    /// If the key already exists its value is replaced in place and its
    /// position is unchanged; otherwise a new entry is appended.
    pub fn set(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        for pair in self.0.iter_mut() {
            if pair.key == key {
                pair.value = value;
                return;
            }
        }
        self.0.push(Pair::new(key, value));
    }

    /// Reports whether `key` is set.
    pub fn has(&self, key: &str) -> bool {
        self.0.iter().any(|pair| pair.key == key)
    }

    /// Returns the value of `key`, or `V::default()` if the key is not
    /// set.
    ///
    /// Absence is indistinguishable from "present with the default
    /// value"; call [`has`](Self::has) first when the distinction
    /// matters.
    pub fn get(&self, key: &str) -> V
    where
        V: Clone + Default,
    {
        for pair in &self.0 {
            if pair.key == key {
                return pair.value.clone();
            }
        }
        V::default()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Reports whether the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for OrderedObject<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<Vec<Pair<V>>> for OrderedObject<V> {
    /// Builds an object from an already-ordered entry list. Key
    /// uniqueness is the caller's responsibility on this path.
    fn from(entries: Vec<Pair<V>>) -> Self {
        Self(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_appends_in_first_insertion_order() {
        let mut obj = OrderedObject::new();
        obj.set("b", 2);
        obj.set("a", 1);
        obj.set("c", 3);
        let keys: Vec<&str> = obj.0.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut obj = OrderedObject::new();
        obj.set("a", 1);
        obj.set("b", 2);
        obj.set("a", 10);
        let keys: Vec<&str> = obj.0.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(obj.get("a"), 10);
        assert_eq!(obj.len(), 2);
    }

    #[test]
    fn has_reports_membership() {
        let mut obj = OrderedObject::new();
        assert!(!obj.has("a"));
        obj.set("a", 1);
        assert!(obj.has("a"));
        assert!(!obj.has("b"));
    }

    #[test]
    fn get_returns_default_when_absent() {
        let obj: OrderedObject<i64> = OrderedObject::new();
        assert_eq!(obj.get("missing"), 0);

        let obj: OrderedObject<String> = OrderedObject::new();
        assert_eq!(obj.get("missing"), "");
    }

    #[test]
    fn empty_key_is_a_valid_key() {
        let mut obj = OrderedObject::new();
        obj.set("", 1);
        assert!(obj.has(""));
        assert_eq!(obj.get(""), 1);
    }

    #[test]
    fn capacity_is_only_a_hint() {
        let mut obj = OrderedObject::with_capacity(1);
        obj.set("a", 1);
        obj.set("b", 2);
        obj.set("c", 3);
        assert_eq!(obj.len(), 3);
    }

    #[test]
    fn from_entry_list_preserves_order() {
        let obj = OrderedObject::from(vec![Pair::new("x", 1), Pair::new("y", 2)]);
        let keys: Vec<&str> = obj.0.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["x", "y"]);
        assert!(!obj.is_empty());
    }
}
