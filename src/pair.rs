//! [`Pair`] — a single key/value entry.

/// A key/value pair held by an [`OrderedObject`](crate::OrderedObject).
///
/// The key is fixed once the pair is created; the value may be
/// overwritten in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Pair<V> {
    /// The pair's key.
    pub key: String,
    /// The pair's value.
    pub value: V,
}

impl<V> Pair<V> {
    pub fn new(key: impl Into<String>, value: V) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
