//! JSON serialization for [`OrderedObject`].

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::EncodeError;
use crate::object::OrderedObject;

/// The serde hook: any serde-based encoder that encounters an
/// [`OrderedObject`] — at the top level, nested as a value, or inside an
/// array — emits its entries in insertion order through this impl.
impl<V: Serialize> Serialize for OrderedObject<V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for pair in &self.0 {
            map.serialize_entry(&pair.key, &pair.value)?;
        }
        map.end()
    }
}

impl<V: Serialize> OrderedObject<V> {
    /// Encodes the object as a compact JSON object literal, respecting
    /// insertion order.
    ///
    /// The object-literal framing (braces, key quoting, commas) is
    /// written directly; each value is delegated to `serde_json`, which
    /// leaves HTML-sensitive characters (`<`, `>`, `&`) unescaped. Keys
    /// go through the same string encoding as string values. An empty
    /// object encodes to `{}`.
    ///
    /// The first value that fails to encode aborts the whole
    /// serialization; no partial output is returned.
    pub fn to_json(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::new();
        out.push(b'{');
        for (i, pair) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(b',');
            }
            serde_json::to_writer(&mut out, pair.key.as_str())?;
            out.push(b':');
            serde_json::to_writer(&mut out, &pair.value)?;
        }
        out.push(b'}');
        Ok(out)
    }

    /// [`to_json`](Self::to_json), as a `String`.
    pub fn to_json_string(&self) -> Result<String, EncodeError> {
        Ok(String::from_utf8(self.to_json()?)?)
    }
}
