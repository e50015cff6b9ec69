//! JSON object container that preserves key insertion order.
//!
//! Ordinary associative maps do not guarantee key order. [`OrderedObject`]
//! stores its entries as a flat sequence, so serialized output round-trips
//! keys in exactly first-insertion order. The type is a write-mostly,
//! append-oriented builder: construct, `set` repeatedly (values may be
//! nested objects or collections of them), then serialize once.

mod encode;
mod error;
mod object;
mod pair;

pub use error::EncodeError;
pub use object::OrderedObject;
pub use pair::Pair;
