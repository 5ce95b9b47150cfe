//! json-partial - Partial JSON object decoding with verbatim preservation of
//! unrecognized fields.
//!
//! A type opts in by implementing [`JsonObject`]: its decode routine pulls
//! known fields out of a [`RawProperties`] set, and whatever is left ends up
//! in an [`Unknowns`] bag that is re-emitted byte-for-byte on encode. This
//! keeps payloads intact when a schema gains fields the reader does not know
//! about yet.
//!
//! The JSON codec itself is `serde_json`; this crate only decides which
//! slices of a document go through it and in what order.

pub mod error;
pub mod object;
pub mod ordered;
pub mod raw_properties;
pub mod serde_object;
pub mod unknowns;

use serde_json::Value;

pub use error::{Error, Result};
pub use object::{decode_object, encode_object, JsonObject};
pub use ordered::{OrderedKey, OrderedMap};
pub use raw_properties::RawProperties;
pub use unknowns::{RestorePolicy, Unknowns};

pub fn from_slice<T>(data: &[u8]) -> Result<T>
where
    T: JsonObject,
{
    decode_object(RawProperties::from_slice(data)?)
}

pub fn from_str<T>(data: &str) -> Result<T>
where
    T: JsonObject,
{
    decode_object(RawProperties::from_str(data)?)
}

pub fn from_value<T>(value: &Value) -> Result<T>
where
    T: JsonObject,
{
    decode_object(RawProperties::from_value(value)?)
}

pub fn to_vec<T>(object: &T) -> Result<Vec<u8>>
where
    T: JsonObject,
{
    encode_object(object)?.to_vec()
}

pub fn to_string<T>(object: &T) -> Result<String>
where
    T: JsonObject,
{
    encode_object(object)?.to_string()
}

pub fn to_value<T>(object: &T) -> Result<Value>
where
    T: JsonObject,
{
    encode_object(object)?.to_value()
}
