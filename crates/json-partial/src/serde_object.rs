//! `#[serde(with = "json_partial::serde_object")]` adapter for nesting a
//! [`JsonObject`] inside derived types.
//!
//! Raw blobs only round-trip through `serde_json`, so the surrounding
//! format must be JSON.
//!
//! ```
//! use json_partial::{JsonObject, RawProperties, Result};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Default)]
//! struct Body {
//!     text: String,
//! }
//!
//! impl JsonObject for Body {
//!     fn decode_fields(&mut self, props: &mut RawProperties) -> Result<()> {
//!         props.extract("text", &mut self.text)
//!     }
//!
//!     fn encode_fields(&self, props: &mut RawProperties) -> Result<()> {
//!         props.insert("text", &self.text)
//!     }
//! }
//!
//! #[derive(Serialize, Deserialize)]
//! struct Envelope {
//!     id: u32,
//!     #[serde(with = "json_partial::serde_object")]
//!     body: Body,
//! }
//!
//! let env: Envelope = serde_json::from_str(r#"{"id":1,"body":{"text":"hi"}}"#).unwrap();
//! assert_eq!(env.body.text, "hi");
//! assert_eq!(serde_json::to_string(&env).unwrap(), r#"{"id":1,"body":{"text":"hi"}}"#);
//! ```

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::object::{decode_object, encode_object, JsonObject};
use crate::raw_properties::RawProperties;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: JsonObject,
    S: Serializer,
{
    encode_object(value)
        .map_err(<S::Error as ser::Error>::custom)?
        .serialize(serializer)
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: JsonObject,
    D: Deserializer<'de>,
{
    let props = RawProperties::deserialize(deserializer)?;
    decode_object(props).map_err(<D::Error as de::Error>::custom)
}

/// Same adapter for `Option<T>` fields; `null` maps to `None`.
pub mod option {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: JsonObject,
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: JsonObject,
        D: Deserializer<'de>,
    {
        Option::<RawProperties>::deserialize(deserializer)?
            .map(decode_object)
            .transpose()
            .map_err(<D::Error as de::Error>::custom)
    }
}
