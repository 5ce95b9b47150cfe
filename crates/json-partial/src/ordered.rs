//! Order-preserving view of a JSON object's top-level fields.
//!
//! [`RawProperties`] makes no promise about field order. When a payload has
//! to come back out with its keys in the original sequence, parse it into an
//! [`OrderedMap`] instead.

use std::borrow::Borrow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{Error, Result};
use crate::raw_properties::RawProperties;

/// Object key with a text codec; any string is a valid key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedKey(String);

impl OrderedKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderedKey {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_owned()))
    }
}

impl From<&str> for OrderedKey {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

impl From<String> for OrderedKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl AsRef<str> for OrderedKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OrderedKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Top-level fields in source order, each kept as its raw blob.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderedMap(IndexMap<OrderedKey, Box<RawValue>>);

impl OrderedMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slice(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|err| Error::decode(None, err))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(data: &str) -> Result<Self> {
        Self::from_slice(data.as_bytes())
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.0).map_err(|err| Error::encode(None, err))
    }

    pub fn to_string(&self) -> Result<String> {
        serde_json::to_string(&self.0).map_err(|err| Error::encode(None, err))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key).map(Box::as_ref)
    }

    pub fn get_as<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.0
            .get(key)
            .map(|raw| serde_json::from_str(raw.get()).map_err(|err| Error::decode(Some(key), err)))
            .transpose()
    }

    /// Replacing an existing key keeps its position; new keys go last.
    pub fn insert<T>(&mut self, key: impl Into<OrderedKey>, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let key = key.into();
        let raw = serde_json::value::to_raw_value(value)
            .map_err(|err| Error::encode(Some(key.as_str()), err))?;
        self.0.insert(key, raw);
        Ok(())
    }

    pub fn insert_raw(&mut self, key: impl Into<OrderedKey>, raw: Box<RawValue>) {
        self.0.insert(key.into(), raw);
    }

    pub fn remove(&mut self, key: &str) -> Option<Box<RawValue>> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &OrderedKey> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OrderedKey, &RawValue)> {
        self.0.iter().map(|(key, raw)| (key, raw.as_ref()))
    }

    pub fn into_raw_properties(self) -> RawProperties {
        RawProperties::from_fields(
            self.0
                .into_iter()
                .map(|(key, raw)| (key.into_string(), raw))
                .collect(),
        )
    }
}

impl From<RawProperties> for OrderedMap {
    fn from(props: RawProperties) -> Self {
        Self(
            props
                .into_fields()
                .into_iter()
                .map(|(key, raw)| (OrderedKey::from(key), raw))
                .collect(),
        )
    }
}
