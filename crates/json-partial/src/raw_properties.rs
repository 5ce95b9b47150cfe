//! Per-call staging map from field name to still-encoded JSON value.
//!
//! A decode routine parses the payload into a [`RawProperties`], pulls every
//! known field out with [`RawProperties::extract`] (each extraction consumes
//! the entry), then hands whatever is left to
//! [`RawProperties::capture_unknowns`]. Encoding mirrors this with
//! [`RawProperties::insert`] followed by [`RawProperties::restore_unknowns`].

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::unknowns::{RestorePolicy, Unknowns};

pub(crate) type RawFields = IndexMap<String, Box<RawValue>>;

/// Field name to raw JSON blob. Keys are unique; iteration follows insertion
/// order but no operation depends on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProperties {
    fields: RawFields,
}

impl RawProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a JSON object document into its top-level fields.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let fields = serde_json::from_slice(data).map_err(|err| Error::decode(None, err))?;
        Ok(Self { fields })
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(data: &str) -> Result<Self> {
        Self::from_slice(data.as_bytes())
    }

    /// `RawValue` only borrows from text input, so the value is rendered
    /// first and split afterwards.
    pub fn from_value(value: &Value) -> Result<Self> {
        let data = serde_json::to_vec(value).map_err(|err| Error::encode(None, err))?;
        Self::from_slice(&data)
    }

    pub(crate) fn from_fields(fields: RawFields) -> Self {
        Self { fields }
    }

    pub(crate) fn into_fields(self) -> RawFields {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get_raw(&self, key: &str) -> Option<&RawValue> {
        self.fields.get(key).map(Box::as_ref)
    }

    pub fn remove_raw(&mut self, key: &str) -> Option<Box<RawValue>> {
        self.fields.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.fields
            .iter()
            .map(|(key, raw)| (key.as_str(), raw.as_ref()))
    }

    /// Decodes and consumes `key`.
    ///
    /// Returns `Ok(None)` when the key is absent. A decode failure leaves the
    /// entry in place.
    pub fn take<T>(&mut self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let Some(raw) = self.fields.get(key) else {
            trace!(key, "field absent");
            return Ok(None);
        };
        let value = serde_json::from_str(raw.get()).map_err(|err| Error::decode(Some(key), err))?;
        self.fields.shift_remove(key);
        trace!(key, "field extracted");
        Ok(Some(value))
    }

    /// Decodes `key` into `target` and removes it from the set.
    ///
    /// An absent key is not an error: `target` keeps whatever it held.
    pub fn extract<T>(&mut self, key: &str, target: &mut T) -> Result<()>
    where
        T: DeserializeOwned,
    {
        if let Some(value) = self.take(key)? {
            *target = value;
        }
        Ok(())
    }

    /// Like [`RawProperties::extract`], for call sites where the destination
    /// is only known at run time. A missing destination is rejected before
    /// the set is touched.
    pub fn extract_into<T>(&mut self, key: &str, target: Option<&mut T>) -> Result<()>
    where
        T: DeserializeOwned,
    {
        let Some(target) = target else {
            return Err(Error::InvalidTarget {
                key: key.to_owned(),
            });
        };
        self.extract(key, target)
    }

    /// Encodes `value` and stores it under `key`, replacing any previous blob.
    pub fn insert<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::value::to_raw_value(value).map_err(|err| Error::encode(Some(key), err))?;
        self.fields.insert(key.to_owned(), raw);
        trace!(key, "field inserted");
        Ok(())
    }

    pub fn insert_raw(&mut self, key: impl Into<String>, raw: Box<RawValue>) {
        self.fields.insert(key.into(), raw);
    }

    /// Encodes a whole record and spreads its top-level fields into the set.
    ///
    /// A value that encodes to `null` (e.g. `None`) is skipped. Any other
    /// non-object encoding fails with a document-level decode error.
    pub fn insert_all<T>(&mut self, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::value::to_raw_value(value).map_err(|err| Error::encode(None, err))?;
        if raw.get() == "null" {
            return Ok(());
        }
        let fields: RawFields = serde_json::from_str(raw.get()).map_err(|err| Error::decode(None, err))?;
        trace!(count = fields.len(), "record fields inserted");
        self.fields.extend(fields);
        Ok(())
    }

    /// Moves every remaining entry into an unknown bag.
    ///
    /// An empty set yields `None`, never an empty bag, so consumers can test
    /// for unrecognized fields with `is_some()`.
    pub fn capture_unknowns(&mut self) -> Option<Unknowns> {
        if self.fields.is_empty() {
            return None;
        }
        let fields = std::mem::take(&mut self.fields);
        debug!(count = fields.len(), "captured unknown fields");
        Some(Unknowns::from_fields(fields))
    }

    /// Re-inserts captured unknowns. Fields already present win; see
    /// [`RestorePolicy`]. Returns the number of entries written.
    pub fn restore_unknowns(&mut self, unknowns: Option<&Unknowns>) -> usize {
        self.restore_unknowns_with(unknowns, RestorePolicy::default())
    }

    pub fn restore_unknowns_with(
        &mut self,
        unknowns: Option<&Unknowns>,
        policy: RestorePolicy,
    ) -> usize {
        let Some(unknowns) = unknowns else {
            return 0;
        };
        let mut restored = 0;
        for (key, raw) in unknowns.fields() {
            if policy == RestorePolicy::KnownFirst && self.fields.contains_key(key) {
                debug!(key = key.as_str(), "unknown field shadowed by known field");
                continue;
            }
            self.fields.insert(key.clone(), raw.clone());
            restored += 1;
        }
        restored
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.fields).map_err(|err| Error::encode(None, err))
    }

    pub fn to_string(&self) -> Result<String> {
        serde_json::to_string(&self.fields).map_err(|err| Error::encode(None, err))
    }

    pub fn to_value(&self) -> Result<Value> {
        let data = self.to_vec()?;
        serde_json::from_slice(&data).map_err(|err| Error::decode(None, err))
    }
}
