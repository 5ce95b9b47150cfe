//! Bag of fields a consumer's schema does not recognize.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::error::{Error, Result};
use crate::raw_properties::RawFields;

/// How [`RawProperties::restore_unknowns_with`](crate::RawProperties::restore_unknowns_with)
/// treats an unknown whose name is already present in the set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RestorePolicy {
    /// Keep the entry already in the set. Known fields are inserted first,
    /// so they always win.
    #[default]
    KnownFirst,
    /// Replace the entry with the unknown blob.
    Overwrite,
}

/// Field name to raw JSON blob, owned by the consuming value.
///
/// Consumers store this as `Option<Unknowns>`; a decode with no leftover
/// fields produces `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Unknowns(RawFields);

impl Unknowns {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_fields(fields: RawFields) -> Self {
        Self(fields)
    }

    pub(crate) fn fields(&self) -> &RawFields {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Raw blob exactly as it appeared in the source payload.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key).map(Box::as_ref)
    }

    /// Decodes one unknown without removing it.
    pub fn get_as<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.0
            .get(key)
            .map(|raw| serde_json::from_str(raw.get()).map_err(|err| Error::decode(Some(key), err)))
            .transpose()
    }

    pub fn insert<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::value::to_raw_value(value).map_err(|err| Error::encode(Some(key), err))?;
        self.0.insert(key.to_owned(), raw);
        Ok(())
    }

    pub fn insert_raw(&mut self, key: impl Into<String>, raw: Box<RawValue>) {
        self.0.insert(key.into(), raw);
    }

    pub fn remove(&mut self, key: &str) -> Option<Box<RawValue>> {
        self.0.shift_remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0.iter().map(|(key, raw)| (key.as_str(), raw.as_ref()))
    }
}

/// Two bags are equal when they hold the same keys with byte-identical blobs.
impl PartialEq for Unknowns {
    fn eq(&self, other: &Self) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .all(|(key, raw)| other.0.get(key).is_some_and(|o| o.get() == raw.get()))
    }
}

impl Eq for Unknowns {}

impl IntoIterator for Unknowns {
    type Item = (String, Box<RawValue>);
    type IntoIter = indexmap::map::IntoIter<String, Box<RawValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Box<RawValue>)> for Unknowns {
    fn from_iter<I: IntoIterator<Item = (String, Box<RawValue>)>>(iter: I) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}
