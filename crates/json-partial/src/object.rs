//! Opt-in capability for types that decode part of a JSON object and keep
//! the rest.

use crate::error::Result;
use crate::raw_properties::RawProperties;
use crate::unknowns::Unknowns;

/// A value encoded as a JSON object through a [`RawProperties`] set.
///
/// `decode_fields` extracts each known field; whatever it leaves in the set
/// is handed to `set_unknowns`. `encode_fields` inserts each known field;
/// `unknowns` are restored afterwards without overwriting them.
///
/// Types that do not care about unknown fields keep the default
/// `unknowns`/`set_unknowns`, which drop them.
///
/// ```
/// use json_partial::{JsonObject, RawProperties, Result, Unknowns};
///
/// #[derive(Default)]
/// struct Profile {
///     name: String,
///     unknowns: Option<Unknowns>,
/// }
///
/// impl JsonObject for Profile {
///     fn decode_fields(&mut self, props: &mut RawProperties) -> Result<()> {
///         props.extract("name", &mut self.name)
///     }
///
///     fn encode_fields(&self, props: &mut RawProperties) -> Result<()> {
///         props.insert("name", &self.name)
///     }
///
///     fn unknowns(&self) -> Option<&Unknowns> {
///         self.unknowns.as_ref()
///     }
///
///     fn set_unknowns(&mut self, unknowns: Option<Unknowns>) {
///         self.unknowns = unknowns;
///     }
/// }
///
/// let profile: Profile = json_partial::from_str(r#"{"name":"ada","theme":"dark"}"#).unwrap();
/// assert_eq!(profile.name, "ada");
/// assert!(profile.unknowns.as_ref().unwrap().contains_key("theme"));
/// ```
pub trait JsonObject: Default {
    fn decode_fields(&mut self, props: &mut RawProperties) -> Result<()>;

    fn encode_fields(&self, props: &mut RawProperties) -> Result<()>;

    fn unknowns(&self) -> Option<&Unknowns> {
        None
    }

    fn set_unknowns(&mut self, unknowns: Option<Unknowns>) {
        let _ = unknowns;
    }
}

/// Builds a `T` from an already-split document.
pub fn decode_object<T>(mut props: RawProperties) -> Result<T>
where
    T: JsonObject,
{
    let mut object = T::default();
    object.decode_fields(&mut props)?;
    object.set_unknowns(props.capture_unknowns());
    Ok(object)
}

/// Assembles the fields of `object`, unknowns last.
pub fn encode_object<T>(object: &T) -> Result<RawProperties>
where
    T: JsonObject,
{
    let mut props = RawProperties::new();
    object.encode_fields(&mut props)?;
    props.restore_unknowns(object.unknowns());
    Ok(props)
}
