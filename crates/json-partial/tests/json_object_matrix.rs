//! Decode/encode matrix for `JsonObject` consumers: known-field extraction,
//! unknown-field capture and re-emission.

use json_partial::{JsonObject, RawProperties, Result, Unknowns};
use serde_json::json;

/// Two known fields, no unknown capture.
#[derive(Debug, Default, PartialEq)]
struct Pair {
    a: String,
    b: String,
}

impl JsonObject for Pair {
    fn decode_fields(&mut self, props: &mut RawProperties) -> Result<()> {
        props.extract("a", &mut self.a)?;
        props.extract("b", &mut self.b)
    }

    fn encode_fields(&self, props: &mut RawProperties) -> Result<()> {
        props.insert("a", &self.a)?;
        props.insert("b", &self.b)
    }
}

/// One optional known field plus an unknown bag.
#[derive(Debug, Default, PartialEq)]
struct Simple {
    value: Option<String>,
    unknowns: Option<Unknowns>,
}

impl JsonObject for Simple {
    fn decode_fields(&mut self, props: &mut RawProperties) -> Result<()> {
        props.extract("value", &mut self.value)
    }

    fn encode_fields(&self, props: &mut RawProperties) -> Result<()> {
        props.insert("value", &self.value)
    }

    fn unknowns(&self) -> Option<&Unknowns> {
        self.unknowns.as_ref()
    }

    fn set_unknowns(&mut self, unknowns: Option<Unknowns>) {
        self.unknowns = unknowns;
    }
}

#[derive(Debug, Default, PartialEq)]
struct Counter {
    count: u32,
    labels: Vec<String>,
}

impl JsonObject for Counter {
    fn decode_fields(&mut self, props: &mut RawProperties) -> Result<()> {
        props.extract("count", &mut self.count)?;
        props.extract("labels", &mut self.labels)
    }

    fn encode_fields(&self, props: &mut RawProperties) -> Result<()> {
        props.insert("count", &self.count)?;
        props.insert("labels", &self.labels)
    }
}

// ---------------------------------------------------------------------------
// Known fields
// ---------------------------------------------------------------------------

#[test]
fn extra_fields_are_dropped_without_capture() {
    let obj: Pair = json_partial::from_str(r#"{ "a": "0123", "b": "abcd", "c": "foo" }"#).unwrap();
    assert_eq!(obj.a, "0123");
    assert_eq!(obj.b, "abcd");

    let out = json_partial::to_value(&obj).unwrap();
    let map = out.as_object().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["a"], json!("0123"));
    assert_eq!(map["b"], json!("abcd"));
}

#[test]
fn known_field_roundtrip() {
    let original = Counter {
        count: 3,
        labels: vec!["x".to_string(), "y".to_string()],
    };
    let data = json_partial::to_vec(&original).unwrap();
    let back: Counter = json_partial::from_slice(&data).unwrap();
    assert_eq!(back, original);
}

#[test]
fn missing_known_field_keeps_default() {
    let obj: Counter = json_partial::from_str(r#"{"count": 9}"#).unwrap();
    assert_eq!(obj.count, 9);
    assert!(obj.labels.is_empty());
}

#[test]
fn null_optional_field_decodes_to_none() {
    let obj: Simple = json_partial::from_str(r#"{"value": null}"#).unwrap();
    assert_eq!(obj.value, None);
    assert!(obj.unknowns.is_none());
    assert_eq!(json_partial::to_string(&obj).unwrap(), r#"{"value":null}"#);
}

#[test]
fn from_value_matches_from_str() {
    let from_value: Simple = json_partial::from_value(&json!({"value": "v", "x": [1, 2]})).unwrap();
    let from_str: Simple = json_partial::from_str(r#"{"value":"v","x":[1,2]}"#).unwrap();
    assert_eq!(from_value, from_str);
}

// ---------------------------------------------------------------------------
// Unknown fields
// ---------------------------------------------------------------------------

#[test]
fn no_unknown_properties_leaves_bag_absent() {
    let obj: Simple = json_partial::from_str(r#"{ "value": "0123" }"#).unwrap();
    assert_eq!(obj.value.as_deref(), Some("0123"));
    assert!(obj.unknowns.is_none());
}

#[test]
fn unknown_properties_are_captured_raw() {
    let obj: Simple = json_partial::from_str(r#"{ "value": "0123", "addProperty": "abcd" }"#).unwrap();
    assert_eq!(obj.value.as_deref(), Some("0123"));
    let unknowns = obj.unknowns.as_ref().unwrap();
    assert_eq!(unknowns.len(), 1);
    assert_eq!(unknowns.get("addProperty").unwrap().get(), "\"abcd\"");
}

#[test]
fn unknown_properties_are_re_emitted() {
    let obj: Simple = json_partial::from_str(r#"{ "value": "0123", "addProperty": "abcd" }"#).unwrap();
    let out = json_partial::to_value(&obj).unwrap();
    assert_eq!(out, json!({"value": "0123", "addProperty": "abcd"}));
}

#[test]
fn unknown_blobs_keep_their_bytes() {
    let input = r#"{"value":"v","nested": { "list" : [1,  2.50, 3e2] },"n":1.0}"#;
    let obj: Simple = json_partial::from_str(input).unwrap();
    let out = json_partial::to_string(&obj).unwrap();
    assert_eq!(out, r#"{"value":"v","nested":{ "list" : [1,  2.50, 3e2] },"n":1.0}"#);
}

#[test]
fn modified_known_field_with_preserved_unknowns() {
    let mut obj: Simple = json_partial::from_str(r#"{"value":"old","extra":{"k":true}}"#).unwrap();
    obj.value = Some("new".to_string());
    let out = json_partial::to_value(&obj).unwrap();
    assert_eq!(out, json!({"value": "new", "extra": {"k": true}}));
}

#[test]
fn known_field_wins_over_colliding_unknown() {
    let mut bag = Unknowns::new();
    bag.insert("value", "stale").unwrap();
    bag.insert("other", &1).unwrap();
    let obj = Simple {
        value: Some("fresh".to_string()),
        unknowns: Some(bag),
    };
    let out = json_partial::to_value(&obj).unwrap();
    assert_eq!(out, json!({"value": "fresh", "other": 1}));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn wrong_field_type_aborts_decode() {
    let err = json_partial::from_str::<Counter>(r#"{"count": "three"}"#).unwrap_err();
    assert!(err.is_decode());
    assert_eq!(err.key(), Some("count"));
}

#[test]
fn non_object_payload_is_rejected() {
    for input in ["[]", "1", "\"s\"", "null", "{"] {
        let err = json_partial::from_str::<Simple>(input).unwrap_err();
        assert!(err.is_decode(), "expected decode error for {input}");
        assert_eq!(err.key(), None);
    }
}

#[test]
fn error_message_names_the_field() {
    let err = json_partial::from_str::<Counter>(r#"{"labels": 5}"#).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("`labels`"), "unexpected message: {msg}");
}
