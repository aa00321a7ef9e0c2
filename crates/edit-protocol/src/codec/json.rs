//! JSON codec for the protocol record types.
//!
//! Converts records to/from `serde_json::Value`. Encoding emits only the
//! fields that are present, in declaration order (stable because the crate
//! enables serde_json's `preserve_order`); decoding looks each field up by
//! its exact key and fails with [`ProtocolError::TypeMismatch`] on the first
//! non-coercible value, returning no partial instance.

use serde_json::{Map, Value};

use crate::error::ProtocolError;
use crate::types::{EditSuggestion, PropertyValue, PropertyValueEnumItem};

/// JSON conversion capability of one protocol record type.
pub trait JsonCodec: Sized {
    /// Record name used in errors when a whole object has the wrong kind.
    const RECORD: &'static str;

    /// Encodes the record as a JSON object.
    fn to_json(&self) -> Value;

    /// Decodes the record from the fields of a JSON object.
    fn from_json(obj: &Map<String, Value>) -> Result<Self, ProtocolError>;
}

/// Decodes a record from any JSON value, requiring it to be an object.
pub fn decode_object<T: JsonCodec>(value: &Value) -> Result<T, ProtocolError> {
    let obj = value.as_object().ok_or(ProtocolError::TypeMismatch {
        key: T::RECORD,
        expected: "object",
    })?;
    T::from_json(obj)
}

/// Decodes an array of records, preserving element order.
///
/// `null` decodes to the empty collection (an empty `Vec` holds no heap
/// allocation, so every absent array shares the same nothing). Any element
/// that is not a decodable object aborts the whole array decode.
pub fn decode_array<T: JsonCodec>(value: &Value) -> Result<Vec<T>, ProtocolError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items.iter().map(decode_object).collect(),
        _ => Err(ProtocolError::TypeMismatch {
            key: T::RECORD,
            expected: "array",
        }),
    }
}

/// Encodes a slice of records as a JSON array, preserving order.
pub fn encode_array<T: JsonCodec>(items: &[T]) -> Value {
    Value::Array(items.iter().map(T::to_json).collect())
}

// ── Field coercion helpers ────────────────────────────────────────────────
//
// Optional fields treat an absent key and an explicit `null` the same way.
// Required fields report `null` as missing, not mismatched.

fn mismatch(key: &'static str, expected: &'static str) -> ProtocolError {
    ProtocolError::TypeMismatch { key, expected }
}

fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => Some(v),
    }
}

fn opt_bool(obj: &Map<String, Value>, key: &'static str) -> Result<Option<bool>, ProtocolError> {
    present(obj, key)
        .map(|v| v.as_bool().ok_or_else(|| mismatch(key, "boolean")))
        .transpose()
}

fn opt_f64(obj: &Map<String, Value>, key: &'static str) -> Result<Option<f64>, ProtocolError> {
    present(obj, key)
        .map(|v| v.as_f64().ok_or_else(|| mismatch(key, "number")))
        .transpose()
}

fn opt_i32(obj: &Map<String, Value>, key: &'static str) -> Result<Option<i32>, ProtocolError> {
    present(obj, key)
        .map(|v| {
            v.as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| mismatch(key, "integer"))
        })
        .transpose()
}

fn opt_str(obj: &Map<String, Value>, key: &'static str) -> Result<Option<String>, ProtocolError> {
    present(obj, key)
        .map(|v| {
            v.as_str()
                .map(str::to_owned)
                .ok_or_else(|| mismatch(key, "string"))
        })
        .transpose()
}

fn opt_record<T: JsonCodec>(
    obj: &Map<String, Value>,
    key: &'static str,
) -> Result<Option<T>, ProtocolError> {
    present(obj, key)
        .map(|v| {
            let nested = v.as_object().ok_or_else(|| mismatch(key, "object"))?;
            T::from_json(nested)
        })
        .transpose()
}

fn req_str(obj: &Map<String, Value>, key: &'static str) -> Result<String, ProtocolError> {
    let v = present(obj, key).ok_or(ProtocolError::MissingField(key))?;
    v.as_str()
        .map(str::to_owned)
        .ok_or_else(|| mismatch(key, "string"))
}

// ── Per-type codecs ───────────────────────────────────────────────────────

impl JsonCodec for PropertyValue {
    const RECORD: &'static str = "PropertyValue";

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        if let Some(v) = self.bool_value {
            obj.insert("boolValue".into(), Value::Bool(v));
        }
        if let Some(v) = self.double_value {
            obj.insert("doubleValue".into(), Value::from(v));
        }
        if let Some(v) = self.int_value {
            obj.insert("intValue".into(), Value::from(v));
        }
        if let Some(v) = &self.string_value {
            obj.insert("stringValue".into(), Value::String(v.clone()));
        }
        if let Some(v) = &self.enum_value {
            obj.insert("enumValue".into(), v.to_json());
        }
        if let Some(v) = &self.expression {
            obj.insert("expression".into(), Value::String(v.clone()));
        }
        Value::Object(obj)
    }

    fn from_json(obj: &Map<String, Value>) -> Result<Self, ProtocolError> {
        Ok(PropertyValue {
            bool_value: opt_bool(obj, "boolValue")?,
            double_value: opt_f64(obj, "doubleValue")?,
            int_value: opt_i32(obj, "intValue")?,
            string_value: opt_str(obj, "stringValue")?,
            enum_value: opt_record(obj, "enumValue")?,
            expression: opt_str(obj, "expression")?,
        })
    }
}

impl JsonCodec for PropertyValueEnumItem {
    const RECORD: &'static str = "PropertyValueEnumItem";

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("libraryUri".into(), Value::String(self.library_uri.clone()));
        obj.insert("className".into(), Value::String(self.class_name.clone()));
        obj.insert("name".into(), Value::String(self.name.clone()));
        if let Some(doc) = &self.documentation {
            obj.insert("documentation".into(), Value::String(doc.clone()));
        }
        Value::Object(obj)
    }

    fn from_json(obj: &Map<String, Value>) -> Result<Self, ProtocolError> {
        Ok(PropertyValueEnumItem {
            library_uri: req_str(obj, "libraryUri")?,
            class_name: req_str(obj, "className")?,
            name: req_str(obj, "name")?,
            documentation: opt_str(obj, "documentation")?,
        })
    }
}

impl JsonCodec for EditSuggestion {
    const RECORD: &'static str = "EditSuggestion";

    fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("value".into(), Value::String(self.value.clone()));
        obj.insert("kind".into(), Value::String(self.kind.clone()));
        Value::Object(obj)
    }

    fn from_json(obj: &Map<String, Value>) -> Result<Self, ProtocolError> {
        Ok(EditSuggestion {
            value: req_str(obj, "value")?,
            kind: req_str(obj, "kind")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn optional_null_reads_as_absent() {
        let v: PropertyValue = decode_object(&json!({"boolValue": null})).unwrap();
        assert_eq!(v, PropertyValue::default());
    }

    #[test]
    fn bool_field_rejects_other_kinds() {
        let err = decode_object::<PropertyValue>(&json!({"boolValue": "yes"})).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TypeMismatch {
                key: "boolValue",
                expected: "boolean"
            }
        );
    }

    #[test]
    fn double_field_accepts_integer_numbers() {
        let v: PropertyValue = decode_object(&json!({"doubleValue": 4})).unwrap();
        assert_eq!(v.double_value, Some(4.0));
    }

    #[test]
    fn int_field_rejects_fractions_and_overflow() {
        let err = decode_object::<PropertyValue>(&json!({"intValue": 1.5})).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TypeMismatch {
                key: "intValue",
                expected: "integer"
            }
        );
        let err = decode_object::<PropertyValue>(&json!({"intValue": 1i64 << 40})).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TypeMismatch {
                key: "intValue",
                expected: "integer"
            }
        );
    }

    #[test]
    fn nested_enum_value_must_be_an_object() {
        let err = decode_object::<PropertyValue>(&json!({"enumValue": "Alignment"})).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TypeMismatch {
                key: "enumValue",
                expected: "object"
            }
        );
    }

    #[test]
    fn nested_decode_failure_propagates() {
        // Inner record invalid: the outer decode must fail, not half-build.
        let err = decode_object::<PropertyValue>(&json!({
            "boolValue": true,
            "enumValue": {"libraryUri": "dart:ui", "className": 3, "name": "left"}
        }))
        .unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TypeMismatch {
                key: "className",
                expected: "string"
            }
        );
    }

    #[test]
    fn required_field_missing_or_null() {
        let err = decode_object::<EditSuggestion>(&json!({"value": "Center"})).unwrap_err();
        assert_eq!(err, ProtocolError::MissingField("kind"));
        let err =
            decode_object::<EditSuggestion>(&json!({"value": "Center", "kind": null})).unwrap_err();
        assert_eq!(err, ProtocolError::MissingField("kind"));
    }

    #[test]
    fn required_field_wrong_kind() {
        let err = decode_object::<EditSuggestion>(&json!({"value": 1, "kind": "TYPE"})).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TypeMismatch {
                key: "value",
                expected: "string"
            }
        );
    }

    #[test]
    fn whole_object_wrong_kind() {
        let err = decode_object::<EditSuggestion>(&json!(["not", "an", "object"])).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TypeMismatch {
                key: "EditSuggestion",
                expected: "object"
            }
        );
    }

    #[test]
    fn enum_item_omits_absent_documentation() {
        let item = PropertyValueEnumItem::new("package:flutter/painting.dart", "Alignment", "center", None);
        let encoded = item.to_json();
        let obj = encoded.as_object().unwrap();
        assert!(!obj.contains_key("documentation"));
        assert_eq!(
            serde_json::to_string(&encoded).unwrap(),
            r#"{"libraryUri":"package:flutter/painting.dart","className":"Alignment","name":"center"}"#
        );
    }

    #[test]
    fn array_decode_rejects_non_array() {
        let err = decode_array::<EditSuggestion>(&json!({"value": "x"})).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::TypeMismatch {
                key: "EditSuggestion",
                expected: "array"
            }
        );
    }
}
