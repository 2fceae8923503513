//! Shape-preserving redaction of arbitrary JSON documents.
//!
//! Every leaf is replaced by a placeholder chosen from its type and the key
//! it was found under. Objects keep their keys, arrays keep their length.

pub mod rules;

use chrono::Utc;
use serde_json::{Map, Number, Value};
use thiserror::Error;

pub use rules::{PLACEHOLDER_IP, PLACEHOLDER_URI, PLACEHOLDER_URL};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RedactError {
    /// No redaction rule exists for this JSON type
    #[error("unsupported type '{type_name}' under key '{key}'")]
    UnsupportedType { type_name: &'static str, key: String },
}

/// Redact a whole document. The root has no key.
pub fn redact_document(value: Value) -> Result<Value, RedactError> {
    transform(value, "")
}

/// Redact `value`, found under `key` in its parent object.
///
/// Array elements and the document root are redacted with an empty key.
pub fn transform(value: Value, key: &str) -> Result<Value, RedactError> {
    match value {
        Value::Object(entries) => {
            let mut redacted = Map::new();
            for (k, v) in entries {
                let v = transform(v, &k)?;
                redacted.insert(k, v);
            }
            Ok(Value::Object(redacted))
        }
        Value::Array(items) => items
            .into_iter()
            .map(|item| transform(item, ""))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Number(n) if is_float(&n) => Ok(Value::from(0.0_f64)),
        Value::Number(_) => Ok(Value::from(rules::redact_integer(key, Utc::now()))),
        Value::String(s) => Ok(Value::String(rules::redact_string(s, key))),
        Value::Bool(_) => Ok(Value::Bool(false)),
        Value::Null => Err(RedactError::UnsupportedType {
            type_name: "null",
            key: key.to_string(),
        }),
    }
}

/// Floats are numbers written with a fraction or exponent. Integer literals
/// of any magnitude stay integers.
fn is_float(n: &Number) -> bool {
    n.is_f64() || n.to_string().contains(|c: char| matches!(c, '.' | 'e' | 'E'))
}
