//! Free-form option mappings and their merge rule

use serde_json::Value;

/// Free-form key/value options, as carried by builder and transport configs
pub type Options = serde_json::Map<String, Value>;

/// Merge `overrides` on top of `base`.
///
/// Keys present in both take the value from `overrides`; keys only present
/// in `base` are kept. Neither input is modified.
pub fn overlay(base: &Options, overrides: &Options) -> Options {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Whether an option value switches a feature on.
///
/// `null`, `false`, `0`, `""`, `"0"` and empty arrays/objects are off.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Scalar option value as text: strings verbatim, numbers in decimal form
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
