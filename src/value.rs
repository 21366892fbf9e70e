//! Shape assertions over generic JSON trees.
//!
//! Each helper checks one level of a parsed document and returns a typed
//! [`Error`] instead of panicking when the shape is wrong.

use crate::error::{Error, Result};
use serde_json::{Map, Number, Value};

/// Name of a value's JSON type, for diagnostics.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse UTF-8 JSON bytes into a generic tree.
///
/// Numbers are kept as written (`arbitrary_precision`), so an out-of-range
/// literal such as `1e400` parses here and is rejected later by
/// [`int_array`] under its label.
pub fn parse(bytes: &[u8]) -> Result<Value> {
    serde_json::from_slice(bytes).map_err(Error::from)
}

/// Require `value` to be an object. `field` names it in the error.
pub fn as_object<'a>(field: &str, value: &'a Value) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| Error::SchemaShapeMismatch {
        field: field.to_owned(),
        found: kind(value),
    })
}

/// Project `field` out of a top-level document, which must be an object.
pub fn project<'a>(doc: &'a Value, field: &str) -> Result<&'a Value> {
    as_object("$", doc)?
        .get(field)
        .ok_or_else(|| Error::MissingField(field.to_owned()))
}

/// Require `value` to be an array of integers. `label` names the entry in
/// the error.
pub fn int_array(label: &str, value: &Value) -> Result<Vec<i64>> {
    let invalid = || Error::InvalidValueShape(label.to_owned());
    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|item| match item {
            Value::Number(n) => integral(n).ok_or_else(invalid),
            _ => Err(invalid()),
        })
        .collect()
}

/// Integral value of `n` if it fits in `i64`. Floats without a fractional
/// part (`3.0`) count as integers.
fn integral(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if n.is_u64() {
        return None;
    }
    n.as_f64().and_then(whole)
}

/// `f` as an `i64` if it has no fractional part and lies strictly inside
/// the `i64` range.
///
/// Both bounds are exclusive: anything that rounds to ±2^63 may have come
/// from an integer outside the range, so it is refused. `i64::MIN` itself
/// still decodes when written as an integer literal.
pub(crate) fn whole(f: f64) -> Option<i64> {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    (f.fract() == 0.0 && f > -LIMIT && f < LIMIT).then_some(f as i64)
}

/// Render a tree as UTF-8 bytes, pretty (two-space indent) or compact.
pub fn render(value: &Value, pretty: bool) -> Vec<u8> {
    if pretty {
        format!("{value:#}").into_bytes()
    } else {
        value.to_string().into_bytes()
    }
}
