//! JSON encoding of database values.
//!
//! Chunk files hold plain JSON objects, so the encoding here is lossy by
//! design: dates become ISO strings, binary data becomes base64. JSON has
//! no representation for non-finite floats; those are emitted as strings
//! rather than silently mapped to 0.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use meeple_core::{Row, Value};
use serde_json::{Map, Number, Value as JsonValue};

/// Encode a single database value as JSON
pub fn encode_value(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(v) => JsonValue::Bool(*v),
        Value::Int64(v) => JsonValue::Number((*v).into()),
        Value::Float64(v) => Number::from_f64(*v)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(v.to_string())),
        Value::String(v) => JsonValue::String(v.clone()),
        Value::Bytes(v) => JsonValue::String(BASE64.encode(v)),
        Value::Date(v) => JsonValue::String(v.format("%Y-%m-%d").to_string()),
        Value::DateTime(v) => JsonValue::String(v.format("%Y-%m-%d %H:%M:%S").to_string()),
    }
}

/// Encode a row as a JSON object, keys in query column order
pub fn encode_row(row: &Row) -> JsonValue {
    let mut object = Map::with_capacity(row.values.len());
    for (column, value) in row.columns().iter().zip(row.values.iter()) {
        object.insert(column.clone(), encode_value(value));
    }
    JsonValue::Object(object)
}
