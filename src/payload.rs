//! Typed accessors over loosely-typed JSON payloads.
//!
//! The fetched dataset is decoded once into `serde_json::Value` and read only
//! through these helpers. Every accessor returns `None` for a missing key or a
//! value of the wrong shape; none of them fail loudly.

use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// String values only. Numbers are not stringified.
pub fn as_string<'a>(map: &'a Object, key: &str) -> Option<&'a str> {
    map.get(key)?.as_str()
}

/// Integers, or numerals encoded as strings (`"42"`).
pub fn as_integer(map: &Object, key: &str) -> Option<i64> {
    match map.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// A list whose every element is an integer. One stray element makes the
/// whole list absent; elements are not coerced individually.
pub fn as_integer_list(map: &Object, key: &str) -> Option<Vec<i64>> {
    map.get(key)?.as_array()?.iter().map(Value::as_i64).collect()
}

pub fn as_mapping<'a>(map: &'a Object, key: &str) -> Option<&'a Object> {
    map.get(key)?.as_object()
}

/// Finds the user list either at `users` or one level down at `users.users`.
pub fn extract_user_list(container: &Object) -> Option<&[Value]> {
    match container.get("users")? {
        Value::Array(users) => Some(users.as_slice()),
        Value::Object(inner) => inner.get("users")?.as_array().map(Vec::as_slice),
        _ => None,
    }
}
