//! Overlay a parsed document onto a destination's current JSON form

use serde_json::{Map, Value};

/// How a `null` in the document treats a non-null destination value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPolicy {
    /// `null` replaces the value, clearing optional fields.
    Replace,
    /// `null` leaves the value as it was.
    Keep,
}

/// Overlay `document` onto `base` in place.
///
/// Objects are merged member by member, recursing into members present on
/// both sides. A document key with no exact counterpart in `base` falls back
/// to an existing key that differs only in ASCII case. Anything else in
/// `document` replaces the corresponding value in `base`, except that `null`
/// over a non-null value follows `nulls`. Members of `base` that the document
/// does not mention are left untouched.
pub fn overlay(base: &mut Value, document: Value, nulls: NullPolicy) {
    match (base, document) {
        (Value::Object(base_map), Value::Object(document_map)) => {
            for (key, value) in document_map {
                let key = matching_key(base_map, key);
                match base_map.get_mut(&key) {
                    Some(existing) => overlay(existing, value, nulls),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, Value::Null) if nulls == NullPolicy::Keep && !base.is_null() => {}
        (base, document) => *base = document,
    }
}

/// True if `value` holds a `null` anywhere, including nested members.
pub fn contains_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.iter().any(contains_null),
        Value::Object(members) => members.values().any(contains_null),
        _ => false,
    }
}

/// Exact key if present, else the first existing key equal ignoring ASCII case.
fn matching_key(base_map: &Map<String, Value>, key: String) -> String {
    if base_map.contains_key(&key) {
        return key;
    }
    base_map
        .keys()
        .find(|existing| existing.eq_ignore_ascii_case(&key))
        .cloned()
        .unwrap_or(key)
}
