// Single-level key transforms for objects, maps, and arrays of records.
// None of these descend into nested values; recursion is the walker's job.
use crate::case::convert_token;
use crate::options::CaseFormat;
use crate::value::{insert_map_entry, insert_object_entry, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// True for keys that read as a canonical non-negative integer literal
/// ("0", "42" but not "007" or "1.5"); such keys stay numeric and never go
/// through the token converter.
fn is_numeric_key(key: &str) -> bool {
    key.parse::<u64>().is_ok_and(|n| n.to_string() == key)
}

/// Rewrites the keys of a single object level. Numeric keys are kept
/// verbatim; every other key goes through [`convert_token`], and when two
/// source keys collapse into the same converted key the later entry wins.
/// Any non-object input (including arrays and sets) is returned unchanged.
pub fn transform_object(value: &Value, target: CaseFormat, source: Option<CaseFormat>) -> Value {
    let Value::Object(inner) = value else {
        return value.clone();
    };
    let entries = inner.borrow();
    let mut out: Vec<(String, Value)> = Vec::with_capacity(entries.len());
    for (key, item) in entries.iter() {
        let new_key = if is_numeric_key(key) {
            key.clone()
        } else {
            convert_token(key, target, source)
        };
        insert_object_entry(&mut out, new_key, item.clone());
    }
    Value::Object(Rc::new(RefCell::new(out)))
}

/// Rewrites the string keys of a single map level into a new map; non-string
/// keys and all values are copied unchanged. Non-map input is returned
/// unchanged.
pub fn transform_map(value: &Value, target: CaseFormat, source: Option<CaseFormat>) -> Value {
    let Value::Map(inner) = value else {
        return value.clone();
    };
    let entries = inner.borrow();
    let mut out: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
    for (key, item) in entries.iter() {
        let new_key = match key {
            Value::String(text) => Value::String(convert_token(text, target, source)),
            other => other.clone(),
        };
        insert_map_entry(&mut out, new_key, item.clone());
    }
    Value::Map(Rc::new(RefCell::new(out)))
}

/// Applies the map or object key transform to each element of a single array
/// level. Elements that are neither maps nor objects (including nested
/// arrays and sets) pass through untouched. Non-array input is returned
/// unchanged.
pub fn transform_array_items(
    value: &Value,
    target: CaseFormat,
    source: Option<CaseFormat>,
) -> Value {
    let Value::Array(inner) = value else {
        return value.clone();
    };
    let items = inner.borrow();
    let out: Vec<Value> = items
        .iter()
        .map(|item| match item {
            Value::Map(_) => transform_map(item, target, source),
            Value::Object(_) => transform_object(item, target, source),
            other => other.clone(),
        })
        .collect();
    Value::Array(Rc::new(RefCell::new(out)))
}
