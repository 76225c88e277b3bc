//! Dynamic value model for key-case transformation.
//!
//! Containers are reference-counted so the same node can appear in several
//! places (or contain itself); the walker keys its visited map on the
//! container address, which is what makes shared and cyclic inputs terminate
//! and keeps aliasing intact in the output.
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use crate::error::TransformError;

/// A dynamically-typed value: JSON-like primitives plus insertion-ordered
/// objects, arrays, maps (arbitrary keys), and sets.
///
/// `Clone` is shallow for containers: the clone shares the same backing
/// storage and the same identity.
///
/// # Example
/// ```
/// use recase::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"user_id": 1}));
/// assert_eq!(value.get("user_id"), Some(Value::from(1)));
/// ```
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Rc<RefCell<Vec<Value>>>),
    Object(Rc<RefCell<Vec<(String, Value)>>>),
    Map(Rc<RefCell<Vec<(Value, Value)>>>),
    Set(Rc<RefCell<Vec<Value>>>),
}

impl Value {
    /// Builds an array from anything yielding values.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(Rc::new(RefCell::new(items.into_iter().collect())))
    }

    /// Builds an object from key/value pairs, keeping insertion order.
    /// A repeated key overwrites the earlier entry.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut out: Vec<(String, Value)> = Vec::new();
        for (key, value) in entries {
            insert_object_entry(&mut out, key.into(), value);
        }
        Value::Object(Rc::new(RefCell::new(out)))
    }

    /// Builds a map from key/value pairs. Keys may be any value; a repeated
    /// key (same-value semantics) overwrites the earlier entry.
    pub fn map<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let mut out: Vec<(Value, Value)> = Vec::new();
        for (key, value) in entries {
            insert_map_entry(&mut out, key, value);
        }
        Value::Map(Rc::new(RefCell::new(out)))
    }

    /// Builds a set, dropping same-value duplicates.
    pub fn set<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut out: Vec<Value> = Vec::new();
        for item in items {
            push_unique(&mut out, item);
        }
        Value::Set(Rc::new(RefCell::new(out)))
    }

    /// Address of the backing container, `None` for primitives.
    pub fn ref_id(&self) -> Option<usize> {
        match self {
            Value::Array(inner) => Some(Rc::as_ptr(inner) as usize),
            Value::Object(inner) => Some(Rc::as_ptr(inner) as usize),
            Value::Map(inner) => Some(Rc::as_ptr(inner) as usize),
            Value::Set(inner) => Some(Rc::as_ptr(inner) as usize),
            _ => None,
        }
    }

    /// True when both values are the same container instance.
    pub fn same_ref(&self, other: &Value) -> bool {
        match (self.ref_id(), other.ref_id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Same-value equality: primitives by value, containers by identity.
    /// This is the key-equality used by maps and sets.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => self.same_ref(other),
        }
    }

    pub fn is_container(&self) -> bool {
        self.ref_id().is_some()
    }

    /// Looks up an object entry by key. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Value::Object(inner) => inner
                .borrow()
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    /// Looks up a map entry by same-value key. Returns `None` for non-maps.
    pub fn map_get(&self, key: &Value) -> Option<Value> {
        match self {
            Value::Map(inner) => inner
                .borrow()
                .iter()
                .find(|(k, _)| k.same_value(key))
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    /// Renders the value as `serde_json::Value`.
    ///
    /// Sets render as arrays and maps as objects, so the result is lossy on
    /// container kind. Cyclic values and maps with non-string keys are not
    /// representable and fail with [`TransformError`].
    ///
    /// # Example
    /// ```
    /// use recase::Value;
    /// use serde_json::json;
    ///
    /// let value = Value::object([("id", Value::from(7))]);
    /// assert_eq!(value.to_json()?, json!({"id": 7}));
    /// # Ok::<(), recase::TransformError>(())
    /// ```
    pub fn to_json(&self) -> Result<JsonValue, TransformError> {
        let mut in_progress = HashSet::new();
        self.to_json_inner(&mut in_progress)
    }

    fn to_json_inner(&self, in_progress: &mut HashSet<usize>) -> Result<JsonValue, TransformError> {
        if let Some(id) = self.ref_id() {
            if !in_progress.insert(id) {
                return Err(TransformError::CyclicValue);
            }
        }
        let result = match self {
            Value::Null => Ok(JsonValue::Null),
            Value::Bool(b) => Ok(JsonValue::Bool(*b)),
            Value::Number(n) => Ok(JsonValue::Number(n.clone())),
            Value::String(s) => Ok(JsonValue::String(s.clone())),
            Value::Array(inner) | Value::Set(inner) => {
                let items = inner.borrow();
                let mut out = Vec::with_capacity(items.len());
                for item in items.iter() {
                    out.push(item.to_json_inner(in_progress)?);
                }
                Ok(JsonValue::Array(out))
            }
            Value::Object(inner) => {
                let entries = inner.borrow();
                let mut out = JsonMap::new();
                for (key, value) in entries.iter() {
                    out.insert(key.clone(), value.to_json_inner(in_progress)?);
                }
                Ok(JsonValue::Object(out))
            }
            Value::Map(inner) => {
                let entries = inner.borrow();
                let mut out = JsonMap::new();
                for (key, value) in entries.iter() {
                    let Value::String(key) = key else {
                        return Err(TransformError::NonStringMapKey);
                    };
                    out.insert(key.clone(), value.to_json_inner(in_progress)?);
                }
                Ok(JsonValue::Object(out))
            }
        };
        if let Some(id) = self.ref_id() {
            in_progress.remove(&id);
        }
        result
    }
}

/// Structural equality. Objects and maps compare entries in order; sets
/// compare as ordered sequences. Comparing cyclic values does not terminate,
/// so keep `==` to acyclic data and use [`Value::same_ref`] for identity.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) | (Value::Set(a), Value::Set(b)) => {
                *a.borrow() == *b.borrow()
            }
            (Value::Object(a), Value::Object(b)) => *a.borrow() == *b.borrow(),
            (Value::Map(a), Value::Map(b)) => *a.borrow() == *b.borrow(),
            _ => false,
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(n),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::array(items.into_iter().map(Value::from)),
            JsonValue::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

pub(crate) fn insert_object_entry(entries: &mut Vec<(String, Value)>, key: String, value: Value) {
    if let Some(slot) = entries.iter_mut().find(|(k, _)| *k == key) {
        slot.1 = value;
    } else {
        entries.push((key, value));
    }
}

pub(crate) fn insert_map_entry(entries: &mut Vec<(Value, Value)>, key: Value, value: Value) {
    if let Some(slot) = entries.iter_mut().find(|(k, _)| k.same_value(&key)) {
        slot.1 = value;
    } else {
        entries.push((key, value));
    }
}

pub(crate) fn push_unique(items: &mut Vec<Value>, value: Value) {
    if !items.iter().any(|existing| existing.same_value(&value)) {
        items.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_round_trip_preserves_structure() {
        let source = json!({"user_id": 1, "tags": ["a", "b"], "nested": {"ok": true}});
        let value = Value::from(source.clone());
        assert_eq!(value.to_json().unwrap(), source);
    }

    #[test]
    fn clone_shares_identity() {
        let original = Value::object([("k", Value::from(1))]);
        let alias = original.clone();
        assert!(original.same_ref(&alias));
        assert_eq!(original.ref_id(), alias.ref_id());
    }

    #[test]
    fn separate_containers_with_equal_contents_are_not_same_ref() {
        let a = Value::array([Value::from(1)]);
        let b = Value::array([Value::from(1)]);
        assert_eq!(a, b);
        assert!(!a.same_ref(&b));
    }

    #[test]
    fn set_constructor_drops_duplicates() {
        let set = Value::set([Value::from("x"), Value::from("x"), Value::from("y")]);
        let Value::Set(inner) = &set else {
            panic!("expected set")
        };
        assert_eq!(inner.borrow().len(), 2);
    }

    #[test]
    fn map_keys_use_same_value_semantics() {
        let shared = Value::object([("k", Value::from(1))]);
        let other = Value::object([("k", Value::from(1))]);
        let map = Value::map([
            (shared.clone(), Value::from("first")),
            (other, Value::from("second")),
            (shared.clone(), Value::from("third")),
        ]);
        // Structurally-equal but distinct objects are distinct keys; the
        // same instance overwrites.
        assert_eq!(map.map_get(&shared), Some(Value::from("third")));
        let Value::Map(inner) = &map else {
            panic!("expected map")
        };
        assert_eq!(inner.borrow().len(), 2);
    }

    #[test]
    fn to_json_rejects_cycles() {
        let object = Value::object([("self", Value::Null)]);
        if let Value::Object(inner) = &object {
            inner.borrow_mut()[0].1 = object.clone();
        }
        assert_eq!(object.to_json(), Err(TransformError::CyclicValue));
    }

    #[test]
    fn to_json_allows_shared_acyclic_references() {
        let shared = Value::object([("n", Value::from(1))]);
        let root = Value::object([("a", shared.clone()), ("b", shared)]);
        assert_eq!(root.to_json().unwrap(), json!({"a": {"n": 1}, "b": {"n": 1}}));
    }

    #[test]
    fn to_json_rejects_non_string_map_keys() {
        let map = Value::map([(Value::from(1), Value::from("v"))]);
        assert_eq!(map.to_json(), Err(TransformError::NonStringMapKey));
    }
}
