//! The value tree that gets inspected.
//!
//! [`Value`] is a closed set of variants covering the scalar kinds the
//! inspector distinguishes (including `null` and `undefined` as separate
//! categories), plus the composite kinds: arrays, objects, dates, regular
//! expression literals, and function references.
//!
//! Values can be built three ways:
//!
//! - Converted from any [`serde_json::Value`] (and thus from the `json!`
//!   macro) via `From`.
//! - Serialized from any `Serialize` type via [`Value::from_serialize`].
//! - Assembled by hand with the [`Object`] builder when you need kinds JSON
//!   cannot express (dates, functions, hidden members).
//!
//! # Example
//!
//! ```rust
//! use lookout::{Object, Value};
//! use serde_json::json;
//!
//! // From a JSON literal
//! let config = Value::from(json!({ "port": 8080, "verbose": true }));
//!
//! // By hand, with kinds JSON has no spelling for
//! let handle = Value::Object(
//!     Object::new()
//!         .entry("name", "reload")
//!         .entry("callback", Value::function("reload", 1))
//!         .hidden_entry("generation", 3),
//! );
//! assert!(matches!(config, Value::Object(_)));
//! assert!(matches!(handle, Value::Object(_)));
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A value in the tree handed to the inspector.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The null sentinel, distinct from `Undefined`.
    Null,
    /// An absent/unset value.
    Undefined,
    Bool(bool),
    /// Numbers reuse [`serde_json::Number`] so integers print without a
    /// trailing `.0`.
    Number(serde_json::Number),
    String(String),
    /// A point in time, rendered as UTC text.
    Date(DateTime<Utc>),
    /// A regular expression literal, stored as its pattern source.
    Regexp(String),
    /// A function reference: name (may be empty) and declared parameter count.
    Function { name: String, arity: usize },
    Array(Vec<Value>),
    Object(Object),
}

impl Value {
    /// Builds a function reference value.
    ///
    /// An empty name renders as `(lambda)`.
    pub fn function(name: impl Into<String>, arity: usize) -> Value {
        Value::Function {
            name: name.into(),
            arity,
        }
    }

    /// Builds a regular expression literal from its pattern source.
    pub fn regexp(source: impl Into<String>) -> Value {
        Value::Regexp(source.into())
    }

    /// Builds a date value.
    pub fn date(when: DateTime<Utc>) -> Value {
        Value::Date(when)
    }

    /// Converts any serializable data into a value tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lookout::Value;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Server { host: String, port: u16 }
    ///
    /// let value = Value::from_serialize(&Server {
    ///     host: "localhost".into(),
    ///     port: 8080,
    /// }).unwrap();
    /// assert!(matches!(value, Value::Object(_)));
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Value, serde_json::Error> {
        serde_json::to_value(data).map(Value::from)
    }
}

/// An ordered collection of named members.
///
/// Members come in two flavors: regular entries, which enumerate in insertion
/// order, and hidden entries, which the property filter appends after the
/// regular ones when the configuration asks for non-enumerable members.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Object {
    entries: Vec<(String, Value)>,
    hidden: Vec<(String, Value)>,
}

impl Object {
    /// Creates an empty object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a member, builder style.
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends a hidden (non-enumerable) member, builder style.
    pub fn hidden_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_hidden(key, value);
        self
    }

    /// Appends a member.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Appends a hidden member.
    pub fn insert_hidden(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.hidden.push((key.into(), value.into()));
    }

    /// Looks up a member by key, checking regular entries first.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .chain(self.hidden.iter())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Number of regular (enumerable) members.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no regular members.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Regular members, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Hidden members, in insertion order.
    pub fn hidden_entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.hidden.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Value {
        Value::Object(object)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Number(serde_json::Number::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Number(serde_json::Number::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Value {
        Value::Number(serde_json::Number::from(v))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Value {
        Value::Number(serde_json::Number::from(v))
    }
}

impl From<f64> for Value {
    /// Non-finite floats become `Null`, matching `serde_json`.
    fn from(v: f64) -> Value {
        serde_json::Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Value {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Value {
        Value::Array(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Value {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                let mut object = Object::new();
                for (key, value) in map {
                    object.insert(key, Value::from(value));
                }
                Value::Object(object)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_literal() {
        let value = Value::from(json!({ "a": 1, "b": [true, null] }));
        let Value::Object(object) = value else {
            panic!("expected object");
        };
        assert_eq!(object.get("a"), Some(&Value::from(1)));
        assert_eq!(
            object.get("b"),
            Some(&Value::Array(vec![Value::Bool(true), Value::Null]))
        );
    }

    #[test]
    fn test_from_serialize_struct() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let value = Value::from_serialize(&Point { x: 3, y: 4 }).unwrap();
        let Value::Object(object) = value else {
            panic!("expected object");
        };
        assert_eq!(object.get("x"), Some(&Value::from(3)));
        assert_eq!(object.get("y"), Some(&Value::from(4)));
    }

    #[test]
    fn test_hidden_entries_are_separate() {
        let object = Object::new().entry("a", 1).hidden_entry("b", 2);
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("b"), Some(&Value::from(2)));
        assert_eq!(object.hidden_entries().count(), 1);
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert_eq!(Value::from(f64::NAN), Value::Null);
        assert_eq!(Value::from(2.5), Value::Number(
            serde_json::Number::from_f64(2.5).unwrap()
        ));
    }
}
