//! Loosely-typed movie records.
//!
//! The mutators and validators accept records whose shape has not been
//! checked: any field may be missing or carry the wrong JSON type. A
//! [`Record`] only guarantees that the value is a JSON object; keys keep
//! their insertion order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` if it is a JSON object; every other value is invalid.
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Parse JSON text that must hold an object.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set `key`, keeping its original position if it already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove `key`, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Own keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        record.into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_accepts_only_objects() {
        assert!(Record::from_value(json!({"title": "Toy Story"})).is_some());
        assert!(Record::from_value(json!({})).is_some());
        assert!(Record::from_value(Value::Null).is_none());
        assert!(Record::from_value(json!("not an object")).is_none());
        assert!(Record::from_value(json!(["title"])).is_none());
        assert!(Record::from_value(json!(42)).is_none());
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let mut record = Record::new();
        record.insert("title", "Toy Story");
        record.insert("director", "John Lasseter");
        record.insert("year", 1995);

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["title", "director", "year"]);
    }

    #[test]
    fn test_remove_keeps_order_of_remaining_keys() {
        let mut record =
            Record::from_value(json!({"title": "Up", "director": "Pete Docter", "year": 2009}))
                .unwrap();
        assert_eq!(record.remove("director"), Some(json!("Pete Docter")));
        assert_eq!(record.remove("director"), None);

        let keys: Vec<&str> = record.keys().collect();
        assert_eq!(keys, vec!["title", "year"]);
    }

    #[test]
    fn test_parse() {
        let record = Record::parse(r#"{"title": "Heat", "year": 1995}"#).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("year"), Some(&json!(1995)));

        assert!(Record::parse("[1, 2]").is_err());
        assert!(Record::parse("null").is_err());
        assert!(Record::parse("{").is_err());
    }
}
