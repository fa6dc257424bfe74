// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flat records produced by mapping

use crate::schema::Literal;
use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A type-checked field value
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// An optional field that did not resolve
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    StrList(Vec<String>),
    Record(FlatRecord),
}

impl RecordValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RecordValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RecordValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            RecordValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            RecordValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RecordValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<&[String]> {
        match self {
            RecordValue::StrList(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&FlatRecord> {
        match self {
            RecordValue::Record(record) => Some(record),
            _ => None,
        }
    }

    /// Convert to a JSON value; non-finite floats become null
    pub fn to_json(&self) -> Value {
        match self {
            RecordValue::Null => Value::Null,
            RecordValue::Bool(b) => Value::Bool(*b),
            RecordValue::Int(n) => Value::from(*n),
            RecordValue::Float(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            RecordValue::Str(s) => Value::String(s.clone()),
            RecordValue::StrList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            RecordValue::Record(record) => record.to_json(),
        }
    }
}

impl From<Literal> for RecordValue {
    fn from(literal: Literal) -> Self {
        match literal {
            Literal::Bool(b) => RecordValue::Bool(b),
            Literal::Int(n) => RecordValue::Int(n),
            Literal::Float(n) => RecordValue::Float(n),
            Literal::Str(s) => RecordValue::Str(s.to_string()),
        }
    }
}

impl Serialize for RecordValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordValue::Null => serializer.serialize_none(),
            RecordValue::Bool(b) => serializer.serialize_bool(*b),
            RecordValue::Int(n) => serializer.serialize_i64(*n),
            RecordValue::Float(n) => serializer.serialize_f64(*n),
            RecordValue::Str(s) => serializer.serialize_str(s),
            RecordValue::StrList(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            RecordValue::Record(record) => record.serialize(serializer),
        }
    }
}

/// Validated output of mapping a document through a schema.
///
/// Holds exactly one entry per declared field, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecord {
    fields: Vec<(String, RecordValue)>,
}

impl FlatRecord {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, value: RecordValue) {
        self.fields.push((name.into(), value));
    }

    /// Get a field value by name
    pub fn get(&self, name: &str) -> Option<&RecordValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(RecordValue::as_str)
    }

    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(RecordValue::as_int)
    }

    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(RecordValue::as_float)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(RecordValue::as_bool)
    }

    pub fn get_str_list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(RecordValue::as_str_list)
    }

    pub fn get_record(&self, name: &str) -> Option<&FlatRecord> {
        self.get(name).and_then(RecordValue::as_record)
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(name, value)| (name.clone(), value.to_json()))
                .collect(),
        )
    }

    /// Decode the record into a typed struct
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_json())
    }
}

impl Serialize for FlatRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
