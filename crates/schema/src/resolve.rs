// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Path resolution and type checking.
//!
//! Mapping walks each declared field's source through the document, applies
//! the field's presence policy, then checks the resolved value against the
//! declared type. Nested schemas are resolved the same way against the
//! sub-mapping they point at. Resolution never mutates the document and
//! returns either a complete record or the first error found.

use crate::document::{value_kind, Document};
use crate::path::SourcePath;
use crate::record::{FlatRecord, RecordValue};
use crate::schema::{FieldSource, FieldType, Presence, Schema, SchemaDefinitionError, SchemaField};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur while mapping a document
#[derive(Debug, Error)]
pub enum MapError {
    #[error("schema definition error: {0}")]
    SchemaDefinition(#[from] SchemaDefinitionError),

    /// A required value is not in the document
    #[error("{schema}: value for '{segment}' missing, path: '{path}' (field '{field}')")]
    MissingField {
        schema: String,
        field: String,
        segment: String,
        path: String,
    },

    /// A resolved value does not match the declared type
    #[error("{schema}: field '{field}' expected {expected}, found {actual}")]
    TypeValidation {
        schema: String,
        field: String,
        expected: String,
        actual: String,
    },

    /// A validated record could not be decoded into the requested type
    #[error("record decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MapError {
    /// Qualified name of the field the error is about, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            MapError::MissingField { field, .. } | MapError::TypeValidation { field, .. } => {
                Some(field)
            }
            MapError::SchemaDefinition(_) | MapError::Decode(_) => None,
        }
    }
}

/// Map a document through a schema into a flat record
pub fn map_document(document: &Document, schema: &Schema) -> Result<FlatRecord, MapError> {
    let record = resolve_schema(document.as_map(), schema, Scope::default())?;
    tracing::debug!(schema = schema.name(), fields = record.len(), "record mapped");
    Ok(record)
}

/// Outcome of walking a source through a mapping
enum Lookup<'a> {
    Found(&'a Value),
    /// The first segment that was not a key of the current mapping
    Missing(&'a str),
}

/// Where a (possibly nested) schema sits relative to the record and the document
#[derive(Debug, Clone, Copy, Default)]
struct Scope<'a> {
    /// Qualified name of the enclosing field
    field: Option<&'a str>,
    /// Document path of the mapping being resolved
    path: Option<&'a str>,
}

fn qualify(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}.{}", prefix, name),
        None => name.to_string(),
    }
}

fn resolve_schema(
    root: &Map<String, Value>,
    schema: &Schema,
    scope: Scope<'_>,
) -> Result<FlatRecord, MapError> {
    let mut record = FlatRecord::with_capacity(schema.len());

    for field in schema.fields() {
        let qualified = qualify(scope.field, &field.name);

        let value = match &field.source {
            FieldSource::Document => match &field.ty {
                FieldType::Nested(nested) => {
                    let inner = Scope {
                        field: Some(&qualified),
                        path: scope.path,
                    };
                    RecordValue::Record(resolve_schema(root, nested, inner)?)
                }
                // Rejected when the schema is built
                other => {
                    return Err(MapError::TypeValidation {
                        schema: schema.name().to_string(),
                        field: qualified,
                        expected: other.describe(),
                        actual: "mapping".to_string(),
                    })
                }
            },
            FieldSource::Name => {
                let site = Site {
                    schema,
                    field,
                    qualified: &qualified,
                    path: &qualify(scope.path, &field.name),
                };
                match root.get(&field.name) {
                    Some(value) => resolve_present(value, &site)?,
                    None => resolve_missing(&field.name, &site)?,
                }
            }
            FieldSource::Path(path) => {
                let site = Site {
                    schema,
                    field,
                    qualified: &qualified,
                    path: &qualify(scope.path, &path.to_string()),
                };
                match walk(root, path) {
                    Lookup::Found(value) => resolve_present(value, &site)?,
                    Lookup::Missing(segment) => resolve_missing(segment, &site)?,
                }
            }
        };

        tracing::trace!(schema = schema.name(), field = %qualified, "field resolved");
        record.push(field.name.clone(), value);
    }

    Ok(record)
}

/// A field being resolved, with its names for error reporting
struct Site<'a> {
    schema: &'a Schema,
    field: &'a SchemaField,
    /// Field name qualified by its enclosing fields
    qualified: &'a str,
    /// Source path from the document root
    path: &'a str,
}

/// Follow a path from the root; a non-mapping along the way counts as missing
fn walk<'a>(root: &'a Map<String, Value>, path: &'a SourcePath) -> Lookup<'a> {
    let mut pointer = root;
    let mut segments = path.segments().iter().peekable();

    while let Some(segment) = segments.next() {
        let Some(value) = pointer.get(segment) else {
            return Lookup::Missing(segment);
        };
        if segments.peek().is_none() {
            return Lookup::Found(value);
        }
        match value {
            Value::Object(next) => pointer = next,
            _ => {
                // Scalars have no keys; report the segment we could not enter
                let next = segments.next().map_or(segment.as_str(), String::as_str);
                return Lookup::Missing(next);
            }
        }
    }

    // SourcePath always has at least one segment
    Lookup::Missing(path.root())
}

fn resolve_missing(segment: &str, site: &Site<'_>) -> Result<RecordValue, MapError> {
    let field = site.field;
    match (&field.presence, &field.source) {
        (Presence::Required, _) => Err(MapError::MissingField {
            schema: site.schema.name().to_string(),
            field: site.qualified.to_string(),
            segment: segment.to_string(),
            path: site.path.to_string(),
        }),
        (Presence::Default(literal), FieldSource::Name) => Ok(RecordValue::from(*literal)),
        (Presence::Optional, _) | (Presence::Default(_), _) => {
            tracing::debug!(
                schema = site.schema.name(),
                field = %site.qualified,
                segment,
                "optional field absent"
            );
            Ok(RecordValue::Null)
        }
    }
}

fn resolve_present(value: &Value, site: &Site<'_>) -> Result<RecordValue, MapError> {
    let field = site.field;
    if value.is_null() {
        match (&field.presence, &field.source) {
            // An explicit null on a defaulted key reads as "not set"
            (Presence::Default(literal), FieldSource::Name) => {
                return Ok(RecordValue::from(*literal));
            }
            (Presence::Optional, _) | (Presence::Default(_), _) => return Ok(RecordValue::Null),
            (Presence::Required, _) => {}
        }
    }

    let mismatch_with = |actual: String| MapError::TypeValidation {
        schema: site.schema.name().to_string(),
        field: site.qualified.to_string(),
        expected: field.ty.describe(),
        actual,
    };
    let mismatch = || mismatch_with(value_kind(value).to_string());

    match (&field.ty, value) {
        (FieldType::Str, Value::String(s)) => Ok(RecordValue::Str(s.clone())),
        (FieldType::Int, Value::Number(n)) => match n.as_i64() {
            Some(n) => Ok(RecordValue::Int(n)),
            None if n.is_u64() => Err(mismatch_with("integer out of range".to_string())),
            None => Err(mismatch()),
        },
        (FieldType::Float, Value::Number(n)) => {
            n.as_f64().map(RecordValue::Float).ok_or_else(mismatch)
        }
        (FieldType::Bool, Value::Bool(b)) => Ok(RecordValue::Bool(*b)),
        (FieldType::StrList, Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(String::from))
            .collect::<Option<Vec<_>>>()
            .map(RecordValue::StrList)
            .ok_or_else(|| mismatch_with(describe_list(items))),
        (FieldType::Nested(nested), Value::Object(map)) => {
            let inner = Scope {
                field: Some(site.qualified),
                path: Some(site.path),
            };
            resolve_schema(map, nested, inner).map(RecordValue::Record)
        }
        _ => Err(mismatch()),
    }
}

/// Name the first non-string element of a list
fn describe_list(items: &[Value]) -> String {
    match items.iter().position(|item| !item.is_string()) {
        Some(index) => format!("list with {} at index {}", value_kind(&items[index]), index),
        None => "list".to_string(),
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
