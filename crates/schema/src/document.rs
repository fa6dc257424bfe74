// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw job-description documents.
//!
//! A document is an untyped nested mapping: string keys to scalars, lists,
//! or further mappings. Documents come from JSON, TOML, or YAML text and are
//! held as a JSON object map regardless of where they came from.
//!
//! # Example
//!
//! ```ignore
//! use jobmap_schema::{parse_document, DocumentFormat};
//!
//! let doc = parse_document("name = \"nightly\"", DocumentFormat::Toml)?;
//! assert!(doc.contains_key("name"));
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;
use thiserror::Error;

// A table header or a `key =` line - this is a constant valid pattern
#[allow(clippy::expect_used)]
static TOML_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*(\[\[?[ \t]*[A-Za-z0-9_."'-]+[ \t]*\]\]?|[A-Za-z0-9_."'-]+[ \t]*=)"#)
        .expect("constant regex pattern is valid")
});

/// Errors that can occur while turning text into a document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The root of the document is a scalar or a list
    #[error("document root must be a mapping, found {found}")]
    NotAMapping { found: &'static str },

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// Text format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    /// Detect from content: JSON, then TOML, then YAML
    #[default]
    Auto,
    Json,
    Toml,
    Yaml,
}

impl std::str::FromStr for DocumentFormat {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" | "" => Ok(DocumentFormat::Auto),
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => Err(DocumentError::InvalidFormat(other.to_string())),
        }
    }
}

/// A raw nested input document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Get a top-level value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl TryFrom<Value> for Document {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(DocumentError::NotAMapping {
                found: value_kind(&other),
            }),
        }
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Parse document text in the given format
pub fn parse_document(content: &str, format: DocumentFormat) -> Result<Document, DocumentError> {
    let value = match format {
        DocumentFormat::Auto => return parse_auto(content),
        DocumentFormat::Json => serde_json::from_str::<Value>(content)?,
        DocumentFormat::Toml => toml::from_str::<Value>(content)?,
        DocumentFormat::Yaml => serde_yaml::from_str::<Value>(content)?,
    };
    Document::try_from(value)
}

fn parse_auto(content: &str) -> Result<Document, DocumentError> {
    let trimmed = content.trim_start();
    if trimmed.starts_with('{') {
        return parse_document(content, DocumentFormat::Json);
    }

    // A TOML document read as YAML is a single scalar string, so TOML goes first
    let toml_err = match parse_document(content, DocumentFormat::Toml) {
        Ok(doc) => return Ok(doc),
        Err(err) => err,
    };

    match parse_document(content, DocumentFormat::Yaml) {
        Ok(doc) => Ok(doc),
        // Malformed TOML would otherwise surface as a YAML scalar or YAML syntax error
        Err(_) if TOML_LINE_PATTERN.is_match(content) => {
            tracing::debug!(error = %toml_err, "auto-detected TOML failed to parse");
            Err(toml_err)
        }
        Err(err) => Err(err),
    }
}

/// Human-readable name of a JSON value's kind, used in error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
