// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Schema declarations.
//!
//! Output shapes are declared as static tables of [`FieldSpec`]s, one row per
//! output field: its name, its type, where its value comes from, and whether
//! it is required. A table is compiled into a [`Schema`] once, which checks
//! every declaration up front so that mapping never sees a malformed path.
//!
//! ```ignore
//! static TAGS: SchemaTable = SchemaTable {
//!     name: "tags",
//!     fields: &[
//!         FieldSpec::required("author", SpecType::Str),
//!         FieldSpec::required("system", SpecType::Str),
//!     ],
//! };
//! let schema = Schema::from_table(&TAGS)?;
//! ```

use crate::path::{PathError, SourcePath};
use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

// Field names must be identifiers - this is a constant valid pattern
#[allow(clippy::expect_used)]
static FIELD_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("constant regex pattern is valid")
});

/// A schema declaration that can never be used to map a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{schema}: {kind}")]
pub struct SchemaDefinitionError {
    /// Schema containing the bad declaration
    pub schema: String,
    pub kind: DefinitionErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionErrorKind {
    #[error("invalid source path for field '{field}': path has no segments")]
    EmptyPath { field: String },
    #[error("invalid source path for field '{field}': empty segment in '{path}'")]
    EmptySegment { field: String, path: String },
    #[error("invalid field name '{field}'")]
    InvalidFieldName { field: String },
    #[error("duplicate field '{field}'")]
    DuplicateField { field: String },
    #[error("field '{field}' is sourced from the whole document but is not a nested schema")]
    DocumentSourceNotNested { field: String },
}

/// A default value declared for an optional field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
}

/// Whether a field must be present in the document
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Presence {
    #[default]
    Required,
    /// Missing values resolve to absence
    Optional,
    /// Missing same-named keys take the literal; missing paths resolve to absence
    Default(Literal),
}

impl Presence {
    pub fn is_required(&self) -> bool {
        matches!(self, Presence::Required)
    }
}

// ============================================================================
// Static tables
// ============================================================================

/// A named, statically declared set of fields
#[derive(Debug)]
pub struct SchemaTable {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

/// Declared type of a field in a static table
#[derive(Debug, Clone, Copy)]
pub enum SpecType {
    Str,
    Int,
    Float,
    Bool,
    StrList,
    Nested(&'static SchemaTable),
}

/// Where a field in a static table takes its value from
#[derive(Debug, Clone, Copy)]
pub enum SpecSource {
    /// Top-level key with the same name as the field
    Name,
    /// Keys walked from the root of the document
    Path(&'static [&'static str]),
    /// The whole document the schema is resolved against
    Document,
}

/// One row of a static schema table
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: SpecType,
    pub source: SpecSource,
    pub presence: Presence,
}

impl FieldSpec {
    /// A required field read from the same-named top-level key
    pub const fn required(name: &'static str, ty: SpecType) -> Self {
        Self {
            name,
            ty,
            source: SpecSource::Name,
            presence: Presence::Required,
        }
    }

    /// A required field read from a path
    pub const fn sourced(
        name: &'static str,
        ty: SpecType,
        path: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            ty,
            source: SpecSource::Path(path),
            presence: Presence::Required,
        }
    }

    pub const fn with_presence(self, presence: Presence) -> Self {
        Self { presence, ..self }
    }

    pub const fn from_document(self) -> Self {
        Self {
            source: SpecSource::Document,
            ..self
        }
    }
}

// ============================================================================
// Compiled schemas
// ============================================================================

/// Declared type of a compiled field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Str,
    Int,
    Float,
    Bool,
    StrList,
    Nested(Box<Schema>),
}

impl FieldType {
    /// Human-readable type name, used in error messages
    pub fn describe(&self) -> String {
        match self {
            FieldType::Str => "string".to_string(),
            FieldType::Int => "integer".to_string(),
            FieldType::Float => "float".to_string(),
            FieldType::Bool => "boolean".to_string(),
            FieldType::StrList => "list of strings".to_string(),
            FieldType::Nested(schema) => format!("mapping ({})", schema.name()),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Where a compiled field takes its value from
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSource {
    Name,
    Path(SourcePath),
    Document,
}

/// A validated field declaration
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaField {
    pub name: String,
    pub ty: FieldType,
    pub source: FieldSource,
    pub presence: Presence,
}

impl SchemaField {
    /// The key or path this field reads, as written in error messages
    pub fn source_display(&self) -> String {
        match &self.source {
            FieldSource::Name => self.name.clone(),
            FieldSource::Path(path) => path.to_string(),
            FieldSource::Document => "<document>".to_string(),
        }
    }
}

/// An ordered, validated set of field declarations
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    name: String,
    fields: Vec<SchemaField>,
}

impl Schema {
    /// Start declaring a schema at runtime
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Compile a static table (and every nested table it references)
    pub fn from_table(table: &SchemaTable) -> Result<Self, SchemaDefinitionError> {
        let mut builder = Schema::builder(table.name);
        for spec in table.fields {
            let ty = match spec.ty {
                SpecType::Str => FieldType::Str,
                SpecType::Int => FieldType::Int,
                SpecType::Float => FieldType::Float,
                SpecType::Bool => FieldType::Bool,
                SpecType::StrList => FieldType::StrList,
                SpecType::Nested(nested) => {
                    FieldType::Nested(Box::new(Schema::from_table(nested)?))
                }
            };
            let source = match spec.source {
                SpecSource::Name => DeclSource::Name,
                SpecSource::Path(segments) => DeclSource::Segments(segments.to_vec()),
                SpecSource::Document => DeclSource::Document,
            };
            builder = builder.field(FieldDecl {
                name: spec.name.to_string(),
                ty,
                source,
                presence: spec.presence,
            });
        }
        builder.build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[SchemaField] {
        &self.fields
    }

    /// Get a field declaration by name
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for runtime schema declarations
#[derive(Debug, Clone)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldDecl>,
}

impl SchemaBuilder {
    pub fn field(mut self, decl: FieldDecl) -> Self {
        self.fields.push(decl);
        self
    }

    /// Validate every declaration and produce the schema
    pub fn build(self) -> Result<Schema, SchemaDefinitionError> {
        let schema_name = self.name;
        let fail = |kind| SchemaDefinitionError {
            schema: schema_name.clone(),
            kind,
        };

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(self.fields.len());
        for decl in self.fields {
            if !FIELD_NAME_PATTERN.is_match(&decl.name) {
                return Err(fail(DefinitionErrorKind::InvalidFieldName { field: decl.name }));
            }
            if !seen.insert(decl.name.clone()) {
                return Err(fail(DefinitionErrorKind::DuplicateField { field: decl.name }));
            }

            let path_result = match decl.source {
                DeclSource::Name => Ok(FieldSource::Name),
                DeclSource::Document => {
                    if !matches!(decl.ty, FieldType::Nested(_)) {
                        return Err(fail(DefinitionErrorKind::DocumentSourceNotNested {
                            field: decl.name,
                        }));
                    }
                    Ok(FieldSource::Document)
                }
                DeclSource::Dotted(dotted) => SourcePath::parse(&dotted).map(FieldSource::Path),
                DeclSource::Segments(segments) => {
                    SourcePath::from_segments(segments).map(FieldSource::Path)
                }
            };
            let source = path_result.map_err(|e| match e {
                PathError::Empty => fail(DefinitionErrorKind::EmptyPath {
                    field: decl.name.clone(),
                }),
                PathError::EmptySegment(path) => fail(DefinitionErrorKind::EmptySegment {
                    field: decl.name.clone(),
                    path,
                }),
            })?;

            fields.push(SchemaField {
                name: decl.name,
                ty: decl.ty,
                source,
                presence: decl.presence,
            });
        }

        tracing::debug!(schema = %schema_name, fields = fields.len(), "schema compiled");
        Ok(Schema {
            name: schema_name,
            fields,
        })
    }
}

#[derive(Debug, Clone)]
enum DeclSource {
    Name,
    Dotted(String),
    Segments(Vec<&'static str>),
    Document,
}

/// A single field declaration, checked when the schema is built
#[derive(Debug, Clone)]
pub struct FieldDecl {
    name: String,
    ty: FieldType,
    source: DeclSource,
    presence: Presence,
}

impl FieldDecl {
    /// A required field read from the same-named top-level key
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            source: DeclSource::Name,
            presence: Presence::Required,
        }
    }

    /// Read the value from a dotted path instead of the same-named key
    pub fn source(mut self, dotted: impl Into<String>) -> Self {
        self.source = DeclSource::Dotted(dotted.into());
        self
    }

    /// Resolve a nested schema against the whole current document
    pub fn from_document(mut self) -> Self {
        self.source = DeclSource::Document;
        self
    }

    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn default_value(mut self, value: Literal) -> Self {
        self.presence = Presence::Default(value);
        self
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
