// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Declarative schemas and path-based field remapping.
//!
//! This crate provides:
//!
//! - **document**: raw nested documents parsed from JSON, TOML, or YAML
//! - **path**: dotted source paths into a document
//! - **schema**: static field tables and runtime schema builders
//! - **resolve**: path resolution and type checking
//! - **record**: the typed, ordered output of mapping
//!
//! # Architecture
//!
//! ```text
//! text → parse_document → Document → map_document(Schema) → FlatRecord → decode → T
//! ```

mod document;
mod path;
mod record;
mod resolve;
mod schema;

pub use document::{parse_document, value_kind, Document, DocumentError, DocumentFormat};
pub use path::{PathError, SourcePath};
pub use record::{FlatRecord, RecordValue};
pub use resolve::{map_document, MapError};
pub use schema::{
    DefinitionErrorKind, FieldDecl, FieldSource, FieldSpec, FieldType, Literal, Presence, Schema,
    SchemaBuilder, SchemaDefinitionError, SchemaField, SchemaTable, SpecSource, SpecType,
};
