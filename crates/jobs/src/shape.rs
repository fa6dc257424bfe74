// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed output shapes

use jobmap_schema::{map_document, Document, MapError, Schema, SchemaDefinitionError, SchemaTable};
use serde::de::DeserializeOwned;

/// A typed struct paired with the schema table it is decoded from
pub trait JobShape: DeserializeOwned {
    /// Static declaration of the shape's fields
    fn table() -> &'static SchemaTable;

    /// Compile the shape's schema
    fn schema() -> Result<Schema, SchemaDefinitionError> {
        Schema::from_table(Self::table())
    }

    /// Map a document into this shape
    fn from_document(document: &Document) -> Result<Self, MapError> {
        let schema = Self::schema()?;
        let record = map_document(document, &schema)?;
        Ok(record.decode()?)
    }
}
