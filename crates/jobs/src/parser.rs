// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job document parsing

use crate::shape::JobShape;
use jobmap_schema::{
    map_document, parse_document, DocumentError, DocumentFormat, FlatRecord, MapError, Schema,
};
use thiserror::Error;

/// Errors that can occur while parsing a job description
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0}")]
    Document(#[from] DocumentError),
    #[error("{0}")]
    Map(#[from] MapError),
}

/// Parse job text and map it into a typed shape
pub fn parse_job<S: JobShape>(content: &str, format: DocumentFormat) -> Result<S, ParseError> {
    let document = parse_document(content, format)?;
    let shape = S::from_document(&document)?;
    tracing::debug!(schema = S::table().name, "job parsed");
    Ok(shape)
}

/// Parse job text and map it through an arbitrary schema
pub fn map_job(
    content: &str,
    format: DocumentFormat,
    schema: &Schema,
) -> Result<FlatRecord, ParseError> {
    let document = parse_document(content, format)?;
    Ok(map_document(&document, schema)?)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
