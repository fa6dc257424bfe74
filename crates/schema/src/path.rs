// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dotted source paths into a document

use std::fmt;
use thiserror::Error;

/// Errors that can occur while parsing a source path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path has no segments")]
    Empty,
    #[error("empty segment in path '{0}'")]
    EmptySegment(String),
}

/// A sequence of keys locating a value inside a nested document.
///
/// Written as `tags.author` or `source.dataCatalog.database`. Every segment
/// is non-empty; a path always has at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourcePath {
    segments: Vec<String>,
}

impl SourcePath {
    /// Parse a dotted path
    pub fn parse(dotted: &str) -> Result<Self, PathError> {
        if dotted.is_empty() {
            return Err(PathError::Empty);
        }
        Self::from_segments(dotted.split('.'))
    }

    /// Build a path from already-split segments
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        if segments.iter().any(|s| s.is_empty()) {
            return Err(PathError::EmptySegment(segments.join(".")));
        }
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments (always at least one)
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a parsed path
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The first segment, i.e. the top-level key the path starts from
    pub fn root(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

impl std::str::FromStr for SourcePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
