// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Job description shapes

mod config;
mod flat;
mod glue;
mod parser;
mod shape;

pub use config::{
    DataCatalog, JobConfig, JobRunSettings, Sink, Source, Tags, DATA_CATALOG, JOB_CONFIG,
    JOB_RUN_SETTINGS, SINK, SOURCE, TAGS,
};
pub use flat::{FlatJob, FLAT_JOB};
pub use glue::{
    GlueJob, JobDefaultArguments, DEFAULT_MAX_CONCURRENT_RUNS, GLUE_JOB, JOB_DEFAULT_ARGUMENTS,
};
pub use parser::{map_job, parse_job, ParseError};
pub use shape::JobShape;

use jobmap_schema::{Schema, SchemaDefinitionError, SchemaTable};

/// Every shape table this crate declares
pub static ALL_TABLES: &[&SchemaTable] =
    &[&JOB_CONFIG, &FLAT_JOB, &GLUE_JOB, &JOB_DEFAULT_ARGUMENTS];

/// Compile every declared table, failing on the first bad declaration
pub fn validate_tables() -> Result<Vec<Schema>, SchemaDefinitionError> {
    ALL_TABLES.iter().map(|table| Schema::from_table(table)).collect()
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
