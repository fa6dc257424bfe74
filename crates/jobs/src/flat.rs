// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fully flattened job shape.
//!
//! Every nested value of the job document becomes a top-level field named
//! after its path (`tags.author` becomes `tags_author`).

use crate::shape::JobShape;
use jobmap_schema::{FieldSpec, SchemaTable, SpecType};
use serde::{Deserialize, Serialize};

pub static FLAT_JOB: SchemaTable = SchemaTable {
    name: "flat_job",
    fields: &[
        FieldSpec::required("version", SpecType::Float),
        FieldSpec::required("resource", SpecType::Str),
        FieldSpec::required("name", SpecType::Str),
        FieldSpec::required("description", SpecType::Str),
        FieldSpec::required("script", SpecType::Str),
        FieldSpec::sourced("tags_author", SpecType::Str, &["tags", "author"]),
        FieldSpec::sourced("tags_system", SpecType::Str, &["tags", "system"]),
        FieldSpec::sourced("source_type", SpecType::Str, &["source", "type"]),
        FieldSpec::sourced("source_connection", SpecType::Str, &["source", "connection"]),
        FieldSpec::sourced(
            "source_data_catalog_database",
            SpecType::Str,
            &["source", "dataCatalog", "database"],
        ),
        FieldSpec::sourced(
            "source_data_catalog_table",
            SpecType::Str,
            &["source", "dataCatalog", "table"],
        ),
        FieldSpec::sourced(
            "source_increment_fields",
            SpecType::StrList,
            &["source", "incrementFields"],
        ),
        FieldSpec::sourced(
            "source_increment_sort_order",
            SpecType::Str,
            &["source", "incrementSortOrder"],
        ),
        FieldSpec::sourced("sink_type", SpecType::Str, &["sink", "type"]),
        FieldSpec::sourced("sink_s3_path", SpecType::Str, &["sink", "s3Path"]),
        FieldSpec::sourced(
            "job_run_settings_iam_role",
            SpecType::Str,
            &["jobRunSettings", "iamRole"],
        ),
    ],
};

/// A job with every nested value lifted to the top level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatJob {
    pub version: f64,
    pub resource: String,
    pub name: String,
    pub description: String,
    pub script: String,
    pub tags_author: String,
    pub tags_system: String,
    pub source_type: String,
    pub source_connection: String,
    pub source_data_catalog_database: String,
    pub source_data_catalog_table: String,
    pub source_increment_fields: Vec<String>,
    pub source_increment_sort_order: String,
    pub sink_type: String,
    pub sink_s3_path: String,
    pub job_run_settings_iam_role: String,
}

impl JobShape for FlatJob {
    fn table() -> &'static SchemaTable {
        &FLAT_JOB
    }
}

#[cfg(test)]
#[path = "flat_tests.rs"]
mod tests;
