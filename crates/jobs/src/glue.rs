// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job-submission shape with renamed and relocated fields.
//!
//! Top-level settings keep their meaning under submission names
//! (`name` becomes `job_name`, `jobRunSettings.iamRole` becomes
//! `iam_role_arn`). Source and sink details are gathered into
//! `job_default_arguments`, which is resolved against the whole document so
//! it can pull from both `source` and `sink`.

use crate::config::{Tags, TAGS};
use crate::shape::JobShape;
use jobmap_schema::{FieldSpec, Literal, Presence, SchemaTable, SpecType};
use serde::{Deserialize, Serialize};

/// Concurrent runs allowed when the document does not say
pub const DEFAULT_MAX_CONCURRENT_RUNS: i64 = 1;

pub static JOB_DEFAULT_ARGUMENTS: SchemaTable = SchemaTable {
    name: "job_default_arguments",
    fields: &[
        FieldSpec::sourced(
            "source_database",
            SpecType::Str,
            &["source", "dataCatalog", "database"],
        ),
        FieldSpec::sourced(
            "source_table_name",
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
    ],
};

pub static GLUE_JOB: SchemaTable = SchemaTable {
    name: "glue_job",
    fields: &[
        FieldSpec::required("resource", SpecType::Str),
        FieldSpec::sourced("job_name", SpecType::Str, &["name"]),
        FieldSpec::sourced("job_description", SpecType::Str, &["description"]),
        FieldSpec::required("script", SpecType::Str),
        FieldSpec::sourced("iam_role_arn", SpecType::Str, &["jobRunSettings", "iamRole"]),
        FieldSpec::sourced("connection", SpecType::Str, &["source", "connection"]),
        FieldSpec::sourced("tags_author", SpecType::Nested(&TAGS), &["tags"]),
        FieldSpec::required("max_concurrent_runs", SpecType::Int)
            .with_presence(Presence::Default(Literal::Int(DEFAULT_MAX_CONCURRENT_RUNS))),
        FieldSpec::required(
            "job_default_arguments",
            SpecType::Nested(&JOB_DEFAULT_ARGUMENTS),
        )
        .from_document(),
    ],
};

/// Arguments passed to every run of the job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDefaultArguments {
    pub source_database: String,
    pub source_table_name: String,
    pub source_increment_fields: Vec<String>,
    pub source_increment_sort_order: String,
    pub sink_type: String,
    pub sink_s3_path: String,
}

impl JobShape for JobDefaultArguments {
    fn table() -> &'static SchemaTable {
        &JOB_DEFAULT_ARGUMENTS
    }
}

/// A job as handed to the submission tooling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlueJob {
    pub resource: String,
    pub job_name: String,
    pub job_description: String,
    pub script: String,
    pub iam_role_arn: String,
    pub connection: String,
    /// All tags, despite the name
    pub tags_author: Tags,
    pub max_concurrent_runs: i64,
    pub job_default_arguments: JobDefaultArguments,
}

impl JobShape for GlueJob {
    fn table() -> &'static SchemaTable {
        &GLUE_JOB
    }
}

#[cfg(test)]
#[path = "glue_tests.rs"]
mod tests;
