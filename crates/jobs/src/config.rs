// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job configuration mirroring the document one-to-one

use crate::shape::JobShape;
use jobmap_schema::{FieldSpec, SchemaTable, SpecType};
use serde::{Deserialize, Serialize};

pub static TAGS: SchemaTable = SchemaTable {
    name: "tags",
    fields: &[
        FieldSpec::required("author", SpecType::Str),
        FieldSpec::required("system", SpecType::Str),
    ],
};

pub static DATA_CATALOG: SchemaTable = SchemaTable {
    name: "data_catalog",
    fields: &[
        FieldSpec::required("database", SpecType::Str),
        FieldSpec::required("table", SpecType::Str),
    ],
};

pub static SOURCE: SchemaTable = SchemaTable {
    name: "source",
    fields: &[
        FieldSpec::required("type", SpecType::Str),
        FieldSpec::required("connection", SpecType::Str),
        FieldSpec::required("dataCatalog", SpecType::Nested(&DATA_CATALOG)),
        FieldSpec::required("incrementFields", SpecType::StrList),
        FieldSpec::required("incrementSortOrder", SpecType::Str),
    ],
};

pub static SINK: SchemaTable = SchemaTable {
    name: "sink",
    fields: &[
        FieldSpec::required("type", SpecType::Str),
        FieldSpec::required("s3Path", SpecType::Str),
    ],
};

pub static JOB_RUN_SETTINGS: SchemaTable = SchemaTable {
    name: "job_run_settings",
    fields: &[FieldSpec::required("iamRole", SpecType::Str)],
};

pub static JOB_CONFIG: SchemaTable = SchemaTable {
    name: "job_config",
    fields: &[
        FieldSpec::required("version", SpecType::Float),
        FieldSpec::required("resource", SpecType::Str),
        FieldSpec::required("name", SpecType::Str),
        FieldSpec::required("description", SpecType::Str),
        FieldSpec::required("script", SpecType::Str),
        FieldSpec::required("tags", SpecType::Nested(&TAGS)),
        FieldSpec::required("source", SpecType::Nested(&SOURCE)),
        FieldSpec::required("sink", SpecType::Nested(&SINK)),
        FieldSpec::required("jobRunSettings", SpecType::Nested(&JOB_RUN_SETTINGS)),
    ],
};

/// Ownership tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tags {
    pub author: String,
    pub system: String,
}

/// Catalog location of the source table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataCatalog {
    pub database: String,
    pub table: String,
}

/// Where the job reads from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: String,
    pub connection: String,
    pub data_catalog: DataCatalog,
    /// Columns used to detect new rows
    pub increment_fields: Vec<String>,
    pub increment_sort_order: String,
}

/// Where the job writes to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sink {
    #[serde(rename = "type")]
    pub kind: String,
    pub s3_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRunSettings {
    pub iam_role: String,
}

/// A job description, field for field as written in the document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    pub version: f64,
    pub resource: String,
    pub name: String,
    pub description: String,
    pub script: String,
    pub tags: Tags,
    pub source: Source,
    pub sink: Sink,
    pub job_run_settings: JobRunSettings,
}

impl JobShape for JobConfig {
    fn table() -> &'static SchemaTable {
        &JOB_CONFIG
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
