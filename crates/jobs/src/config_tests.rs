// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jobmap_schema::{parse_document, DocumentFormat, MapError};

const JOB_YAML: &str = include_str!("../../../tests/fixtures/job.yaml");

#[test]
fn job_config_mirrors_document() {
    let doc = parse_document(JOB_YAML, DocumentFormat::Yaml).unwrap();
    let job = JobConfig::from_document(&doc).unwrap();

    assert_eq!(job.version, 1.0);
    assert_eq!(job.resource, "glue");
    assert_eq!(job.name, "orders-nightly");
    assert_eq!(
        job.tags,
        Tags {
            author: "alice".to_string(),
            system: "etl".to_string(),
        }
    );
    assert_eq!(job.source.kind, "jdbc");
    assert_eq!(job.source.connection, "orders-db");
    assert_eq!(job.source.data_catalog.database, "sales");
    assert_eq!(job.source.data_catalog.table, "orders");
    assert_eq!(job.source.increment_fields, vec!["id", "updated_at"]);
    assert_eq!(job.source.increment_sort_order, "asc");
    assert_eq!(job.sink.kind, "s3");
    assert_eq!(job.sink.s3_path, "s3://warehouse/orders/");
    assert_eq!(
        job.job_run_settings.iam_role,
        "arn:aws:iam::123456789012:role/glue-orders"
    );
}

#[test]
fn job_config_schema_uses_document_names() {
    let schema = JobConfig::schema().unwrap();
    assert_eq!(schema.name(), "job_config");
    assert!(schema.field("jobRunSettings").is_some());
    assert!(schema.field("job_run_settings").is_none());
}

#[test]
fn missing_nested_key_is_reported_with_qualified_name() {
    let yaml = JOB_YAML.replace("    table: orders\n", "");
    let doc = parse_document(&yaml, DocumentFormat::Yaml).unwrap();
    let err = JobConfig::from_document(&doc).unwrap_err();

    assert_eq!(err.field(), Some("source.dataCatalog.table"));
    assert!(matches!(
        err,
        MapError::MissingField { ref schema, ref path, .. }
            if schema == "data_catalog" && path == "source.dataCatalog.table"
    ));
}

#[test]
fn serializes_with_document_names() {
    let doc = parse_document(JOB_YAML, DocumentFormat::Yaml).unwrap();
    let job = JobConfig::from_document(&doc).unwrap();
    let value = serde_json::to_value(&job).unwrap();

    assert_eq!(value["source"]["dataCatalog"]["database"], "sales");
    assert_eq!(value["sink"]["type"], "s3");
    assert_eq!(value["jobRunSettings"]["iamRole"], job.job_run_settings.iam_role);
}
