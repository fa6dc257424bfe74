//! Glue job shape specs.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn glue_job_serializes_renamed_fields() {
    let job: GlueJob = parse_job(JOB_TOML, DocumentFormat::Toml).unwrap();

    assert_eq!(
        serde_json::to_value(&job).unwrap(),
        json!({
            "resource": "glue",
            "job_name": "orders-nightly",
            "job_description": "Incremental export of the orders table",
            "script": "s3://scripts/orders_export.py",
            "iam_role_arn": "arn:aws:iam::123456789012:role/glue-orders",
            "connection": "orders-db",
            "tags_author": {"author": "alice", "system": "etl"},
            "max_concurrent_runs": 1,
            "job_default_arguments": {
                "source_database": "sales",
                "source_table_name": "orders",
                "source_increment_fields": ["id", "updated_at"],
                "source_increment_sort_order": "asc",
                "sink_type": "s3",
                "sink_s3_path": "s3://warehouse/orders/",
            },
        })
    );
}

#[test]
fn glue_record_keeps_declaration_order() {
    let doc = parse_document(JOB_JSON, DocumentFormat::Json).unwrap();
    let record = map_document(&doc, &GlueJob::schema().unwrap()).unwrap();

    let names: Vec<&str> = record.names().collect();
    assert_eq!(
        names,
        vec![
            "resource",
            "job_name",
            "job_description",
            "script",
            "iam_role_arn",
            "connection",
            "tags_author",
            "max_concurrent_runs",
            "job_default_arguments",
        ]
    );
}
