//! Flat job shape specs.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn flat_job_serializes_every_field() {
    let job = FlatJob::from_document(&complete_example_document()).unwrap();

    assert_eq!(
        serde_json::to_value(&job).unwrap(),
        json!({
            "version": 1.0,
            "resource": "glue",
            "name": "etl-job",
            "description": "example",
            "script": "main.py",
            "tags_author": "alice",
            "tags_system": "etl",
            "source_type": "jdbc",
            "source_connection": "db1",
            "source_data_catalog_database": "d",
            "source_data_catalog_table": "t",
            "source_increment_fields": ["id"],
            "source_increment_sort_order": "asc",
            "sink_type": "s3",
            "sink_s3_path": "s3://x",
            "job_run_settings_iam_role": "arn:aws:iam::role",
        })
    );
}

#[test]
fn flat_job_from_fixture_matches_job_config() {
    let config: JobConfig = parse_job(JOB_YAML, DocumentFormat::Yaml).unwrap();
    let flat: FlatJob = parse_job(JOB_YAML, DocumentFormat::Yaml).unwrap();

    assert_eq!(flat.name, config.name);
    assert_eq!(flat.tags_author, config.tags.author);
    assert_eq!(flat.source_data_catalog_table, config.source.data_catalog.table);
    assert_eq!(flat.source_increment_fields, config.source.increment_fields);
    assert_eq!(flat.sink_s3_path, config.sink.s3_path);
    assert_eq!(flat.job_run_settings_iam_role, config.job_run_settings.iam_role);
}
