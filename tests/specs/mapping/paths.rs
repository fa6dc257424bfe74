//! Path resolution specs.
//!
//! Paths walk nested mappings from the root; pass-through fields match
//! top-level keys exactly.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn example_document_maps_through_paths() {
    let schema = Schema::builder("example")
        .field(FieldDecl::new("tags_author", FieldType::Str).source("tags.author"))
        .field(
            FieldDecl::new("source_data_catalog_database", FieldType::Str)
                .source("source.dataCatalog.database"),
        )
        .field(
            FieldDecl::new("job_run_settings_iam_role", FieldType::Str)
                .source("jobRunSettings.iamRole"),
        )
        .build()
        .unwrap();

    let record = map_document(&example_document(), &schema).unwrap();
    assert_eq!(
        record.to_json(),
        json!({
            "tags_author": "alice",
            "source_data_catalog_database": "d",
            "job_run_settings_iam_role": "arn:aws:iam::role",
        })
    );
}

#[test]
fn optional_fields_resolve_to_null() {
    let schema = Schema::builder("optional")
        .field(FieldDecl::new("tags_owner", FieldType::Str).source("tags.owner").optional())
        .field(FieldDecl::new("retries", FieldType::Int).optional())
        .build()
        .unwrap();

    let record = map_document(&example_document(), &schema).unwrap();
    assert_eq!(record.to_json(), json!({"tags_owner": null, "retries": null}));
}

#[test]
fn pass_through_is_case_sensitive() {
    let schema = Schema::builder("names")
        .field(FieldDecl::new("jobrunsettings", FieldType::Str).optional())
        .build()
        .unwrap();

    let record = map_document(&example_document(), &schema).unwrap();
    assert!(record.get("jobrunsettings").unwrap().is_null());
}

#[test]
fn same_document_from_every_format() {
    let schema = FlatJob::schema().unwrap();
    let from_json = map_document(&parse_document(JOB_JSON, DocumentFormat::Json).unwrap(), &schema)
        .unwrap()
        .to_json();

    for (content, format) in [(JOB_YAML, DocumentFormat::Yaml), (JOB_TOML, DocumentFormat::Toml)] {
        let doc = parse_document(content, format).unwrap();
        assert_eq!(map_document(&doc, &schema).unwrap().to_json(), from_json);
    }
}
