//! Mapping error specs.
//!
//! Definition errors, missing values and type mismatches are distinct kinds.

use crate::prelude::*;
use similar_asserts::assert_eq;
use jobmap_schema::{DefinitionErrorKind, SchemaDefinitionError};

#[test]
fn empty_source_path_never_builds() {
    let err: SchemaDefinitionError = Schema::builder("broken")
        .field(FieldDecl::new("tags_author", FieldType::Str).source(""))
        .build()
        .unwrap_err();

    assert_eq!(err.schema, "broken");
    assert_eq!(
        err.kind,
        DefinitionErrorKind::EmptyPath {
            field: "tags_author".to_string()
        }
    );
}

#[test]
fn missing_required_path_names_segment_and_path() {
    let mut map = complete_example_document().into_map();
    map.remove("jobRunSettings");

    let err = FlatJob::from_document(&Document::new(map)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "flat_job: value for 'jobRunSettings' missing, \
         path: 'jobRunSettings.iamRole' (field 'job_run_settings_iam_role')"
    );
}

#[test]
fn type_mismatch_names_expected_and_actual() {
    let mut map = complete_example_document().into_map();
    map.insert("source".to_string(), json!({
        "type": "jdbc",
        "connection": "db1",
        "dataCatalog": {"database": "d", "table": "t"},
        "incrementFields": "id",
        "incrementSortOrder": "asc"
    }));

    let err = FlatJob::from_document(&Document::new(map)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "flat_job: field 'source_increment_fields' expected list of strings, found string"
    );
}

#[test]
fn parse_errors_separate_text_from_mapping() {
    let bad_text: Result<FlatJob, ParseError> = parse_job("version = ", DocumentFormat::Toml);
    assert!(matches!(bad_text, Err(ParseError::Document(_))));

    let bad_shape: Result<FlatJob, ParseError> = parse_job("version = 1.0", DocumentFormat::Toml);
    assert!(matches!(
        bad_shape,
        Err(ParseError::Map(MapError::MissingField { .. }))
    ));
}
