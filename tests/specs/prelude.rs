//! Shared fixtures for specs.

pub use jobmap_jobs::{parse_job, FlatJob, GlueJob, JobConfig, JobShape, ParseError};
pub use jobmap_schema::{
    map_document, parse_document, Document, DocumentFormat, FieldDecl, FieldType, MapError,
    Schema,
};
pub use serde_json::{json, Value};

pub const JOB_YAML: &str = include_str!("../fixtures/job.yaml");
pub const JOB_TOML: &str = include_str!("../fixtures/job.toml");
pub const JOB_JSON: &str = include_str!("../fixtures/job.json");

/// The document used as the worked example for flattening
pub fn example_document() -> Document {
    Document::try_from(json!({
        "tags": {"author": "alice", "system": "etl"},
        "source": {
            "type": "jdbc",
            "connection": "db1",
            "dataCatalog": {"database": "d", "table": "t"},
            "incrementFields": ["id"],
            "incrementSortOrder": "asc"
        },
        "sink": {"type": "s3", "s3Path": "s3://x"},
        "jobRunSettings": {"iamRole": "arn:aws:iam::role"}
    }))
    .unwrap()
}

/// The example document plus the top-level settings every full job has
pub fn complete_example_document() -> Document {
    let mut map = example_document().into_map();
    map.insert("version".to_string(), json!(1.0));
    map.insert("resource".to_string(), json!("glue"));
    map.insert("name".to_string(), json!("etl-job"));
    map.insert("description".to_string(), json!("example"));
    map.insert("script".to_string(), json!("main.py"));
    Document::new(map)
}
