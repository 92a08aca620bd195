//! Tests for reading and writing the configuration directory.

use std::fs;

use jsonql_configuration::configuration::DEFAULT_MAX_PREDICATE_DEPTH;
use jsonql_configuration::error::ParseConfigurationError;
use jsonql_configuration::{
    parse_configuration, write_configuration, Configuration, CONFIGURATION_FILENAME,
    CONFIGURATION_JSONSCHEMA_FILENAME,
};

#[tokio::test]
async fn missing_fields_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIGURATION_FILENAME), r#"{ "version": 1 }"#).unwrap();

    let configuration = parse_configuration(dir.path()).await.unwrap();
    assert_eq!(configuration, Configuration::empty());
    assert_eq!(configuration.max_predicate_depth, DEFAULT_MAX_PREDICATE_DEPTH);
    assert!(!configuration.escape_like_wildcards);
}

#[tokio::test]
async fn reads_every_setting() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIGURATION_FILENAME),
        r#"{ "version": 1, "maxPredicateDepth": 4, "escapeLikeWildcards": true }"#,
    )
    .unwrap();

    let configuration = parse_configuration(dir.path()).await.unwrap();
    assert_eq!(configuration.max_predicate_depth, 4);
    assert!(configuration.escape_like_wildcards);
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = parse_configuration(dir.path()).await.unwrap_err();
    assert!(matches!(error, ParseConfigurationError::IoErrorButStringified(_)));
}

#[tokio::test]
async fn invalid_json_reports_its_position() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIGURATION_FILENAME), "{\n  \"version\": }").unwrap();

    match parse_configuration(dir.path()).await.unwrap_err() {
        ParseConfigurationError::ParseError { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unknown_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(CONFIGURATION_FILENAME), r#"{ "version": 7 }"#).unwrap();

    let error = parse_configuration(dir.path()).await.unwrap_err();
    assert!(matches!(
        error,
        ParseConfigurationError::UnsupportedVersion {
            found: 7,
            expected: 1
        }
    ));
}

#[tokio::test]
async fn zero_depth_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(CONFIGURATION_FILENAME),
        r#"{ "version": 1, "maxPredicateDepth": 0 }"#,
    )
    .unwrap();

    let error = parse_configuration(dir.path()).await.unwrap_err();
    assert!(matches!(error, ParseConfigurationError::ZeroPredicateDepth));
}

#[tokio::test]
async fn written_configuration_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("nested");
    let configuration = Configuration {
        max_predicate_depth: 8,
        ..Configuration::empty()
    };

    write_configuration(&configuration, &out_dir).await.unwrap();

    assert!(out_dir.join(CONFIGURATION_JSONSCHEMA_FILENAME).exists());
    assert_eq!(parse_configuration(&out_dir).await.unwrap(), configuration);
}

#[tokio::test]
async fn written_schema_validates_the_written_configuration() {
    let dir = tempfile::tempdir().unwrap();
    write_configuration(&Configuration::empty(), dir.path())
        .await
        .unwrap();

    let schema: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join(CONFIGURATION_JSONSCHEMA_FILENAME)).unwrap(),
    )
    .unwrap();
    let configuration: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join(CONFIGURATION_FILENAME)).unwrap(),
    )
    .unwrap();

    let compiled = jsonschema::JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&configuration));
    assert!(!compiled.is_valid(&serde_json::json!({ "version": "one" })));
}
