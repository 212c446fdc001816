//! Config loading from YAML files.

use std::io::Write;

use tempfile::NamedTempFile;

use tabletop_engine::Profile;
use tabletop_runtime::config::{load_config, ConfigError, SourceKind};

fn yaml_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_config() {
    let file = yaml_file(
        r#"
server:
  listen: "127.0.0.1:4000"
exercise:
  profile: law_firm
  seed: 1234
content:
  source: llm
  llm:
    model: gemini-1.5-flash
    api_key_env: MY_KEY
    temperature: 0.3
    timeout_secs: 10
observability:
  log_level: debug
"#,
    );
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.server.listen, "127.0.0.1:4000");
    assert_eq!(config.exercise.profile, Profile::LawFirm);
    assert_eq!(config.exercise.seed, Some(1234));
    assert_eq!(config.content.source, SourceKind::Llm);
    assert_eq!(config.content.llm.model, "gemini-1.5-flash");
    assert_eq!(config.content.llm.api_key_env, "MY_KEY");
    assert_eq!(config.content.llm.timeout_secs, 10);
    // Unset keys keep their defaults.
    assert!(config.content.llm.endpoint.contains("generativelanguage.googleapis.com"));
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn empty_file_is_all_defaults() {
    let file = yaml_file("{}\n");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.server.listen, "0.0.0.0:3000");
    assert_eq!(config.content.source, SourceKind::Procedural);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn unknown_profile_is_parse_error() {
    let file = yaml_file("exercise:\n  profile: hospital\n");
    assert!(matches!(load_config(file.path()), Err(ConfigError::Parse(_))));
}

#[test]
fn zero_timeout_is_invalid_for_llm() {
    let file = yaml_file("content:\n  source: llm\n  llm:\n    timeout_secs: 0\n");
    assert!(matches!(load_config(file.path()), Err(ConfigError::Invalid(_))));
}
