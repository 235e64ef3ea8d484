//! Configuration loading

use std::io::Write;
use tempfile::NamedTempFile;
use tenantgate::config::Config;
use tenantgate::EngineError;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
authz:
  enabled: true
  admin_roles:
    - SUPER_ADMIN
    - OPS
  enforce_view_implies_fetch: false
"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.authz.enabled);
    assert!(!config.authz.enforce_view_implies_fetch);
    assert!(config.authz.is_admin_role("OPS"));
}

#[test]
fn test_partial_config_fills_defaults() {
    let file = write_config("authz:\n  enabled: false\n");

    let config = Config::from_file(file.path()).unwrap();
    assert!(!config.authz.enabled);
    assert!(config.authz.enforce_view_implies_fetch);
    assert_eq!(config.authz.admin_roles, vec!["SUPER_ADMIN".to_string()]);
}

#[test]
fn test_empty_document_yields_defaults() {
    let file = write_config("{}\n");
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_yaml_is_typed_error() {
    let file = write_config("authz: [not, a, mapping\n");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, EngineError::Yaml(_)));
}

#[test]
fn test_invalid_values_fail_validation() {
    let file = write_config("authz:\n  admin_roles:\n    - \"\"\n");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(matches!(err, EngineError::Config(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Config::from_file("/nonexistent/tenantgate.yaml").unwrap_err();
    assert!(matches!(err, EngineError::Io(_)));
}
