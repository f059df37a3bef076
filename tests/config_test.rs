//! Integration tests for Settings loading from an explicit config file.
//!
//! Note: these tests use temp files only, so they layer over the compiled
//! defaults (and a global config only if the machine has one).

use std::fs;

use tempfile::TempDir;

use storectl::application::ApplicationError;
use storectl::config::{Settings, DEFAULT_DESCRIPTION};

#[test]
fn given_config_file_with_placeholder_when_load_then_overrides_only_that_field() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storectl.toml");
    fs::write(
        &path,
        r#"
[placeholder]
image = "https://img.test/default.png"

[headers]
Accept-Language = "es"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.placeholder.image, "https://img.test/default.png");
    assert_eq!(settings.placeholder.description, DEFAULT_DESCRIPTION);
    assert_eq!(
        settings.headers.get("Accept-Language").map(String::as_str),
        Some("es")
    );
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.toml");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn given_malformed_toml_when_load_then_config_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.toml");
    fs::write(&path, "[placeholder\nimage = 1").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
}
