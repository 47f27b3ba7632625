use std::fs;

use smart_fetch::{CoordinatorConfig, SmartFetchError};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write config file");
    path.to_string_lossy().into_owned()
}

#[test]
fn loads_base_file_with_defaults() {
    let dir = TempDir::new().unwrap();
    write(&dir, "smart_fetch.yaml", "debounce_ms: 250\n");
    let base = dir.path().join("smart_fetch");

    let config = CoordinatorConfig::load(base.to_str().unwrap(), None).expect("valid config");
    assert_eq!(config.debounce_ms, 250);
    assert_eq!(config.default_page_size, 10);
}

#[test]
fn profile_file_overrides_base() {
    let dir = TempDir::new().unwrap();
    write(&dir, "smart_fetch.yaml", "debounce_ms: 250\ndefault_page_size: 20\n");
    write(&dir, "smart_fetch-admin.yaml", "default_page_size: 50\n");
    let base = dir.path().join("smart_fetch");

    let config =
        CoordinatorConfig::load(base.to_str().unwrap(), Some("admin")).expect("valid config");
    assert_eq!(config.debounce_ms, 250);
    assert_eq!(config.default_page_size, 50);
}

#[test]
fn missing_profile_file_is_optional() {
    let dir = TempDir::new().unwrap();
    write(&dir, "smart_fetch.yaml", "default_page_size: 15\n");
    let base = dir.path().join("smart_fetch");

    let config =
        CoordinatorConfig::load(base.to_str().unwrap(), Some("staging")).expect("valid config");
    assert_eq!(config.default_page_size, 15);
}

#[test]
fn rejects_out_of_range_values() {
    let dir = TempDir::new().unwrap();
    write(&dir, "smart_fetch.yaml", "default_page_size: 0\n");
    let base = dir.path().join("smart_fetch");

    let err = CoordinatorConfig::load(base.to_str().unwrap(), None).unwrap_err();
    assert!(matches!(err, SmartFetchError::Validation(_)));
}

#[test]
fn missing_base_file_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let base = dir.path().join("absent");

    let err = CoordinatorConfig::load(base.to_str().unwrap(), None).unwrap_err();
    assert!(matches!(err, SmartFetchError::Config(_)));
}
