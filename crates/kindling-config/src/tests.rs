//! Unit tests for the bootstrap configuration store.

use rstest::rstest;
use tempfile::tempdir;

use super::*;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn default_enables_early_window() {
    let config = BootConfig::default();
    assert!(config.early_window_control());
    assert_eq!(config.early_window_provider(), defaults::DEFAULT_PROVIDER);
}

#[test]
fn missing_file_resolves_to_defaults() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("boot.json");
    let config = BootConfig::load_from(&path).expect("load");
    assert_eq!(config, BootConfig::default());
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

#[test]
fn set_provider_replaces_name() {
    let mut config = BootConfig::default();
    config.set_early_window_provider("vulkan");
    assert_eq!(config.early_window_provider(), "vulkan");
}

// ---------------------------------------------------------------------------
// Persistence
// ---------------------------------------------------------------------------

#[test]
fn store_then_load_round_trips() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("boot.json");
    let config = BootConfig::new(false, "vulkan");
    config.store_to(&path).expect("store");
    let loaded = BootConfig::load_from(&path).expect("load");
    assert_eq!(loaded, config);
}

#[rstest]
#[case::empty_object("{}", true, "glfw")]
#[case::flag_only(r#"{"early_window_control": false}"#, false, "glfw")]
#[case::provider_only(r#"{"early_window_provider": "vulkan"}"#, true, "vulkan")]
fn partial_json_uses_defaults(
    #[case] text: &str,
    #[case] expected_control: bool,
    #[case] expected_provider: &str,
) {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("boot.json");
    std::fs::write(&path, text).expect("write");
    let config = BootConfig::load_from(&path).expect("load");
    assert_eq!(config.early_window_control(), expected_control);
    assert_eq!(config.early_window_provider(), expected_provider);
}

#[test]
fn invalid_json_reports_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("boot.json");
    std::fs::write(&path, "not json").expect("write");
    let err = BootConfig::load_from(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("boot.json"));
}
