// tests/config_test.rs
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;
use trunk_release::config::{load_config, Config};

#[test]
#[serial]
fn test_load_default_config() {
    // No release.toml in the test working directory, so defaults apply
    let config = load_config(None).expect("Should load default config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[scenarios]
alpha_pattern = "(bugfix|topic)/.*$"
live_environment = "production"

[channels]
latest = "stable"

[publish]
tag_prefix = "rel-"
remote = "upstream"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.scenarios.alpha_pattern, "(bugfix|topic)/.*$");
    assert_eq!(config.scenarios.live_environment, "production");
    assert_eq!(config.channels.latest, "stable");
    assert_eq!(config.publish.tag_prefix, "rel-");
    assert_eq!(config.publish.remote, "upstream");
    // Untouched sections keep their defaults
    assert_eq!(config.scenarios.trunk_pattern, "main$");
    assert_eq!(config.channels.alpha, "alpha");
    assert_eq!(config.publish.trunk_branch, "main");
}

#[test]
fn test_load_missing_custom_path_fails() {
    assert!(load_config(Some("/nonexistent/release.toml")).is_err());
}

#[test]
fn test_load_malformed_file_fails() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[scenarios\nbroken").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
fn test_default_values() {
    let config = Config::default();
    assert_eq!(config.scenarios.alpha_pattern, "(fix|feature)/.*$");
    assert_eq!(config.scenarios.trunk_pattern, "main$");
    assert_eq!(config.scenarios.release_pattern, "release/.*$");
    assert_eq!(config.scenarios.live_environment, "live");
    assert_eq!(config.channels.alpha, "alpha");
    assert_eq!(config.channels.beta, "beta");
    assert_eq!(config.channels.latest, "latest");
    assert_eq!(config.publish.tag_prefix, "v");
    assert_eq!(config.publish.remote, "origin");
    assert_eq!(config.publish.trunk_branch, "main");
}
