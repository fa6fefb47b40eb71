use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete configuration for trunk-release.
///
/// Covers scenario branch patterns, distribution channel names, and publish
/// targets. Every field has a default reproducing the stock trunk-based
/// workflow, so running without a config file is the common case in CI.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub scenarios: ScenariosConfig,

    #[serde(default)]
    pub channels: ChannelsConfig,

    #[serde(default)]
    pub publish: PublishConfig,
}

fn default_alpha_pattern() -> String {
    "(fix|feature)/.*$".to_string()
}

fn default_trunk_pattern() -> String {
    "main$".to_string()
}

fn default_release_pattern() -> String {
    "release/.*$".to_string()
}

fn default_live_environment() -> String {
    "live".to_string()
}

/// Branch-shape patterns and the environment marker driving classification.
///
/// Patterns are regular expressions matched against the branch name.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ScenariosConfig {
    #[serde(default = "default_alpha_pattern")]
    pub alpha_pattern: String,

    #[serde(default = "default_trunk_pattern")]
    pub trunk_pattern: String,

    #[serde(default = "default_release_pattern")]
    pub release_pattern: String,

    /// Environment value that marks a release-branch build as consumer-facing
    #[serde(default = "default_live_environment")]
    pub live_environment: String,
}

impl Default for ScenariosConfig {
    fn default() -> Self {
        ScenariosConfig {
            alpha_pattern: default_alpha_pattern(),
            trunk_pattern: default_trunk_pattern(),
            release_pattern: default_release_pattern(),
            live_environment: default_live_environment(),
        }
    }
}

fn default_alpha_channel() -> String {
    "alpha".to_string()
}

fn default_beta_channel() -> String {
    "beta".to_string()
}

fn default_latest_channel() -> String {
    "latest".to_string()
}

/// Registry distribution channel names, one per scenario
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChannelsConfig {
    #[serde(default = "default_alpha_channel")]
    pub alpha: String,

    #[serde(default = "default_beta_channel")]
    pub beta: String,

    #[serde(default = "default_latest_channel")]
    pub latest: String,
}

impl Default for ChannelsConfig {
    fn default() -> Self {
        ChannelsConfig {
            alpha: default_alpha_channel(),
            beta: default_beta_channel(),
            latest: default_latest_channel(),
        }
    }
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_trunk_branch() -> String {
    "main".to_string()
}

/// Tag and push targets for the publish sequence
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    /// Primary integration branch, used for fork-point computation
    #[serde(default = "default_trunk_branch")]
    pub trunk_branch: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            tag_prefix: default_tag_prefix(),
            remote: default_remote(),
            trunk_branch: default_trunk_branch(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scenarios: ScenariosConfig::default(),
            channels: ChannelsConfig::default(),
            publish: PublishConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in the current directory
/// 3. `.release.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./release.toml").exists() {
        fs::read_to_string("./release.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".release.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseError::config(format!("Cannot parse config: {}", e)))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_patterns() {
        let config = Config::default();
        assert_eq!(config.scenarios.alpha_pattern, "(fix|feature)/.*$");
        assert_eq!(config.scenarios.trunk_pattern, "main$");
        assert_eq!(config.scenarios.release_pattern, "release/.*$");
        assert_eq!(config.scenarios.live_environment, "live");
    }

    #[test]
    fn test_default_channels() {
        let config = Config::default();
        assert_eq!(config.channels.alpha, "alpha");
        assert_eq!(config.channels.beta, "beta");
        assert_eq!(config.channels.latest, "latest");
    }

    #[test]
    fn test_default_publish_targets() {
        let config = Config::default();
        assert_eq!(config.publish.tag_prefix, "v");
        assert_eq!(config.publish.remote, "origin");
        assert_eq!(config.publish.trunk_branch, "main");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let toml_content = r#"
[scenarios]
live_environment = "production"

[channels]
latest = "stable"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.scenarios.live_environment, "production");
        assert_eq!(config.scenarios.trunk_pattern, "main$");
        assert_eq!(config.channels.latest, "stable");
        assert_eq!(config.channels.alpha, "alpha");
        assert_eq!(config.publish.remote, "origin");
    }
}
