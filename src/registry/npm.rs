use crate::error::{ReleaseError, Result};
use crate::registry::Registry;
use std::process::Command;

/// Registry implementation backed by the npm command-line tool
pub struct NpmRegistry {
    package: String,
}

impl NpmRegistry {
    /// Create a registry client scoped to one package
    pub fn new(package: impl Into<String>) -> Self {
        NpmRegistry {
            package: package.into(),
        }
    }

    /// Run an npm subcommand and return its trimmed stdout.
    ///
    /// Any non-zero exit code is fatal; stderr is surfaced in the error so
    /// the CI log shows what npm reported.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("npm").args(args).output().map_err(|e| {
            ReleaseError::registry(format!("Failed to execute npm {}: {}", args.join(" "), e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReleaseError::registry(format!(
                "npm {} failed with exit code {}: {}",
                args.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Registry for NpmRegistry {
    fn latest_published_version(&self) -> Result<String> {
        let stdout = self.run(&["view", &self.package, "dist-tags", "--json"])?;

        let dist_tags: serde_json::Value = serde_json::from_str(&stdout).map_err(|e| {
            ReleaseError::registry(format!("Cannot parse dist-tags for '{}': {}", self.package, e))
        })?;

        dist_tags
            .get("latest")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                ReleaseError::registry(format!(
                    "No 'latest' dist-tag published for '{}'",
                    self.package
                ))
            })
    }

    fn set_manifest_version(&self, version: &str) -> Result<()> {
        self.run(&["version", version, "--git-tag-version=false"])?;
        Ok(())
    }

    fn publish(&self, channel: &str) -> Result<()> {
        let tag_arg = format!("--tag={}", channel);
        self.run(&["publish", "./", &tag_arg])?;
        Ok(())
    }
}
