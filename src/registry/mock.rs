use crate::error::{ReleaseError, Result};
use crate::registry::Registry;
use std::sync::Mutex;

/// In-memory registry for testing without a real npm environment
pub struct MockRegistry {
    latest: Option<String>,
    fail_publish: bool,
    operations: Mutex<Vec<String>>,
}

impl MockRegistry {
    /// Create a mock registry with no published versions
    pub fn new() -> Self {
        MockRegistry {
            latest: None,
            fail_publish: false,
            operations: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock registry whose "latest" channel holds the given version
    pub fn with_latest(version: impl Into<String>) -> Self {
        MockRegistry {
            latest: Some(version.into()),
            fail_publish: false,
            operations: Mutex::new(Vec::new()),
        }
    }

    /// Make publish fail, for partial-publish tests
    pub fn fail_on_publish(&mut self) {
        self.fail_publish = true;
    }

    /// The registry operations performed, in order
    /// ("version <v>", "publish <channel>")
    pub fn operations(&self) -> Vec<String> {
        self.operations.lock().expect("operations lock").clone()
    }

    fn record(&self, op: String) {
        self.operations.lock().expect("operations lock").push(op);
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry for MockRegistry {
    fn latest_published_version(&self) -> Result<String> {
        self.latest
            .clone()
            .ok_or_else(|| ReleaseError::registry("No 'latest' dist-tag published"))
    }

    fn set_manifest_version(&self, version: &str) -> Result<()> {
        self.record(format!("version {}", version));
        Ok(())
    }

    fn publish(&self, channel: &str) -> Result<()> {
        if self.fail_publish {
            return Err(ReleaseError::registry("Registry unreachable"));
        }

        self.record(format!("publish {}", channel));
        Ok(())
    }
}
