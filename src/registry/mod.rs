//! Package registry abstraction
//!
//! The [Registry] trait covers the registry half of a release: looking up the
//! currently published version, writing the next version into the package
//! manifest, and publishing to a distribution channel.
//!
//! - [npm::NpmRegistry]: production implementation shelling out to the npm CLI
//! - [mock::MockRegistry]: in-memory implementation for testing

pub mod mock;
pub mod npm;

pub use mock::MockRegistry;
pub use npm::NpmRegistry;

use crate::error::Result;

/// Registry operations used by the release engine.
///
/// `latest_published_version` is a pure read; the other two are publish
/// steps and are only ever called by the orchestrator, in order, after a
/// plan has been resolved.
pub trait Registry {
    /// Currently published version on the "latest" distribution channel
    fn latest_published_version(&self) -> Result<String>;

    /// Write the next version into the package manifest (no git side effects)
    fn set_manifest_version(&self, version: &str) -> Result<()>;

    /// Publish the package under the given distribution channel
    fn publish(&self, channel: &str) -> Result<()>;
}
