//! Git history and tag access abstraction
//!
//! The [History] trait covers every git capability the release engine needs:
//! tag listing, commit-subject ranges, fork-point computation, and the tag
//! half of the publish sequence. Two implementations exist:
//!
//! - [repository::Git2History]: a real implementation using the `git2` crate
//! - [mock::MockHistory]: an in-memory implementation for testing
//!
//! The release engine only ever depends on the trait, so every classification
//! and composition property can be tested without a real repository.

pub mod mock;
pub mod repository;

pub use mock::MockHistory;
pub use repository::Git2History;

use crate::error::Result;

/// Read access to git history plus the tag operations of the publish sequence.
///
/// All query methods are pure reads and idempotent for a fixed repository
/// state. Revision arguments accept anything `git rev-parse` would (branch
/// names, tag names, SHAs, and suffixed forms like `abc123^`).
pub trait History {
    /// All tag names in the repository, in listing order
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Commit subject lines in the range `(start, end]`, oldest first.
    ///
    /// `start` is exclusive, `end` inclusive. With `end` absent the range
    /// ends at HEAD; with `start` absent it covers the entire reachable
    /// history. One line per commit; merge and revert commits are not
    /// filtered here.
    fn commit_subjects(&self, start: Option<&str>, end: Option<&str>) -> Result<Vec<String>>;

    /// Common-ancestor commit id of two revisions, or None when the
    /// histories are unrelated
    fn merge_base(&self, a: &str, b: &str) -> Result<Option<String>>;

    /// Short name of the currently checked-out branch
    fn current_branch_name(&self) -> Result<String>;

    /// Create an annotated tag at HEAD
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push a single tag to the given remote
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
