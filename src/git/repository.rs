use crate::error::{ReleaseError, Result};
use crate::git::History;
use git2::{Oid, Repository};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2History {
    repo: Repository,
}

impl Git2History {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;

        Ok(Git2History { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2History { repo }
    }

    /// Resolve a revision string (branch, tag, SHA, `rev^`) to a commit id
    fn resolve_commit(&self, rev: &str) -> Result<Oid> {
        let object = self
            .repo
            .revparse_single(rev)
            .map_err(|e| ReleaseError::branch(format!("Cannot resolve '{}': {}", rev, e)))?;

        let commit = object
            .peel(git2::ObjectType::Commit)
            .map_err(|e| ReleaseError::branch(format!("'{}' is not a commit: {}", rev, e)))?;

        Ok(commit.id())
    }
}

impl History for Git2History {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn commit_subjects(&self, start: Option<&str>, end: Option<&str>) -> Result<Vec<String>> {
        let mut revwalk = self.repo.revwalk()?;

        match end {
            Some(rev) => revwalk.push(self.resolve_commit(rev)?)?,
            None => revwalk.push_head()?,
        }

        if let Some(rev) = start {
            revwalk.hide(self.resolve_commit(rev)?)?;
        }

        let mut subjects = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            subjects.push(commit.summary().unwrap_or("(empty message)").to_string());
        }

        // revwalk yields newest first; callers expect oldest first
        subjects.reverse();
        Ok(subjects)
    }

    fn merge_base(&self, a: &str, b: &str) -> Result<Option<String>> {
        let oid_a = self.resolve_commit(a)?;
        let oid_b = self.resolve_commit(b)?;

        match self.repo.merge_base(oid_a, oid_b) {
            Ok(oid) => Ok(Some(oid.to_string())),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn current_branch_name(&self) -> Result<String> {
        let head = self.repo.head()?;

        head.shorthand()
            .map(|s| s.to_string())
            .ok_or_else(|| ReleaseError::branch("HEAD is not on a named branch"))
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self
            .repo
            .head()?
            .peel_to_commit()
            .map_err(|e| ReleaseError::tag(format!("Cannot resolve HEAD: {}", e)))?;

        let signature = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &signature, message, false)
            .map_err(|e| ReleaseError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote)
            .map_err(|e| ReleaseError::publish(format!("Cannot find remote: {}", e)))?;

        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);

        remote
            .push(&[refspec.as_str()], None)
            .map_err(|e| ReleaseError::publish(format!("Push failed: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git2_history_open() {
        // Discover either succeeds (run inside a checkout) or fails cleanly
        let result = Git2History::open(".");
        let _ = result;
    }
}
