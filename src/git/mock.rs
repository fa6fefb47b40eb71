use crate::error::{ReleaseError, Result};
use crate::git::History;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory history for testing without actual git operations
pub struct MockHistory {
    tags: Vec<String>,
    ranges: HashMap<(Option<String>, Option<String>), Vec<String>>,
    merge_bases: HashMap<(String, String), String>,
    branch: String,
    fail_push: bool,
    operations: Mutex<Vec<String>>,
}

impl MockHistory {
    /// Create a new empty mock history
    pub fn new() -> Self {
        MockHistory {
            tags: Vec::new(),
            ranges: HashMap::new(),
            merge_bases: HashMap::new(),
            branch: "main".to_string(),
            fail_push: false,
            operations: Mutex::new(Vec::new()),
        }
    }

    /// Add a tag name to the listing
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Register the subjects returned for a specific commit range
    pub fn set_range(
        &mut self,
        start: Option<&str>,
        end: Option<&str>,
        subjects: Vec<&str>,
    ) {
        self.ranges.insert(
            (start.map(String::from), end.map(String::from)),
            subjects.into_iter().map(String::from).collect(),
        );
    }

    /// Register the merge base of two revisions
    pub fn set_merge_base(&mut self, a: impl Into<String>, b: impl Into<String>, id: impl Into<String>) {
        self.merge_bases.insert((a.into(), b.into()), id.into());
    }

    /// Set the currently checked-out branch name
    pub fn set_branch(&mut self, name: impl Into<String>) {
        self.branch = name.into();
    }

    /// Make push_tag fail, for partial-publish tests
    pub fn fail_on_push(&mut self) {
        self.fail_push = true;
    }

    /// The tag operations performed, in order ("tag <name>", "push <name>")
    pub fn operations(&self) -> Vec<String> {
        self.operations.lock().expect("operations lock").clone()
    }

    fn record(&self, op: String) {
        self.operations.lock().expect("operations lock").push(op);
    }
}

impl Default for MockHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MockHistory {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.clone())
    }

    fn commit_subjects(&self, start: Option<&str>, end: Option<&str>) -> Result<Vec<String>> {
        let key = (start.map(String::from), end.map(String::from));

        if let Some(subjects) = self.ranges.get(&key) {
            return Ok(subjects.clone());
        }

        // Unregistered range behaves like an empty window
        Ok(Vec::new())
    }

    fn merge_base(&self, a: &str, b: &str) -> Result<Option<String>> {
        Ok(self
            .merge_bases
            .get(&(a.to_string(), b.to_string()))
            .cloned())
    }

    fn current_branch_name(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn create_annotated_tag(&self, name: &str, _message: &str) -> Result<()> {
        self.record(format!("tag {}", name));
        Ok(())
    }

    fn push_tag(&self, _remote: &str, name: &str) -> Result<()> {
        if self.fail_push {
            return Err(ReleaseError::publish(format!(
                "Cannot push tag '{}'",
                name
            )));
        }

        self.record(format!("push {}", name));
        Ok(())
    }
}
