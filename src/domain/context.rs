/// Immutable description of one CI build, supplied by the pipeline caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildContext {
    /// Branch the build was triggered from (e.g., "feature/login")
    pub branch_name: String,
    /// Human-readable name of the build line (e.g., "release-four")
    pub build_name: String,
    /// Opaque build identifier from the CI system
    pub build_id: String,
    /// Deployment environment the build targets (e.g., "test", "live")
    pub environment: String,
}

impl BuildContext {
    /// Create a new build context
    pub fn new(
        branch_name: impl Into<String>,
        build_name: impl Into<String>,
        build_id: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        BuildContext {
            branch_name: branch_name.into(),
            build_name: build_name.into(),
            build_id: build_id.into(),
            environment: environment.into(),
        }
    }
}
