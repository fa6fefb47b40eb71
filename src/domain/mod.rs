//! Domain logic - pure release rules independent of git and registry access

pub mod bump;
pub mod context;
pub mod plan;
pub mod scenario;
pub mod version;

pub use bump::{classify_bump, BumpType};
pub use context::BuildContext;
pub use plan::VersionPlan;
pub use scenario::{ReleaseScenario, ScenarioClassifier};
pub use version::Version;
