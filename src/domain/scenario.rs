use crate::config::ScenariosConfig;
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;

/// The release scenario a build context resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseScenario {
    /// Feature/fix branch build, published as a branch-scoped pre-release
    Alpha,
    /// Trunk build, published as a canonical-stream pre-release
    Beta,
    /// Release-branch build flagged as live, published to consumers
    Consumer,
}

impl fmt::Display for ReleaseScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseScenario::Alpha => write!(f, "alpha"),
            ReleaseScenario::Beta => write!(f, "beta"),
            ReleaseScenario::Consumer => write!(f, "consumer"),
        }
    }
}

/// One entry in the ordered scenario list
struct ScenarioRule {
    scenario: ReleaseScenario,
    branch_pattern: Regex,
    /// When set, the build environment must equal this value exactly
    required_environment: Option<String>,
}

impl ScenarioRule {
    fn matches(&self, branch_name: &str, environment: &str) -> bool {
        if !self.branch_pattern.is_match(branch_name) {
            return false;
        }
        match &self.required_environment {
            Some(required) => environment == required,
            None => true,
        }
    }
}

/// Classifies a build context into at most one release scenario.
///
/// Rules are tried in a fixed priority order - pre-release branch shapes
/// first, trunk second, consumer last - and the first match wins. The order
/// is load-bearing; keep this an ordered list, never a set.
pub struct ScenarioClassifier {
    rules: Vec<ScenarioRule>,
}

impl ScenarioClassifier {
    /// Build the ordered rule list from configured branch patterns
    pub fn from_config(config: &ScenariosConfig) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                ReleaseError::config(format!("Invalid branch pattern '{}': {}", pattern, e))
            })
        };

        let rules = vec![
            ScenarioRule {
                scenario: ReleaseScenario::Alpha,
                branch_pattern: compile(&config.alpha_pattern)?,
                required_environment: None,
            },
            ScenarioRule {
                scenario: ReleaseScenario::Beta,
                branch_pattern: compile(&config.trunk_pattern)?,
                required_environment: None,
            },
            ScenarioRule {
                scenario: ReleaseScenario::Consumer,
                branch_pattern: compile(&config.release_pattern)?,
                required_environment: Some(config.live_environment.clone()),
            },
        ];

        Ok(ScenarioClassifier { rules })
    }

    /// Select the single applicable scenario, or None for a no-op build.
    ///
    /// A None result is a valid terminal state (nothing is published),
    /// not an error.
    pub fn classify(&self, branch_name: &str, environment: &str) -> Option<ReleaseScenario> {
        self.rules
            .iter()
            .find(|rule| rule.matches(branch_name, environment))
            .map(|rule| rule.scenario)
    }
}
