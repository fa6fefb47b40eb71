//! End-to-end release decision and publish sequencing

use crate::composer::VersionComposer;
use crate::config::Config;
use crate::domain::{BuildContext, ReleaseScenario, ScenarioClassifier, VersionPlan};
use crate::error::Result;
use crate::git::History;
use crate::registry::Registry;

/// Composes classification, version derivation and publishing into one
/// release decision.
///
/// Invocations are expected to run one at a time per repository: two
/// concurrent builds of the same build name can race on tag creation, and
/// serializing them is the caller's responsibility.
pub struct ReleaseOrchestrator {
    config: Config,
    classifier: ScenarioClassifier,
}

impl ReleaseOrchestrator {
    pub fn new(config: Config) -> Result<Self> {
        let classifier = ScenarioClassifier::from_config(&config.scenarios)?;

        Ok(ReleaseOrchestrator { config, classifier })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify the context and select its scenario, if any
    pub fn classify(&self, context: &BuildContext) -> Option<ReleaseScenario> {
        self.classifier
            .classify(&context.branch_name, &context.environment)
    }

    /// Derive the publish plan for this build.
    ///
    /// Returns `Ok(None)` when no scenario matches - a valid terminal state
    /// meaning the pipeline publishes nothing.
    pub fn resolve<H: History, R: Registry>(
        &self,
        context: &BuildContext,
        history: &H,
        registry: &R,
    ) -> Result<Option<VersionPlan>> {
        let scenario = match self.classify(context) {
            Some(scenario) => scenario,
            None => return Ok(None),
        };

        let composer = VersionComposer::new(&self.config);
        let plan = composer.compose(scenario, context, history, registry)?;

        Ok(Some(plan))
    }

    /// Execute the publish sequence for a resolved plan.
    ///
    /// Order is fixed: manifest version, registry publish, annotated tag,
    /// tag push. The first failure aborts the remaining steps; a partial
    /// publish is surfaced to the caller, never rolled back.
    pub fn publish<H: History, R: Registry>(
        &self,
        plan: &VersionPlan,
        history: &H,
        registry: &R,
    ) -> Result<()> {
        registry.set_manifest_version(&plan.next_version)?;
        registry.publish(&plan.dist_channel)?;
        history.create_annotated_tag(&plan.next_tag, &plan.publish_message)?;
        history.push_tag(&self.config.publish.remote, &plan.next_tag)?;

        Ok(())
    }

    /// Resolve and, when a scenario matched, publish in one call
    pub fn run<H: History, R: Registry>(
        &self,
        context: &BuildContext,
        history: &H,
        registry: &R,
    ) -> Result<Option<VersionPlan>> {
        let plan = match self.resolve(context, history, registry)? {
            Some(plan) => plan,
            None => return Ok(None),
        };

        self.publish(&plan, history, registry)?;

        Ok(Some(plan))
    }
}
