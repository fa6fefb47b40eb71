//! Scenario-specific version composition
//!
//! One strategy per [ReleaseScenario]. Alpha and Beta are deterministic from
//! the build context alone; Consumer is the only strategy that consults git
//! history and the registry.

use crate::config::Config;
use crate::domain::{classify_bump, BuildContext, ReleaseScenario, Version, VersionPlan};
use crate::error::{ReleaseError, Result};
use crate::git::History;
use crate::registry::Registry;
use regex::Regex;

pub struct VersionComposer<'a> {
    config: &'a Config,
}

impl<'a> VersionComposer<'a> {
    pub fn new(config: &'a Config) -> Self {
        VersionComposer { config }
    }

    /// Produce the publish plan for the matched scenario
    pub fn compose<H: History, R: Registry>(
        &self,
        scenario: ReleaseScenario,
        context: &BuildContext,
        history: &H,
        registry: &R,
    ) -> Result<VersionPlan> {
        match scenario {
            ReleaseScenario::Alpha => Ok(self.compose_alpha(context)),
            ReleaseScenario::Beta => Ok(self.compose_beta(context)),
            ReleaseScenario::Consumer => self.compose_consumer(context, history, registry),
        }
    }

    /// Feature/fix branch: placeholder version with a branch-scoped
    /// pre-release label. No history or registry access.
    fn compose_alpha(&self, context: &BuildContext) -> VersionPlan {
        let channel = &self.config.channels.alpha;
        let next_version = format!(
            "0.0.0-{}-{}-{}",
            channel, context.build_name, context.build_id
        );
        let next_tag = format!("{}{}", self.config.publish.tag_prefix, next_version);
        let publish_message = format!("publish @{} release {}", channel, next_tag);

        VersionPlan::new(next_version, next_tag, channel.as_str(), publish_message)
    }

    /// Trunk: placeholder version labelled by build id only, since trunk
    /// has one canonical stream.
    fn compose_beta(&self, context: &BuildContext) -> VersionPlan {
        let channel = &self.config.channels.beta;
        let next_version = format!("0.0.0-{}-{}", channel, context.build_id);
        let next_tag = format!("{}{}", self.config.publish.tag_prefix, next_version);
        let publish_message = format!("publish @{} release {}", channel, next_tag);

        VersionPlan::new(next_version, next_tag, channel.as_str(), publish_message)
    }

    /// Release branch in the live environment: bump the currently published
    /// version by the magnitude the commit window requires.
    fn compose_consumer<H: History, R: Registry>(
        &self,
        context: &BuildContext,
        history: &H,
        registry: &R,
    ) -> Result<VersionPlan> {
        let subjects = self.release_window_subjects(context, history)?;
        let bump = classify_bump(&subjects);

        let latest = registry.latest_published_version()?;
        let current = Version::coerce(&latest)?;
        let next = current.bump_segment(bump);

        let channel = &self.config.channels.latest;
        let next_version = next.to_string();
        // The tag embeds the build name so each release line stays
        // independently trackable in git tags.
        let next_tag = format!(
            "{}{}-{}-{}",
            self.config.publish.tag_prefix, next_version, channel, context.build_name
        );
        let publish_message = format!("publish @{} release {}", channel, next_tag);

        Ok(VersionPlan::new(
            next_version,
            next_tag,
            channel.as_str(),
            publish_message,
        ))
    }

    /// Most recent tag marking a previous consumer release of this line
    fn previous_release_tag<H: History>(
        &self,
        history: &H,
        build_name: &str,
    ) -> Result<Option<String>> {
        let marker = format!(
            "-{}-{}",
            regex::escape(&self.config.channels.latest),
            regex::escape(build_name)
        );
        let pattern = Regex::new(&marker)
            .map_err(|e| ReleaseError::tag(format!("Invalid tag marker '{}': {}", marker, e)))?;

        Ok(history
            .list_tags()?
            .iter()
            .rev()
            .find(|tag| pattern.is_match(tag))
            .cloned())
    }

    /// Resolve the commit window a consumer release covers.
    ///
    /// Lower bound, in order of preference: the previous release tag for
    /// this line; the commit immediately after the fork point from trunk
    /// (first release ever cut from this branch); the root of history.
    fn release_window_subjects<H: History>(
        &self,
        context: &BuildContext,
        history: &H,
    ) -> Result<Vec<String>> {
        if let Some(tag) = self.previous_release_tag(history, &context.build_name)? {
            return history.commit_subjects(Some(&tag), Some("HEAD"));
        }

        let fork_point = history.merge_base(&self.config.publish.trunk_branch, &context.branch_name)?;
        if let Some(base) = fork_point {
            // Exclusive start at base^ keeps the fork-point commit itself
            // inside the window.
            return history.commit_subjects(Some(&format!("{}^", base)), Some("HEAD"));
        }

        history.commit_subjects(None, None)
    }
}
