/// The publish instruction derived for one build.
///
/// Sole output of version composition, sole input to publishing. Consumed
/// once; nothing about it persists across invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionPlan {
    /// Semantic version or pre-release string to publish
    pub next_version: String,
    /// Git tag for this release, the version with the configured prefix
    pub next_tag: String,
    /// Registry distribution channel to publish under
    pub dist_channel: String,
    /// Annotation message for the release tag
    pub publish_message: String,
}

impl VersionPlan {
    pub fn new(
        next_version: impl Into<String>,
        next_tag: impl Into<String>,
        dist_channel: impl Into<String>,
        publish_message: impl Into<String>,
    ) -> Self {
        VersionPlan {
            next_version: next_version.into(),
            next_tag: next_tag.into(),
            dist_channel: dist_channel.into(),
            publish_message: publish_message.into(),
        }
    }
}
