// tests/release_scenarios_test.rs
//
// End-to-end release decisions through the public API, with in-memory
// collaborators standing in for git and the registry.

use trunk_release::config::Config;
use trunk_release::domain::{BuildContext, ReleaseScenario};
use trunk_release::git::MockHistory;
use trunk_release::orchestrator::ReleaseOrchestrator;
use trunk_release::registry::MockRegistry;

fn orchestrator() -> ReleaseOrchestrator {
    ReleaseOrchestrator::new(Config::default()).expect("default config is valid")
}

#[test]
fn feature_branch_resolves_to_alpha_prerelease() {
    let orchestrator = orchestrator();
    let context = BuildContext::new("feature/login", "login", "777", "test");
    let history = MockHistory::new();
    let registry = MockRegistry::new();

    let plan = orchestrator
        .resolve(&context, &history, &registry)
        .unwrap()
        .expect("feature branch must match a scenario");

    assert_eq!(plan.next_version, "0.0.0-alpha-login-777");
    assert_eq!(plan.next_tag, "v0.0.0-alpha-login-777");
    assert_eq!(plan.dist_channel, "alpha");
}

#[test]
fn alpha_classification_ignores_environment() {
    let orchestrator = orchestrator();

    for env in ["test", "staging", "live"] {
        let context = BuildContext::new("fix/crash", "crash", "9", env);
        assert_eq!(
            orchestrator.classify(&context),
            Some(ReleaseScenario::Alpha),
            "environment '{}' must not affect alpha classification",
            env
        );
    }
}

#[test]
fn trunk_resolves_to_beta_prerelease_in_any_environment() {
    let orchestrator = orchestrator();
    let history = MockHistory::new();
    let registry = MockRegistry::new();

    for env in ["test", "staging", "live"] {
        let context = BuildContext::new("main", "main-build", "42", env);
        let plan = orchestrator
            .resolve(&context, &history, &registry)
            .unwrap()
            .expect("trunk must match a scenario");

        assert_eq!(plan.next_version, "0.0.0-beta-42");
        assert_eq!(plan.dist_channel, "beta");
    }
}

#[test]
fn release_branch_outside_live_is_a_noop() {
    let orchestrator = orchestrator();
    let context = BuildContext::new("release/four", "release-four", "12345", "test");
    let history = MockHistory::new();
    let registry = MockRegistry::new();

    let plan = orchestrator.run(&context, &history, &registry).unwrap();
    assert!(plan.is_none());
    assert!(history.operations().is_empty());
    assert!(registry.operations().is_empty());
}

#[test]
fn first_consumer_release_bumps_from_fork_point() {
    // release/four has never been released: no matching tag, so the window
    // starts right after the fork point from main.
    let orchestrator = orchestrator();
    let context = BuildContext::new("release/four", "release-four", "12345", "live");

    let mut history = MockHistory::new();
    history.set_merge_base("main", "release/four", "abc123");
    history.set_range(Some("abc123^"), Some("HEAD"), vec!["feat: add export"]);
    let registry = MockRegistry::with_latest("1.4.2");

    let plan = orchestrator
        .resolve(&context, &history, &registry)
        .unwrap()
        .expect("live release branch must match the consumer scenario");

    // minor bump, patch segment deliberately untouched
    assert_eq!(plan.next_version, "1.5.2");
    assert_eq!(plan.next_tag, "v1.5.2-latest-release-four");
    assert_eq!(plan.dist_channel, "latest");
}

#[test]
fn subsequent_consumer_release_bumps_from_previous_tag() {
    let orchestrator = orchestrator();
    let context = BuildContext::new("release/four", "release-four", "12346", "live");

    let mut history = MockHistory::new();
    history.add_tag("v1.5.2-latest-release-four");
    history.set_range(
        Some("v1.5.2-latest-release-four"),
        Some("HEAD"),
        vec!["fix!: rework storage layout"],
    );
    let registry = MockRegistry::with_latest("1.5.2");

    let plan = orchestrator
        .resolve(&context, &history, &registry)
        .unwrap()
        .unwrap();

    assert_eq!(plan.next_version, "2.5.2");
    assert_eq!(plan.next_tag, "v2.5.2-latest-release-four");
}

#[test]
fn breaking_marker_outranks_any_number_of_smaller_changes() {
    let orchestrator = orchestrator();
    let context = BuildContext::new("release/four", "release-four", "12345", "live");

    let mut history = MockHistory::new();
    history.set_merge_base("main", "release/four", "abc123");
    history.set_range(
        Some("abc123^"),
        Some("HEAD"),
        vec![
            "fix: one",
            "fix: two",
            "feat: three",
            "feat!: breaking",
            "fix: four",
        ],
    );
    let registry = MockRegistry::with_latest("1.4.2");

    let plan = orchestrator
        .resolve(&context, &history, &registry)
        .unwrap()
        .unwrap();
    assert_eq!(plan.next_version, "2.4.2");
}

#[test]
fn resolve_is_idempotent_for_fixed_collaborator_state() {
    let orchestrator = orchestrator();
    let context = BuildContext::new("release/four", "release-four", "12345", "live");

    let mut history = MockHistory::new();
    history.add_tag("v1.4.2-latest-release-four");
    history.set_range(
        Some("v1.4.2-latest-release-four"),
        Some("HEAD"),
        vec!["feat: add export"],
    );
    let registry = MockRegistry::with_latest("1.4.2");

    let first = orchestrator.resolve(&context, &history, &registry).unwrap();
    let second = orchestrator.resolve(&context, &history, &registry).unwrap();
    assert_eq!(first, second);
}

#[test]
fn consumer_publish_runs_all_four_steps_in_order() {
    let orchestrator = orchestrator();
    let context = BuildContext::new("release/four", "release-four", "12345", "live");

    let mut history = MockHistory::new();
    history.set_merge_base("main", "release/four", "abc123");
    history.set_range(Some("abc123^"), Some("HEAD"), vec!["feat: add export"]);
    let registry = MockRegistry::with_latest("1.4.2");

    orchestrator
        .run(&context, &history, &registry)
        .unwrap()
        .expect("consumer scenario must publish");

    assert_eq!(
        registry.operations(),
        vec!["version 1.5.2", "publish latest"]
    );
    assert_eq!(
        history.operations(),
        vec![
            "tag v1.5.2-latest-release-four",
            "push v1.5.2-latest-release-four"
        ]
    );
}

#[test]
fn malformed_registry_version_aborts_the_release() {
    let orchestrator = orchestrator();
    let context = BuildContext::new("release/four", "release-four", "12345", "live");

    let history = MockHistory::new();
    let registry = MockRegistry::with_latest("garbage");

    let result = orchestrator.run(&context, &history, &registry);
    assert!(result.is_err());
    assert!(history.operations().is_empty());
    assert_eq!(registry.operations(), Vec::<String>::new());
}

#[test]
fn custom_patterns_reshape_classification() {
    let mut config = Config::default();
    config.scenarios.trunk_pattern = "trunk$".to_string();
    config.scenarios.live_environment = "production".to_string();
    let orchestrator = ReleaseOrchestrator::new(config).unwrap();

    let trunk = BuildContext::new("trunk", "t", "1", "test");
    assert_eq!(orchestrator.classify(&trunk), Some(ReleaseScenario::Beta));

    let main = BuildContext::new("main", "m", "1", "test");
    assert_eq!(orchestrator.classify(&main), None);

    let release = BuildContext::new("release/one", "one", "1", "production");
    assert_eq!(
        orchestrator.classify(&release),
        Some(ReleaseScenario::Consumer)
    );
}
