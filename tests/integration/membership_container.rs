//! Membership container resolution: team, application or domain.

use super::test_utils::{FakeRest, RestCall};
use rhc_context::context::{ContextResolver, CONTAINER_REQUIRED, WRITABLE_CONTAINER_REQUIRED};
use rhc_context::error::ContextError;
use rhc_context::options::{CommandOptions, OptionKey};
use rhc_context::rest::MembershipContainer;

#[tokio::test]
async fn test_team_id_beats_target() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new()
        .with(OptionKey::TeamId, "42")
        .with(OptionKey::Target, "team1/blog");

    let container = ContextResolver::new(&options, &rest)
        .resolve_membership_container(false)
        .await
        .unwrap();

    assert!(matches!(container, MembershipContainer::Team(ref t) if t.id == "42"));
    assert!(matches!(rest.calls().last(), Some(RestCall::FindTeamById(id, _)) if id == "42"));
}

#[tokio::test]
async fn test_team_name_beats_domain() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new()
        .with(OptionKey::TeamName, "ops")
        .with(OptionKey::Namespace, "team1");

    let container = ContextResolver::new(&options, &rest)
        .resolve_membership_container(true)
        .await
        .unwrap();

    assert_eq!(container.kind(), "team");
}

#[tokio::test]
async fn test_target_path_resolves_application() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new().with(OptionKey::Target, "team1/blog");

    let container = ContextResolver::new(&options, &rest)
        .resolve_membership_container(false)
        .await
        .unwrap();

    assert_eq!(container.kind(), "application");
    assert_eq!(container.name(), "team1/blog");
}

#[tokio::test]
async fn test_namespace_only_resolves_domain() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new().with(OptionKey::Namespace, "team2");

    let container = ContextResolver::new(&options, &rest)
        .resolve_membership_container(true)
        .await
        .unwrap();

    assert!(matches!(container, MembershipContainer::Domain(ref d) if d.name == "team2"));
    assert_eq!(rest.calls(), vec![RestCall::FindDomain("team2".to_string())]);
}

#[tokio::test]
async fn test_writable_error_omits_application() {
    let rest = FakeRest::new();
    let options = CommandOptions::new();

    let err = ContextResolver::new(&options, &rest)
        .resolve_membership_container(true)
        .await
        .unwrap_err();

    match err {
        ContextError::Usage(msg) => {
            assert_eq!(msg, WRITABLE_CONTAINER_REQUIRED);
            assert!(!msg.contains("application"));
        }
        other => panic!("expected usage error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_read_only_error_mentions_application() {
    let rest = FakeRest::new();
    let options = CommandOptions::new();

    let err = ContextResolver::new(&options, &rest)
        .resolve_membership_container(false)
        .await
        .unwrap_err();

    assert!(matches!(&err, ContextError::Usage(msg) if msg == CONTAINER_REQUIRED));
    assert!(err.to_string().contains("application"));
}
