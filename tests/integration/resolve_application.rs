//! Application resolution: id, then app path, then app name within a domain.

use super::test_utils::{FakeRest, RestCall};
use rhc_context::context::{ContextResolver, APPLICATION_REQUIRED};
use rhc_context::error::ContextError;
use rhc_context::options::{CommandOptions, LookupOptions, OptionKey, RequestOptions};

fn cartridges() -> RequestOptions {
    RequestOptions {
        include: Some("cartridges".to_string()),
    }
}

#[tokio::test]
async fn test_application_id_bypasses_name_derivation() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new()
        .with(OptionKey::ApplicationId, "5302")
        .with(OptionKey::App, "team1/blog")
        .with(OptionKey::Namespace, "team1");

    let app = ContextResolver::new(&options, &rest)
        .resolve_application(&LookupOptions::default().with_include("cartridges"))
        .await
        .unwrap();

    assert_eq!(app.name, "shop");
    assert_eq!(
        rest.calls(),
        vec![RestCall::FindApplicationById("5302".to_string(), cartridges())]
    );
}

#[tokio::test]
async fn test_application_id_with_gear_groups() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new().with(OptionKey::ApplicationId, "5301");
    let lookup = LookupOptions::default()
        .with_include("cartridges")
        .with_gear_groups();

    let app = ContextResolver::new(&options, &rest)
        .resolve_application(&lookup)
        .await
        .unwrap();

    assert!(!app.gear_groups.is_empty());
    assert_eq!(
        rest.calls(),
        vec![RestCall::FindApplicationByIdGearGroups(
            "5301".to_string(),
            cartridges()
        )]
    );
    assert!(lookup.with_gear_groups, "caller's overrides are left untouched");
}

#[tokio::test]
async fn test_app_path_option() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new().with(OptionKey::App, "team2/shop");

    let app = ContextResolver::new(&options, &rest)
        .resolve_application(&LookupOptions::default())
        .await
        .unwrap();

    assert_eq!(app.id, "5302");
    assert_eq!(
        rest.calls(),
        vec![RestCall::FindApplication(
            "team2".to_string(),
            "shop".to_string(),
            RequestOptions::default()
        )]
    );
}

#[tokio::test]
async fn test_app_override_beats_option() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new()
        .with(OptionKey::App, "missing")
        .with(OptionKey::Namespace, "team1");
    let overrides = LookupOptions {
        app: Some("blog".to_string()),
        ..LookupOptions::default()
    }
    .with_gear_groups();

    let app = ContextResolver::new(&options, &rest)
        .resolve_application(&overrides)
        .await
        .unwrap();

    assert_eq!(app.id, "5301");
    assert_eq!(
        rest.calls(),
        vec![RestCall::FindApplicationGearGroups(
            "team1".to_string(),
            "blog".to_string(),
            RequestOptions::default()
        )]
    );
}

#[tokio::test]
async fn test_app_name_uses_first_domain() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new().with(OptionKey::App, "blog");

    let app = ContextResolver::new(&options, &rest)
        .resolve_application(&LookupOptions::default())
        .await
        .unwrap();

    assert_eq!(app.domain_id, "team1");
    assert_eq!(rest.calls()[0], RestCall::Domains);
}

#[tokio::test]
async fn test_no_app_is_a_usage_error() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new().with(OptionKey::Namespace, "team1");

    let err = ContextResolver::new(&options, &rest)
        .resolve_application(&LookupOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(&err, ContextError::Usage(msg) if msg == APPLICATION_REQUIRED));
    assert!(rest.calls().is_empty());
}

#[tokio::test]
async fn test_app_path_missing_domain_is_a_usage_error() {
    let rest = FakeRest::standard();
    let options = CommandOptions::new().with(OptionKey::App, "/blog");

    let err = ContextResolver::new(&options, &rest)
        .resolve_application(&LookupOptions::default())
        .await
        .unwrap_err();

    assert!(err.is_usage());
}

#[tokio::test]
async fn test_app_name_without_namespace_and_no_domains() {
    let rest = FakeRest::new();
    let options = CommandOptions::new().with(OptionKey::App, "blog");

    let err = ContextResolver::new(&options, &rest)
        .resolve_application(&LookupOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ContextError::NoDomainsForUser));
    assert_eq!(rest.calls(), vec![RestCall::Domains]);
}
