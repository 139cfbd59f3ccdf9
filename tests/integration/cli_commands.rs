//! End-to-end command routing: argv -> defaults -> resolver -> rendered output.

use super::test_utils::{FakeGit, FakeRest, RestCall};
use rhc_context::cli::{map_error, Cli, RunContext};
use rhc_context::config::RhcConfig;
use rhc_context::options::RequestOptions;
use rhc_context::server::ServerContext;
use std::sync::Arc;

fn context(git: Arc<FakeGit>) -> RunContext {
    RunContext::with_parts(
        RhcConfig::default(),
        ServerContext::new(None, Some("broker.example.com".to_string())),
        Box::new(git),
    )
}

fn cartridges() -> RequestOptions {
    RequestOptions {
        include: Some("cartridges".to_string()),
    }
}

#[tokio::test]
async fn test_app_show_inside_git_clone_uses_application_id() {
    let git = Arc::new(FakeGit::cloned_app());
    let ctx = context(git.clone());
    let rest = FakeRest::standard();
    let cli = Cli::try_parse_from(["rhc", "app", "show"]).unwrap();

    let output = ctx.execute_with(&cli, &rest).await.unwrap();

    assert!(output.contains("team1/blog"));
    assert_eq!(
        rest.calls(),
        vec![RestCall::FindApplicationById("5301".to_string(), cartridges())]
    );
    for key in ["rhc.app-id", "rhc.app-name", "rhc.domain-name"] {
        assert_eq!(git.reads(key), 1, "{} read more than once", key);
    }
}

#[tokio::test]
async fn test_explicit_app_skips_git_application_id() {
    let ctx = context(Arc::new(FakeGit::cloned_app()));
    let rest = FakeRest::standard();
    let cli =
        Cli::try_parse_from(["rhc", "app", "show", "shop", "-n", "team2", "--gears"]).unwrap();

    let output = ctx.execute_with(&cli, &rest).await.unwrap();

    assert!(output.contains("team2/shop"));
    assert_eq!(
        rest.calls(),
        vec![RestCall::FindApplicationGearGroups(
            "team2".to_string(),
            "shop".to_string(),
            cartridges()
        )]
    );
}

#[tokio::test]
async fn test_domain_show_defaults_from_git() {
    let ctx = context(Arc::new(FakeGit::cloned_app()));
    let rest = FakeRest::standard();
    let cli = Cli::try_parse_from(["rhc", "domain", "show", "--format", "json"]).unwrap();

    let output = ctx.execute_with(&cli, &rest).await.unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["name"], "team1");
    assert_eq!(rest.calls(), vec![RestCall::FindDomain("team1".to_string())]);
}

#[tokio::test]
async fn test_member_list_json_reports_kind() {
    let ctx = context(Arc::new(FakeGit::empty()));
    let rest = FakeRest::standard();
    let cli = Cli::try_parse_from(["rhc", "member", "list", "team1/blog", "--format", "json"])
        .unwrap();

    let output = ctx.execute_with(&cli, &rest).await.unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["kind"], "application");
    assert_eq!(value["name"], "blog");
}

#[tokio::test]
async fn test_member_manage_outside_git_without_target_fails() {
    let ctx = context(Arc::new(FakeGit::empty()));
    let rest = FakeRest::standard();
    let cli = Cli::try_parse_from(["rhc", "member", "manage"]).unwrap();

    let err = ctx.execute_with(&cli, &rest).await.unwrap_err();

    assert!(err.is_usage());
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        map_error(&err),
        "You must specify a domain with -n, or a team with -t."
    );
}

#[tokio::test]
async fn test_member_manage_defaults_namespace_from_git() {
    let ctx = context(Arc::new(FakeGit::cloned_app()));
    let rest = FakeRest::standard();
    let cli = Cli::try_parse_from(["rhc", "member", "manage"]).unwrap();

    let output = ctx.execute_with(&cli, &rest).await.unwrap();

    assert!(output.starts_with("Target domain 'team1'"));
}

#[tokio::test]
async fn test_team_show_by_name() {
    let ctx = context(Arc::new(FakeGit::empty()));
    let rest = FakeRest::standard();
    let cli = Cli::try_parse_from(["rhc", "team", "show", "ops"]).unwrap();

    let output = ctx.execute_with(&cli, &rest).await.unwrap();

    assert!(output.contains("42"));
}

#[tokio::test]
async fn test_server_command_respects_clean() {
    let ctx = context(Arc::new(FakeGit::empty()));
    let rest = FakeRest::standard();

    let cli = Cli::try_parse_from(["rhc", "server"]).unwrap();
    assert_eq!(ctx.execute_with(&cli, &rest).await.unwrap(), "broker.example.com");

    let cli = Cli::try_parse_from(["rhc", "server", "--clean"]).unwrap();
    assert_eq!(
        ctx.execute_with(&cli, &rest).await.unwrap(),
        "openshift.redhat.com"
    );

    let cli = Cli::try_parse_from(["rhc", "--server", "explicit.example.com", "server"]).unwrap();
    assert_eq!(
        ctx.execute_with(&cli, &rest).await.unwrap(),
        "explicit.example.com"
    );
    assert!(rest.calls().is_empty());
}
