//! Shared fakes for integration tests
//!
//! `FakeRest` answers lookups from in-memory entities and records every call, so tests can
//! assert which lookup path a resolver took. `FakeGit` serves fixed git config values.

use async_trait::async_trait;
use rhc_context::error::ContextError;
use rhc_context::git::GitConfigReader;
use rhc_context::options::RequestOptions;
use rhc_context::rest::{Application, Domain, GearGroup, RestClient, Team};
use std::collections::HashMap;
use std::sync::Mutex;

/// One recorded REST call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestCall {
    FindTeamById(String, RequestOptions),
    FindTeam(String, RequestOptions),
    FindDomain(String),
    Domains,
    FindApplication(String, String, RequestOptions),
    FindApplicationById(String, RequestOptions),
    FindApplicationGearGroups(String, String, RequestOptions),
    FindApplicationByIdGearGroups(String, RequestOptions),
}

#[derive(Default)]
pub struct FakeRest {
    pub domains: Vec<Domain>,
    pub applications: Vec<Application>,
    pub teams: Vec<Team>,
    calls: Mutex<Vec<RestCall>>,
}

pub fn domain(name: &str) -> Domain {
    Domain {
        id: format!("id-{}", name),
        name: name.to_string(),
        suffix: Some("rhcloud.com".to_string()),
        creation_time: None,
    }
}

pub fn application(domain: &str, name: &str, id: &str) -> Application {
    Application {
        id: id.to_string(),
        name: name.to_string(),
        domain_id: domain.to_string(),
        framework: Some("php-5.4".to_string()),
        app_url: None,
        git_url: None,
        gear_count: Some(1),
        scalable: false,
        creation_time: None,
        gear_groups: Vec::new(),
    }
}

pub fn team(id: &str, name: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        global: false,
    }
}

impl FakeRest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Broker that only knows the given domains.
    pub fn with_domains(domains: Vec<Domain>) -> Self {
        Self {
            domains,
            ..Self::default()
        }
    }

    /// Broker with domain `team1` holding app `blog` (id 5301) and team `ops` (id 42).
    pub fn standard() -> Self {
        Self {
            domains: vec![domain("team1"), domain("team2")],
            applications: vec![
                application("team1", "blog", "5301"),
                application("team2", "shop", "5302"),
            ],
            teams: vec![team("42", "ops")],
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RestCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn record(&self, call: RestCall) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(call);
    }

    fn with_gear_groups(mut app: Application) -> Application {
        app.gear_groups = vec![GearGroup {
            id: format!("gg-{}", app.id),
            name: "web".to_string(),
            gear_profile: Some("small".to_string()),
            cartridges: Vec::new(),
            gears: Vec::new(),
        }];
        app
    }

    fn app_by_path(&self, domain: &str, name: &str) -> Result<Application, ContextError> {
        self.applications
            .iter()
            .find(|a| a.domain_id == domain && a.name == name)
            .cloned()
            .ok_or_else(|| ContextError::ApplicationNotFound(format!("{}/{}", domain, name)))
    }

    fn app_by_id(&self, id: &str) -> Result<Application, ContextError> {
        self.applications
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| ContextError::ApplicationNotFound(id.to_string()))
    }
}

#[async_trait]
impl RestClient for FakeRest {
    async fn find_team_by_id(&self, id: &str, opts: &RequestOptions) -> Result<Team, ContextError> {
        self.record(RestCall::FindTeamById(id.to_string(), opts.clone()));
        self.teams
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| ContextError::TeamNotFound(id.to_string()))
    }

    async fn find_team(&self, name: &str, opts: &RequestOptions) -> Result<Team, ContextError> {
        self.record(RestCall::FindTeam(name.to_string(), opts.clone()));
        self.teams
            .iter()
            .find(|t| t.name == name)
            .cloned()
            .ok_or_else(|| ContextError::TeamNotFound(name.to_string()))
    }

    async fn find_domain(&self, name: &str) -> Result<Domain, ContextError> {
        self.record(RestCall::FindDomain(name.to_string()));
        self.domains
            .iter()
            .find(|d| d.name == name)
            .cloned()
            .ok_or_else(|| ContextError::DomainNotFound(name.to_string()))
    }

    async fn domains(&self) -> Result<Vec<Domain>, ContextError> {
        self.record(RestCall::Domains);
        Ok(self.domains.clone())
    }

    async fn find_application(
        &self,
        domain: &str,
        app: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError> {
        self.record(RestCall::FindApplication(
            domain.to_string(),
            app.to_string(),
            opts.clone(),
        ));
        self.app_by_path(domain, app)
    }

    async fn find_application_by_id(
        &self,
        id: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError> {
        self.record(RestCall::FindApplicationById(id.to_string(), opts.clone()));
        self.app_by_id(id)
    }

    async fn find_application_gear_groups(
        &self,
        domain: &str,
        app: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError> {
        self.record(RestCall::FindApplicationGearGroups(
            domain.to_string(),
            app.to_string(),
            opts.clone(),
        ));
        self.app_by_path(domain, app).map(Self::with_gear_groups)
    }

    async fn find_application_by_id_gear_groups(
        &self,
        id: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError> {
        self.record(RestCall::FindApplicationByIdGearGroups(id.to_string(), opts.clone()));
        self.app_by_id(id).map(Self::with_gear_groups)
    }
}

/// Fixed git configuration; counts reads per key.
#[derive(Default)]
pub struct FakeGit {
    values: HashMap<String, String>,
    reads: Mutex<HashMap<String, usize>>,
}

impl FakeGit {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Git config of a clone of `team1/blog`.
    pub fn cloned_app() -> Self {
        Self::with_values(&[
            ("rhc.app-id", "5301"),
            ("rhc.app-name", "blog"),
            ("rhc.domain-name", "team1"),
        ])
    }

    pub fn with_values(values: &[(&str, &str)]) -> Self {
        Self {
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            reads: Mutex::new(HashMap::new()),
        }
    }

    pub fn reads(&self, key: &str) -> usize {
        self.reads
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .copied()
            .unwrap_or(0)
    }
}

impl GitConfigReader for FakeGit {
    fn git_config_get(&self, key: &str) -> Option<String> {
        *self
            .reads
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .entry(key.to_string())
            .or_insert(0) += 1;
        self.values.get(key).cloned()
    }
}
