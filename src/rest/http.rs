//! reqwest-backed broker client.

use super::types::{Application, Domain, Envelope, GearGroup, Team};
use super::RestClient;
use crate::error::ContextError;
use crate::options::RequestOptions;
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const API_VERSION: &str = "1.7";
const BROKER_REST_PATH: &str = "/broker/rest";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// How requests authenticate against the broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic {
        login: String,
        password: Option<String>,
    },
    Token(String),
}

/// Broker client speaking the OpenShift REST API over HTTPS.
pub struct HttpRestClient {
    client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl HttpRestClient {
    pub fn new(
        server: &str,
        credentials: Option<Credentials>,
        timeout: Option<Duration>,
        insecure: bool,
    ) -> Result<Self, ContextError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT))
            .danger_accept_invalid_certs(insecure)
            .user_agent(concat!("rhc-context/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ContextError::Rest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: broker_url(server)?,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ContextError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ContextError::Rest(format!("Invalid broker URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        opts: &RequestOptions,
        not_found: impl FnOnce() -> ContextError,
    ) -> Result<T, ContextError> {
        let mut request = self
            .client
            .get(url.clone())
            .header("Accept", format!("application/json; version={}", API_VERSION));
        if let Some(include) = &opts.include {
            request = request.query(&[("include", include)]);
        }
        request = match &self.credentials {
            Some(Credentials::Basic { login, password }) => {
                request.basic_auth(login, password.as_deref())
            }
            Some(Credentials::Token(token)) => request.bearer_auth(token),
            None => request,
        };

        debug!(%url, "GET");
        let response = request.send().await.map_err(map_http_error)?;
        let status = response.status();
        let body = response.text().await.map_err(map_http_error)?;

        if !status.is_success() {
            let detail = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|e| e.message_text())
                .unwrap_or_else(|| status.to_string());
            return Err(match status {
                StatusCode::NOT_FOUND => not_found(),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    ContextError::AuthFailed(detail)
                }
                _ => ContextError::RequestFailed(format!("{} ({})", detail, status)),
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body)
            .map_err(|e| {
                ContextError::Rest(format!("Failed to parse response from {}: {}", url, e))
            })?;
        envelope
            .data
            .ok_or_else(|| ContextError::Rest(format!("Response from {} has no data", url)))
    }

    async fn gear_groups(
        &self,
        url: Url,
        opts: &RequestOptions,
    ) -> Result<Vec<GearGroup>, ContextError> {
        self.get_json(url, opts, || ContextError::Rest("Gear groups not found".to_string()))
            .await
    }
}

#[async_trait]
impl RestClient for HttpRestClient {
    async fn find_team_by_id(&self, id: &str, opts: &RequestOptions) -> Result<Team, ContextError> {
        let url = self.endpoint(&["team", id])?;
        self.get_json(url, opts, || ContextError::TeamNotFound(id.to_string()))
            .await
    }

    async fn find_team(&self, name: &str, opts: &RequestOptions) -> Result<Team, ContextError> {
        let mut url = self.endpoint(&["teams"])?;
        url.query_pairs_mut().append_pair("search", name);
        let teams: Vec<Team> = self
            .get_json(url, opts, || ContextError::TeamNotFound(name.to_string()))
            .await?;
        select_team(teams, name)
    }

    async fn find_domain(&self, name: &str) -> Result<Domain, ContextError> {
        let url = self.endpoint(&["domain", name])?;
        self.get_json(url, &RequestOptions::default(), || {
            ContextError::DomainNotFound(name.to_string())
        })
        .await
    }

    async fn domains(&self) -> Result<Vec<Domain>, ContextError> {
        let url = self.endpoint(&["domains"])?;
        self.get_json(url, &RequestOptions::default(), || {
            ContextError::Rest("Domain listing not available".to_string())
        })
        .await
    }

    async fn find_application(
        &self,
        domain: &str,
        app: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError> {
        let url = self.endpoint(&["domain", domain, "application", app])?;
        self.get_json(url, opts, || {
            ContextError::ApplicationNotFound(format!("{}/{}", domain, app))
        })
        .await
    }

    async fn find_application_by_id(
        &self,
        id: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError> {
        let url = self.endpoint(&["application", id])?;
        self.get_json(url, opts, || ContextError::ApplicationNotFound(id.to_string()))
            .await
    }

    async fn find_application_gear_groups(
        &self,
        domain: &str,
        app: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError> {
        let mut application = self.find_application(domain, app, opts).await?;
        let url = self.endpoint(&["domain", domain, "application", app, "gear_groups"])?;
        application.gear_groups = self.gear_groups(url, &RequestOptions::default()).await?;
        Ok(application)
    }

    async fn find_application_by_id_gear_groups(
        &self,
        id: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError> {
        let mut application = self.find_application_by_id(id, opts).await?;
        let url = self.endpoint(&["application", id, "gear_groups"])?;
        application.gear_groups = self.gear_groups(url, &RequestOptions::default()).await?;
        Ok(application)
    }
}

/// Broker REST root for a server given as a host or a URL.
pub fn broker_url(server: &str) -> Result<Url, ContextError> {
    let server = server.trim();
    let raw = if server.starts_with("http://") || server.starts_with("https://") {
        server.to_string()
    } else {
        format!("https://{}", server)
    };
    let mut url = Url::parse(&raw)
        .map_err(|e| ContextError::ConfigError(format!("Invalid server '{}': {}", server, e)))?;
    if url.path().is_empty() || url.path() == "/" {
        url.set_path(BROKER_REST_PATH);
    }
    Ok(url)
}

/// Exact name match among search results.
fn select_team(teams: Vec<Team>, name: &str) -> Result<Team, ContextError> {
    let mut matches: Vec<Team> = teams.into_iter().filter(|t| t.name == name).collect();
    match matches.len() {
        0 => Err(ContextError::TeamNotFound(name.to_string())),
        1 => Ok(matches.remove(0)),
        _ => Err(ContextError::MultipleTeamsFound(name.to_string())),
    }
}

fn map_http_error(error: reqwest::Error) -> ContextError {
    if error.is_timeout() {
        ContextError::RequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ContextError::RequestFailed(format!("Connection error: {}", error))
    } else {
        ContextError::Rest(format!("HTTP error: {}", error))
    }
}
