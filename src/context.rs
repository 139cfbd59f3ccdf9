//! Context resolution: turn parsed options into the domain, application or team a command
//! acts on.
//!
//! Lookup order is explicit ID, then explicit name, then git-derived defaults (already merged
//! into the options), then the current user's first domain.

use crate::error::ContextError;
use crate::options::{present, CommandOptions, LookupOptions, RequestOptions};
use crate::rest::{Application, Domain, MembershipContainer, RestClient, Team};
use tracing::debug;

pub const TEAM_REQUIRED: &str =
    "You must specify a team name with -t, or a team id with --team-id.";
pub const DOMAIN_REQUIRED: &str = "You must specify a domain with -n.";
pub const WRITABLE_CONTAINER_REQUIRED: &str =
    "You must specify a domain with -n, or a team with -t.";
pub const CONTAINER_REQUIRED: &str =
    "You must specify a domain with -n, an application with -a, or a team with -t.";
pub const APPLICATION_REQUIRED: &str =
    "You must specify an application with -a, or run this command from within Git directory cloned from OpenShift.";

/// A `(domain, app)` pair where either side may be unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredTarget {
    pub domain: Option<String>,
    pub app: Option<String>,
}

/// Split `domain` or `domain/application` notation.
///
/// Only the first two segments are used and empty segments count as absent.
pub fn split_target(value: &str) -> DiscoveredTarget {
    let mut parts = value.split('/');
    let mut next = || {
        parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    let domain = next();
    let app = next();
    DiscoveredTarget { domain, app }
}

/// Resolves targets for one command invocation.
pub struct ContextResolver<'a> {
    options: &'a CommandOptions,
    rest: &'a dyn RestClient,
}

impl<'a> ContextResolver<'a> {
    pub fn new(options: &'a CommandOptions, rest: &'a dyn RestClient) -> Self {
        Self { options, rest }
    }

    pub async fn resolve_team(&self, overrides: &LookupOptions) -> Result<Team, ContextError> {
        if let Some(id) = present(self.options.team_id.as_deref()) {
            debug!(team_id = id, "Resolving team by id");
            return self.rest.find_team_by_id(id, &overrides.request).await;
        }
        let team_name = present(overrides.team_name.as_deref())
            .or_else(|| present(self.options.team_name.as_deref()));
        match team_name {
            Some(name) => {
                debug!(team_name = name, "Resolving team by name");
                self.rest.find_team(name, &overrides.request).await
            }
            None => Err(ContextError::usage(TEAM_REQUIRED)),
        }
    }

    pub async fn resolve_domain(&self) -> Result<Domain, ContextError> {
        let explicit = present(self.options.namespace.as_deref())
            .or_else(|| present(self.options.target.as_deref()))
            .map(str::to_string);
        let domain = match explicit {
            Some(name) => Some(name),
            None => self.first_domain().await?,
        };
        match domain {
            Some(name) => {
                debug!(domain = %name, "Resolving domain");
                self.rest.find_domain(&name).await
            }
            None => Err(ContextError::usage(DOMAIN_REQUIRED)),
        }
    }

    /// Resolve whatever holds members: a team, an application or a domain.
    ///
    /// Writable commands cannot target an application, which only changes the error text.
    pub async fn resolve_membership_container(
        &self,
        writable: bool,
    ) -> Result<MembershipContainer, ContextError> {
        let target = self.discover_domain_and_app().await?.unwrap_or_default();
        let no_request = RequestOptions::default();

        if let Some(id) = present(self.options.team_id.as_deref()) {
            debug!(team_id = id, "Membership container is a team (id)");
            return Ok(MembershipContainer::Team(
                self.rest.find_team_by_id(id, &no_request).await?,
            ));
        }
        if let Some(name) = present(self.options.team_name.as_deref()) {
            debug!(team_name = name, "Membership container is a team");
            return Ok(MembershipContainer::Team(
                self.rest.find_team(name, &no_request).await?,
            ));
        }
        match (target.domain.as_deref(), target.app.as_deref()) {
            (Some(domain), Some(app)) => {
                debug!(domain, app, "Membership container is an application");
                Ok(MembershipContainer::Application(
                    self.rest.find_application(domain, app, &no_request).await?,
                ))
            }
            (Some(domain), None) => {
                debug!(domain, "Membership container is a domain");
                Ok(MembershipContainer::Domain(self.rest.find_domain(domain).await?))
            }
            _ if writable => Err(ContextError::usage(WRITABLE_CONTAINER_REQUIRED)),
            _ => Err(ContextError::usage(CONTAINER_REQUIRED)),
        }
    }

    pub async fn resolve_application(
        &self,
        overrides: &LookupOptions,
    ) -> Result<Application, ContextError> {
        let mut lookup = overrides.clone();
        let with_gear_groups = lookup.take_gear_groups();

        if let Some(id) = present(self.options.application_id.as_deref()) {
            debug!(application_id = id, with_gear_groups, "Resolving application by id");
            return if with_gear_groups {
                self.rest
                    .find_application_by_id_gear_groups(id, &lookup.request)
                    .await
            } else {
                self.rest.find_application_by_id(id, &lookup.request).await
            };
        }

        let app_option =
            present(lookup.app.as_deref()).or_else(|| present(self.options.app.as_deref()));
        let target = match app_option {
            Some(app) if app.contains('/') => split_target(app),
            Some(app) => DiscoveredTarget {
                domain: self.namespace_or_first_domain().await?,
                app: Some(app.to_string()),
            },
            None => DiscoveredTarget::default(),
        };

        match (target.domain.as_deref(), target.app.as_deref()) {
            (Some(domain), Some(app)) => {
                debug!(domain, app, with_gear_groups, "Resolving application");
                if with_gear_groups {
                    self.rest
                        .find_application_gear_groups(domain, app, &lookup.request)
                        .await
                } else {
                    self.rest.find_application(domain, app, &lookup.request).await
                }
            }
            _ => Err(ContextError::usage(APPLICATION_REQUIRED)),
        }
    }

    /// Work out `(domain, app)` from `--target`, `--app` and `--namespace`.
    ///
    /// `None` when none of them was given.
    pub async fn discover_domain_and_app(&self) -> Result<Option<DiscoveredTarget>, ContextError> {
        if let Some(target) = present(self.options.target.as_deref()) {
            return Ok(Some(split_target(target)));
        }
        let namespace = present(self.options.namespace.as_deref());
        let app = present(self.options.app.as_deref());
        if namespace.is_none() && app.is_none() {
            return Ok(None);
        }
        if let Some(app) = app.filter(|a| a.contains('/')) {
            return Ok(Some(split_target(app)));
        }
        Ok(Some(DiscoveredTarget {
            domain: self.namespace_or_first_domain().await?,
            app: app.map(str::to_string),
        }))
    }

    /// Name of the current user's first domain.
    pub async fn namespace_context(&self) -> Result<String, ContextError> {
        self.first_domain()
            .await?
            .ok_or(ContextError::NoDomainsForUser)
    }

    async fn namespace_or_first_domain(&self) -> Result<Option<String>, ContextError> {
        match present(self.options.namespace.as_deref()) {
            Some(namespace) => Ok(Some(namespace.to_string())),
            None => self.namespace_context().await.map(Some),
        }
    }

    async fn first_domain(&self) -> Result<Option<String>, ContextError> {
        let domains = self.rest.domains().await?;
        let first = domains.into_iter().next().map(|d| d.name);
        debug!(domain = ?first, "First domain for current user");
        Ok(first)
    }
}
