//! Broker REST API
//!
//! The lookups the context resolvers need from the OpenShift broker, behind a trait so that
//! commands and tests can swap the transport.

use crate::error::ContextError;
use crate::options::RequestOptions;
use async_trait::async_trait;

pub mod http;
pub mod types;

pub use http::{Credentials, HttpRestClient};
pub use types::{Application, Domain, Gear, GearGroup, MembershipContainer, Team};

/// Entity lookups against the broker.
#[async_trait]
pub trait RestClient: Send + Sync {
    async fn find_team_by_id(&self, id: &str, opts: &RequestOptions) -> Result<Team, ContextError>;

    async fn find_team(&self, name: &str, opts: &RequestOptions) -> Result<Team, ContextError>;

    async fn find_domain(&self, name: &str) -> Result<Domain, ContextError>;

    /// Domains owned by the current user, oldest first.
    async fn domains(&self) -> Result<Vec<Domain>, ContextError>;

    async fn find_application(
        &self,
        domain: &str,
        app: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError>;

    async fn find_application_by_id(
        &self,
        id: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError>;

    /// Like `find_application`, with `gear_groups` populated.
    async fn find_application_gear_groups(
        &self,
        domain: &str,
        app: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError>;

    /// Like `find_application_by_id`, with `gear_groups` populated.
    async fn find_application_by_id_gear_groups(
        &self,
        id: &str,
        opts: &RequestOptions,
    ) -> Result<Application, ContextError>;
}
