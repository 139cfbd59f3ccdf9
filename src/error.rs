//! Error types for command-context resolution.

use thiserror::Error;

/// Errors raised while resolving which domain, application or team a command targets.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The user did not supply enough information to resolve a target.
    #[error("{0}")]
    Usage(String),

    #[error("In order to deploy applications, you must create a domain with 'rhc setup' or 'rhc create-domain'.")]
    NoDomainsForUser,

    #[error("Domain {0} does not exist")]
    DomainNotFound(String),

    #[error("Application {0} does not exist")]
    ApplicationNotFound(String),

    #[error("Team {0} does not exist")]
    TeamNotFound(String),

    #[error("More than one team matches '{0}'; use --team-id to pick one")]
    MultipleTeamsFound(String),

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("REST error: {0}")]
    Rest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ContextError {
    pub fn usage(message: impl Into<String>) -> Self {
        ContextError::Usage(message.into())
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, ContextError::Usage(_))
    }

    /// Process exit code reported by the `rhc` binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            ContextError::Usage(_) => 1,
            ContextError::DomainNotFound(_) => 127,
            ContextError::NoDomainsForUser => 128,
            ContextError::ApplicationNotFound(_) => 101,
            ContextError::TeamNotFound(_) | ContextError::MultipleTeamsFound(_) => 162,
            ContextError::AuthFailed(_) => 97,
            ContextError::RequestFailed(_) | ContextError::Rest(_) => 1,
            ContextError::ConfigError(_) => 1,
        }
    }
}

impl From<config::ConfigError> for ContextError {
    fn from(err: config::ConfigError) -> Self {
        ContextError::ConfigError(err.to_string())
    }
}
