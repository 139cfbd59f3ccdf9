//! CLI route: run context and the single dispatch table from parsed command to resolver.

use crate::cli::help::command_name;
use crate::cli::parse::{Cli, OutputFormat, TargetCommand};
use crate::cli::presentation::{
    format_application_text, format_container_text, format_domain_text, format_json,
    format_team_text,
};
use crate::config::{ConfigLoader, RhcConfig};
use crate::context::ContextResolver;
use crate::error::ContextError;
use crate::git::{GitCli, GitConfigReader, LocalGitDefaults};
use crate::options::{CommandOptions, LookupOptions};
use crate::rest::{Credentials, HttpRestClient, RestClient};
use crate::schema::{self, InvocationDefaults};
use crate::server::ServerContext;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Everything one invocation needs besides the REST transport.
pub struct RunContext {
    config: RhcConfig,
    server: ServerContext,
    git: LocalGitDefaults<Box<dyn GitConfigReader>>,
}

impl RunContext {
    /// Load configuration and read git metadata from the current directory.
    pub fn new(cli: &Cli) -> Result<Self, ContextError> {
        let config = ConfigLoader::load_with_file(cli.global.config.as_deref())?;
        let server = ServerContext::from_env(&config);
        Ok(Self::with_parts(config, server, Box::new(GitCli::current_dir())))
    }

    pub fn with_parts(
        config: RhcConfig,
        server: ServerContext,
        git: Box<dyn GitConfigReader>,
    ) -> Self {
        Self {
            config,
            server,
            git: LocalGitDefaults::new(git),
        }
    }

    /// Command options with every applicable default hook applied.
    pub fn resolve_options(&self, cli: &Cli) -> CommandOptions {
        let mut fields = schema::takes_server();
        fields.extend(cli.command.fields());

        let mut options = cli.options.clone();
        let provider = InvocationDefaults {
            git: &self.git,
            server: &self.server,
        };
        schema::apply_defaults(&fields, &mut options, &provider);
        debug!(command = command_name(cli.command), ?options, "Resolved command options");
        options
    }

    /// Build the HTTP client for the resolved server and run the command.
    pub async fn execute(&self, cli: &Cli) -> Result<String, ContextError> {
        let options = self.resolve_options(cli);
        let server = options
            .server
            .clone()
            .unwrap_or_else(|| self.server.server_context(options.clean));
        if cli.command == TargetCommand::Server {
            return Ok(server);
        }

        let timeout = cli
            .global
            .timeout
            .map(Duration::from_secs)
            .or_else(|| self.config.request_timeout());
        let rest = HttpRestClient::new(
            &server,
            self.credentials(cli),
            timeout,
            self.config.insecure,
        )?;
        info!(server = %rest.base_url(), command = command_name(cli.command), "Using broker");
        self.run(cli, &options, &rest).await
    }

    /// Run the command against an arbitrary REST client.
    pub async fn execute_with(
        &self,
        cli: &Cli,
        rest: &dyn RestClient,
    ) -> Result<String, ContextError> {
        let options = self.resolve_options(cli);
        self.run(cli, &options, rest).await
    }

    async fn run(
        &self,
        cli: &Cli,
        options: &CommandOptions,
        rest: &dyn RestClient,
    ) -> Result<String, ContextError> {
        let resolver = ContextResolver::new(options, rest);
        let format = cli.global.format;

        match cli.command {
            TargetCommand::DomainShow => {
                let domain = resolver.resolve_domain().await?;
                render(format, &domain, format_domain_text)
            }
            TargetCommand::AppShow => {
                let mut lookup = LookupOptions::default().with_include("cartridges");
                if cli.gears {
                    lookup = lookup.with_gear_groups();
                }
                let app = resolver.resolve_application(&lookup).await?;
                render(format, &app, format_application_text)
            }
            TargetCommand::TeamShow => {
                let team = resolver.resolve_team(&LookupOptions::default()).await?;
                render(format, &team, format_team_text)
            }
            TargetCommand::MemberList => {
                let container = resolver.resolve_membership_container(false).await?;
                render(format, &container, format_container_text)
            }
            TargetCommand::MemberManage => {
                let container = resolver.resolve_membership_container(true).await?;
                render(format, &container, format_container_text)
            }
            TargetCommand::Server => Ok(options
                .server
                .clone()
                .unwrap_or_else(|| self.server.server_context(options.clean))),
        }
    }

    fn credentials(&self, cli: &Cli) -> Option<Credentials> {
        if let Some(token) = &cli.global.token {
            return Some(Credentials::Token(token.clone()));
        }
        cli.global
            .rhlogin
            .clone()
            .or_else(|| self.config.default_rhlogin.clone())
            .map(|login| Credentials::Basic {
                login,
                password: cli.global.password.clone(),
            })
    }
}

fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl Fn(&T) -> String,
) -> Result<String, ContextError> {
    match format {
        OutputFormat::Json => format_json(value),
        OutputFormat::Text => Ok(text(value)),
    }
}
