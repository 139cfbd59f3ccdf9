//! CLI parse: the clap command tree. Target options come from `crate::schema` descriptors.

use crate::error::ContextError;
use crate::options::CommandOptions;
use crate::schema::{self, FieldSpec, SchemaMode};
use clap::{Arg, ArgAction, ArgMatches, Args, Command, FromArgMatches, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// Options accepted by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Ignore saved configuration such as the configured server
    #[arg(long, global = true)]
    pub clean: bool,

    /// Configuration file path (layered over ~/.openshift/express.conf)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// OpenShift login
    #[arg(short = 'l', long, global = true, value_name = "LOGIN")]
    pub rhlogin: Option<String>,

    /// OpenShift password (or RHC_PASSWORD)
    #[arg(short = 'p', long, global = true, env = "RHC_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Authorization token
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Subcommands and the target schema each one takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetCommand {
    /// `domain show`
    DomainShow,
    /// `app show`
    AppShow,
    /// `team show`
    TeamShow,
    /// `member list`: read-only, a domain, application or team
    MemberList,
    /// `member manage`: writable, a domain or team
    MemberManage,
    /// `server`
    Server,
}

impl TargetCommand {
    pub fn fields(&self) -> Vec<FieldSpec> {
        match self {
            TargetCommand::DomainShow => schema::takes_domain(SchemaMode::argument()),
            TargetCommand::AppShow => schema::takes_application(SchemaMode::argument()),
            TargetCommand::TeamShow => schema::takes_team(SchemaMode::argument()),
            TargetCommand::MemberList => {
                schema::takes_membership_container(SchemaMode::argument())
            }
            TargetCommand::MemberManage => {
                schema::takes_membership_container(SchemaMode::argument().writable())
            }
            TargetCommand::Server => Vec::new(),
        }
    }

    fn subcommand(&self, name: &'static str, about: &'static str) -> Command {
        schema::apply(Command::new(name).about(about), &self.fields())
    }
}

/// Parsed command line.
#[derive(Debug, Clone)]
pub struct Cli {
    pub global: GlobalArgs,
    pub command: TargetCommand,
    /// Target options as given on the command line, before defaults.
    pub options: CommandOptions,
    /// `app show --gears`
    pub gears: bool,
}

impl Cli {
    /// The full clap command tree.
    pub fn command() -> Command {
        let root = Command::new("rhc")
            .about("Resolve OpenShift domains, applications and teams")
            .version(env!("CARGO_PKG_VERSION"))
            .subcommand_required(true)
            .arg_required_else_help(true);
        let root = schema::apply(GlobalArgs::augment_args(root), &schema::takes_server());

        root.subcommand(
            Command::new("domain")
                .about("Inspect domains")
                .subcommand_required(true)
                .subcommand(TargetCommand::DomainShow.subcommand("show", "Display a domain")),
        )
        .subcommand(
            Command::new("app")
                .about("Inspect applications")
                .subcommand_required(true)
                .subcommand(
                    TargetCommand::AppShow
                        .subcommand("show", "Display an application")
                        .arg(
                            Arg::new("gears")
                                .long("gears")
                                .help("Include gear groups")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("team")
                .about("Inspect teams")
                .subcommand_required(true)
                .subcommand(TargetCommand::TeamShow.subcommand("show", "Display a team")),
        )
        .subcommand(
            Command::new("member")
                .about("Resolve membership targets")
                .subcommand_required(true)
                .subcommand(TargetCommand::MemberList.subcommand(
                    "list",
                    "Show the domain, application or team whose members would be listed",
                ))
                .subcommand(TargetCommand::MemberManage.subcommand(
                    "manage",
                    "Show the domain or team whose membership would be changed",
                )),
        )
        .subcommand(Command::new("server").about("Display the server commands will talk to"))
    }

    pub fn parse() -> Self {
        let matches = Self::command().get_matches();
        match Self::from_matches(&matches) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Self::from_matches(&matches)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
        let global = GlobalArgs::from_arg_matches(matches)?;
        let (command, leaf) = route_matches(matches).map_err(|e| {
            clap::Error::raw(clap::error::ErrorKind::InvalidSubcommand, e.to_string())
        })?;
        let mut options = CommandOptions::from_matches(leaf);
        options.clean = options.clean || global.clean;
        let gears = leaf
            .try_get_one::<bool>("gears")
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false);

        Ok(Self {
            global,
            command,
            options,
            gears,
        })
    }
}

fn route_matches(matches: &ArgMatches) -> Result<(TargetCommand, &ArgMatches), ContextError> {
    let unknown = || ContextError::usage("Unknown command; run 'rhc --help'");
    match matches.subcommand() {
        Some(("domain", sub)) => match sub.subcommand() {
            Some(("show", leaf)) => Ok((TargetCommand::DomainShow, leaf)),
            _ => Err(unknown()),
        },
        Some(("app", sub)) => match sub.subcommand() {
            Some(("show", leaf)) => Ok((TargetCommand::AppShow, leaf)),
            _ => Err(unknown()),
        },
        Some(("team", sub)) => match sub.subcommand() {
            Some(("show", leaf)) => Ok((TargetCommand::TeamShow, leaf)),
            _ => Err(unknown()),
        },
        Some(("member", sub)) => match sub.subcommand() {
            Some(("list", leaf)) => Ok((TargetCommand::MemberList, leaf)),
            Some(("manage", leaf)) => Ok((TargetCommand::MemberManage, leaf)),
            _ => Err(unknown()),
        },
        Some(("server", leaf)) => Ok((TargetCommand::Server, leaf)),
        _ => Err(unknown()),
    }
}
