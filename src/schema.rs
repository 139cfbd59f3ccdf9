//! Option schemas for commands that target a domain, application or team.
//!
//! Each `takes_*` builder is pure: it returns field descriptors. `apply` turns descriptors into
//! clap arguments and `apply_defaults` runs their default hooks once the command line is parsed.

use crate::git::{GitConfigReader, LocalGitDefaults};
use crate::options::{positional_id, CommandOptions, OptionKey};
use crate::server::ServerContext;
use clap::{Arg, ArgAction, Command};
use std::collections::HashSet;
use tracing::trace;

/// How a builder should register its primary field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaMode {
    /// Accept the primary field as a positional argument as well as a switch.
    pub argument: bool,
    /// The command modifies the target; applications cannot be targeted.
    pub writable: bool,
}

impl SchemaMode {
    pub fn argument() -> Self {
        Self {
            argument: true,
            writable: false,
        }
    }

    pub fn option() -> Self {
        Self::default()
    }

    pub fn writable(mut self) -> Self {
        self.writable = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Argument,
    Option,
}

/// Where an unset field gets its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultHook {
    FromLocalGit,
    ServerContext,
}

/// Declarative description of one option or argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: OptionKey,
    pub kind: FieldKind,
    pub short: Option<char>,
    pub long: &'static str,
    pub value_name: &'static str,
    pub help: &'static str,
    pub allow_nil: bool,
    pub default: Option<DefaultHook>,
    /// Supplying any of these keys makes this field unnecessary.
    pub covered_by: Vec<OptionKey>,
    pub hidden: bool,
    pub global: bool,
}

impl FieldSpec {
    fn option(
        key: OptionKey,
        short: Option<char>,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            key,
            kind: FieldKind::Option,
            short,
            long,
            value_name,
            help,
            allow_nil: true,
            default: None,
            covered_by: Vec::new(),
            hidden: false,
            global: false,
        }
    }

    fn argument(
        key: OptionKey,
        short: Option<char>,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            kind: FieldKind::Argument,
            ..Self::option(key, short, long, value_name, help)
        }
    }

    fn primary(
        mode: SchemaMode,
        key: OptionKey,
        short: Option<char>,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
    ) -> Self {
        if mode.argument {
            Self::argument(key, short, long, value_name, help)
        } else {
            Self::option(key, short, long, value_name, help)
        }
    }

    fn default_from(mut self, hook: DefaultHook) -> Self {
        self.default = Some(hook);
        self
    }

    fn covered_by(mut self, keys: &[OptionKey]) -> Self {
        self.covered_by = keys.to_vec();
        self
    }

    fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Switch spelling as shown in help, e.g. `["-t", "--team-name NAME"]`.
    pub fn switches(&self) -> Vec<String> {
        let mut switches = Vec::new();
        if let Some(short) = self.short {
            switches.push(format!("-{}", short));
        }
        switches.push(format!("--{} {}", self.long, self.value_name));
        switches
    }
}

pub const TEAM_NAME_HELP: &str = "Name of a team";
pub const TEAM_ID_HELP: &str = "ID of a team";
pub const DOMAIN_HELP: &str = "Name of a domain";
pub const APP_HELP: &str = "Name of an application";
pub const APPLICATION_ID_HELP: &str = "ID of an application";
pub const TARGET_HELP: &str =
    "The name of a domain, or an application name with domain (domain or domain/application)";
pub const SERVER_HELP: &str = "An OpenShift server hostname (default: openshift.redhat.com)";

fn team_id_option() -> FieldSpec {
    FieldSpec::option(OptionKey::TeamId, None, "team-id", "ID", TEAM_ID_HELP)
}

fn namespace_option() -> FieldSpec {
    FieldSpec::option(OptionKey::Namespace, Some('n'), "namespace", "NAME", DOMAIN_HELP)
}

pub fn takes_team(mode: SchemaMode) -> Vec<FieldSpec> {
    vec![
        FieldSpec::primary(
            mode,
            OptionKey::TeamName,
            Some('t'),
            "team-name",
            "NAME",
            TEAM_NAME_HELP,
        )
        .covered_by(&[OptionKey::TeamId]),
        team_id_option().covered_by(&[OptionKey::TeamName]),
    ]
}

pub fn takes_domain(mode: SchemaMode) -> Vec<FieldSpec> {
    vec![
        FieldSpec::primary(mode, OptionKey::Namespace, Some('n'), "namespace", "NAME", DOMAIN_HELP)
            .default_from(DefaultHook::FromLocalGit),
    ]
}

pub fn takes_membership_container(mode: SchemaMode) -> Vec<FieldSpec> {
    let mut fields = Vec::new();
    if mode.argument {
        if mode.writable {
            fields.push(
                FieldSpec::argument(
                    OptionKey::Namespace,
                    Some('n'),
                    "namespace",
                    "NAME",
                    DOMAIN_HELP,
                )
                .default_from(DefaultHook::FromLocalGit),
            );
        } else {
            fields.push(
                FieldSpec::argument(OptionKey::Target, None, "target", "NAME_OR_PATH", TARGET_HELP)
                    .covered_by(&[OptionKey::ApplicationId, OptionKey::Namespace, OptionKey::App]),
            );
        }
    }
    fields.push(namespace_option());
    if !mode.writable {
        fields.push(FieldSpec::option(OptionKey::App, Some('a'), "app", "NAME", APP_HELP));
    }
    fields.push(FieldSpec::option(
        OptionKey::TeamName,
        Some('t'),
        "team-name",
        "NAME",
        TEAM_NAME_HELP,
    ));
    fields.push(team_id_option());
    fields
}

pub fn takes_application(mode: SchemaMode) -> Vec<FieldSpec> {
    vec![
        FieldSpec::primary(mode, OptionKey::App, Some('a'), "app", "NAME", APP_HELP)
            .default_from(DefaultHook::FromLocalGit)
            .covered_by(&[OptionKey::ApplicationId]),
        namespace_option().default_from(DefaultHook::FromLocalGit),
        FieldSpec::option(
            OptionKey::ApplicationId,
            None,
            "application-id",
            "ID",
            APPLICATION_ID_HELP,
        )
        .hidden()
        .default_from(DefaultHook::FromLocalGit)
        .covered_by(&[OptionKey::App]),
    ]
}

/// The global `--server` option.
pub fn takes_server() -> Vec<FieldSpec> {
    let mut server = FieldSpec::option(OptionKey::Server, None, "server", "NAME", SERVER_HELP)
        .default_from(DefaultHook::ServerContext);
    server.global = true;
    vec![server]
}

/// Register descriptors on a clap command.
///
/// A key registered twice keeps its first registration. Argument fields add a positional
/// slot next to their named switch.
pub fn apply(mut cmd: Command, fields: &[FieldSpec]) -> Command {
    let mut registered: HashSet<String> = cmd
        .get_arguments()
        .map(|a| a.get_id().as_str().to_string())
        .collect();

    for field in fields {
        if field.kind == FieldKind::Argument {
            let id = positional_id(field.key);
            if registered.insert(id.to_string()) {
                cmd = cmd.arg(
                    Arg::new(id)
                        .value_name(field.value_name)
                        .help(field.help)
                        .required(!field.allow_nil)
                        .action(ArgAction::Set),
                );
            }
        }

        let id = field.key.as_str();
        if registered.insert(id.to_string()) {
            let mut arg = Arg::new(id)
                .long(field.long)
                .value_name(field.value_name)
                .help(field.help)
                .hide(field.hidden)
                .global(field.global)
                .action(ArgAction::Set);
            if let Some(short) = field.short {
                arg = arg.short(short);
            }
            cmd = cmd.arg(arg);
        }
    }
    cmd
}

/// Supplies values for `DefaultHook`s.
pub trait DefaultProvider {
    fn apply_default(&self, hook: DefaultHook, defaults: &mut CommandOptions, key: OptionKey);
}

/// Git metadata and server precedence for one invocation.
pub struct InvocationDefaults<'a, G> {
    pub git: &'a LocalGitDefaults<G>,
    pub server: &'a ServerContext,
}

impl<G: GitConfigReader> DefaultProvider for InvocationDefaults<'_, G> {
    fn apply_default(&self, hook: DefaultHook, defaults: &mut CommandOptions, key: OptionKey) {
        match hook {
            DefaultHook::FromLocalGit => {
                self.git.from_local_git(defaults, key);
            }
            DefaultHook::ServerContext => {
                self.server.server_default(defaults, key);
            }
        }
    }
}

/// Run default hooks for every unset field not covered by an explicitly supplied key.
///
/// Coverage is judged against the values the user supplied, not values filled in here.
pub fn apply_defaults(
    fields: &[FieldSpec],
    options: &mut CommandOptions,
    provider: &impl DefaultProvider,
) {
    let explicit = options.clone();
    for field in fields {
        let Some(hook) = field.default else {
            continue;
        };
        if options.is_set(field.key) {
            continue;
        }
        if field.covered_by.iter().any(|k| explicit.is_set(*k)) {
            trace!(key = %field.key, "Default skipped; covered by explicit option");
            continue;
        }
        provider.apply_default(hook, options, field.key);
    }
}
