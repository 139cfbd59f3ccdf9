//! Parsed command options and per-call lookup overrides.
//!
//! `CommandOptions` is the fixed set of values the resolvers read. It is built once from the
//! parsed command line, completed by the default hooks, and then only borrowed.

use clap::ArgMatches;
use serde::Serialize;
use std::fmt;

/// Keyed option fields that default hooks and schema descriptors refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionKey {
    TeamId,
    TeamName,
    Namespace,
    App,
    Target,
    ApplicationId,
    Server,
}

impl OptionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKey::TeamId => "team_id",
            OptionKey::TeamName => "team_name",
            OptionKey::Namespace => "namespace",
            OptionKey::App => "app",
            OptionKey::Target => "target",
            OptionKey::ApplicationId => "application_id",
            OptionKey::Server => "server",
        }
    }

    /// Clap id of the positional form of a field.
    pub fn positional_str(&self) -> &'static str {
        match self {
            OptionKey::TeamId => "team_id_arg",
            OptionKey::TeamName => "team_name_arg",
            OptionKey::Namespace => "namespace_arg",
            OptionKey::App => "app_arg",
            OptionKey::Target => "target_arg",
            OptionKey::ApplicationId => "application_id_arg",
            OptionKey::Server => "server_arg",
        }
    }

    pub fn all() -> [OptionKey; 7] {
        [
            OptionKey::TeamId,
            OptionKey::TeamName,
            OptionKey::Namespace,
            OptionKey::App,
            OptionKey::Target,
            OptionKey::ApplicationId,
            OptionKey::Server,
        ]
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved option values for one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandOptions {
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub namespace: Option<String>,
    pub app: Option<String>,
    pub target: Option<String>,
    pub application_id: Option<String>,
    pub server: Option<String>,
    /// Ignore the configured server and other saved settings.
    pub clean: bool,
}

/// Blank values count as absent.
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter; blank values are dropped.
    pub fn with(mut self, key: OptionKey, value: impl Into<String>) -> Self {
        *self.slot_mut(key) = normalize(Some(value.into()));
        self
    }

    pub fn with_clean(mut self, clean: bool) -> Self {
        self.clean = clean;
        self
    }

    pub fn get(&self, key: OptionKey) -> Option<&str> {
        let slot = match key {
            OptionKey::TeamId => &self.team_id,
            OptionKey::TeamName => &self.team_name,
            OptionKey::Namespace => &self.namespace,
            OptionKey::App => &self.app,
            OptionKey::Target => &self.target,
            OptionKey::ApplicationId => &self.application_id,
            OptionKey::Server => &self.server,
        };
        present(slot.as_deref())
    }

    pub fn is_set(&self, key: OptionKey) -> bool {
        self.get(key).is_some()
    }

    /// Write a default for `key` unless a value is already present.
    /// Returns whether the value was written.
    pub fn set_default(&mut self, key: OptionKey, value: impl Into<String>) -> bool {
        if self.is_set(key) {
            return false;
        }
        let value = normalize(Some(value.into()));
        let written = value.is_some();
        *self.slot_mut(key) = value;
        written
    }

    /// Read option values out of clap matches for every key the command registered.
    ///
    /// A positional field registered by the schema lives under `<key>_arg`; the named
    /// switch wins when both are given.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mut options = CommandOptions::new();
        for key in OptionKey::all() {
            let named = string_arg(matches, key.as_str());
            let positional = string_arg(matches, positional_id(key));
            *options.slot_mut(key) = normalize(named.or(positional));
        }
        options.clean = flag_arg(matches, "clean");
        options
    }

    fn slot_mut(&mut self, key: OptionKey) -> &mut Option<String> {
        match key {
            OptionKey::TeamId => &mut self.team_id,
            OptionKey::TeamName => &mut self.team_name,
            OptionKey::Namespace => &mut self.namespace,
            OptionKey::App => &mut self.app,
            OptionKey::Target => &mut self.target,
            OptionKey::ApplicationId => &mut self.application_id,
            OptionKey::Server => &mut self.server,
        }
    }
}

/// Clap id used for the positional form of a field.
pub fn positional_id(key: OptionKey) -> &'static str {
    key.positional_str()
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn string_arg(matches: &ArgMatches, id: &str) -> Option<String> {
    matches
        .try_get_one::<String>(id)
        .ok()
        .flatten()
        .cloned()
}

fn flag_arg(matches: &ArgMatches, id: &str) -> bool {
    matches
        .try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}

/// Options forwarded untouched to the REST client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Extra relations to embed in the response, e.g. `cartridges`.
    pub include: Option<String>,
}

/// Per-call overrides accepted by the resolvers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Takes priority over the team name option.
    pub team_name: Option<String>,
    /// Takes priority over the app option.
    pub app: Option<String>,
    /// Select the gear-groups lookup variant. Never sent to the server.
    pub with_gear_groups: bool,
    pub request: RequestOptions,
}

impl LookupOptions {
    pub fn with_gear_groups(mut self) -> Self {
        self.with_gear_groups = true;
        self
    }

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.request.include = Some(include.into());
        self
    }

    /// Split off the gear-groups flag, leaving only what the REST client should see.
    pub fn take_gear_groups(&mut self) -> bool {
        std::mem::take(&mut self.with_gear_groups)
    }
}
