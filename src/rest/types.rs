//! Broker entities as returned in the `data` field of a REST response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    /// Name of the owning domain.
    pub domain_id: String,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub app_url: Option<String>,
    #[serde(default)]
    pub git_url: Option<String>,
    #[serde(default)]
    pub gear_count: Option<u32>,
    #[serde(default)]
    pub scalable: bool,
    #[serde(default)]
    pub creation_time: Option<DateTime<Utc>>,
    /// Only filled by the gear-groups lookups.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gear_groups: Vec<GearGroup>,
}

impl Application {
    /// `domain/app` path notation.
    pub fn path(&self) -> String {
        format!("{}/{}", self.domain_id, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub gear_profile: Option<String>,
    #[serde(default)]
    pub cartridges: Vec<CartridgeRef>,
    #[serde(default)]
    pub gears: Vec<Gear>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartridgeRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gear {
    pub id: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub ssh_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub global: bool,
}

/// Anything that can hold members: a domain, an application or a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MembershipContainer {
    Domain(Domain),
    Application(Application),
    Team(Team),
}

impl MembershipContainer {
    pub fn kind(&self) -> &'static str {
        match self {
            MembershipContainer::Domain(_) => "domain",
            MembershipContainer::Application(_) => "application",
            MembershipContainer::Team(_) => "team",
        }
    }

    pub fn name(&self) -> String {
        match self {
            MembershipContainer::Domain(d) => d.name.clone(),
            MembershipContainer::Application(a) => a.path(),
            MembershipContainer::Team(t) => t.name.clone(),
        }
    }
}

/// Response envelope used by every broker endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Message {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub severity: Option<String>,
}

impl<T> Envelope<T> {
    /// Error and warning texts joined for display.
    pub fn message_text(&self) -> Option<String> {
        let texts: Vec<&str> = self
            .messages
            .iter()
            .filter(|m| m.severity.as_deref() != Some("info"))
            .filter_map(|m| m.text.as_deref())
            .collect();
        (!texts.is_empty()).then(|| texts.join(" "))
    }
}
