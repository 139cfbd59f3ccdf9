//! CLI presentation: text and json formatters per entity.

mod entity;
mod shared;

pub use entity::{
    format_application_text, format_container_text, format_domain_text, format_team_text,
};
pub use shared::format_json;
