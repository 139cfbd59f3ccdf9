//! Domain, application and team formatters.

use super::shared::{field_lines, heading};
use crate::rest::{Application, Domain, MembershipContainer, Team};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

pub fn format_domain_text(domain: &Domain) -> String {
    format!(
        "{}\n{}",
        heading(&domain.name),
        field_lines(&[
            ("ID", Some(domain.id.clone())),
            ("Suffix", domain.suffix.clone()),
            ("Created", domain.creation_time.map(|t| t.to_rfc3339())),
        ])
    )
}

pub fn format_team_text(team: &Team) -> String {
    format!(
        "{}\n{}",
        heading(&team.name),
        field_lines(&[
            ("ID", Some(team.id.clone())),
            ("Global", team.global.then(|| "yes".to_string())),
        ])
    )
}

pub fn format_application_text(app: &Application) -> String {
    let mut out = format!(
        "{}\n{}",
        heading(&app.path()),
        field_lines(&[
            ("ID", Some(app.id.clone())),
            ("Framework", app.framework.clone()),
            ("URL", app.app_url.clone()),
            ("Git URL", app.git_url.clone()),
            ("Gears", app.gear_count.map(|c| c.to_string())),
            ("Scaling", app.scalable.then(|| "yes".to_string())),
            ("Created", app.creation_time.map(|t| t.to_rfc3339())),
        ])
    );

    if !app.gear_groups.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Gear group", "Cartridges", "Profile", "Gear", "State"]);
        for group in &app.gear_groups {
            let cartridges = group
                .cartridges
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let profile = group.gear_profile.clone().unwrap_or_else(|| "-".to_string());
            if group.gears.is_empty() {
                table.add_row(vec![
                    group.name.clone(),
                    cartridges.clone(),
                    profile.clone(),
                    "-".to_string(),
                    "-".to_string(),
                ]);
            }
            for gear in &group.gears {
                table.add_row(vec![
                    group.name.clone(),
                    cartridges.clone(),
                    profile.clone(),
                    gear.id.clone(),
                    gear.state.clone().unwrap_or_else(|| "unknown".to_string()),
                ]);
            }
        }
        out.push_str("\n\n");
        out.push_str(&table.to_string());
    }
    out
}

pub fn format_container_text(container: &MembershipContainer) -> String {
    let body = match container {
        MembershipContainer::Domain(d) => format_domain_text(d),
        MembershipContainer::Application(a) => format_application_text(a),
        MembershipContainer::Team(t) => format_team_text(t),
    };
    format!("Target {} '{}'\n\n{}", container.kind(), container.name(), body)
}
