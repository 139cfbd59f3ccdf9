//! Shared presentation helpers.

use crate::error::ContextError;
use owo_colors::OwoColorize;
use serde::Serialize;

pub fn format_json<T: Serialize>(value: &T) -> Result<String, ContextError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ContextError::Rest(format!("Failed to serialize output: {}", e)))
}

pub(super) fn heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// `  label: value` lines, skipping absent values.
pub(super) fn field_lines(fields: &[(&str, Option<String>)]) -> String {
    let width = fields.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    fields
        .iter()
        .filter_map(|(label, value)| {
            value
                .as_ref()
                .map(|v| format!("  {:<width$} {}", format!("{}:", label), v, width = width + 1))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
