//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ContextError;

/// Map resolution errors to the message printed on stderr.
/// Usage errors are printed as-is; everything else is prefixed.
pub fn map_error(e: &ContextError) -> String {
    match e {
        ContextError::Usage(message) => message.clone(),
        ContextError::NoDomainsForUser => e.to_string(),
        other => format!("Error: {}", other),
    }
}
