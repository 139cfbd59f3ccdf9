//! CLI domain: parse, route, help, output, and presentation only.
//! Target resolution lives in `crate::context`; this layer wires it to clap and stdout.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, GlobalArgs, OutputFormat, TargetCommand};
pub use presentation::{
    format_application_text, format_container_text, format_domain_text, format_json,
    format_team_text,
};
pub use route::RunContext;
