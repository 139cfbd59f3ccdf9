//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::TargetCommand;

/// Command name string for log records (e.g. "domain.show", "member.manage").
pub fn command_name(command: TargetCommand) -> &'static str {
    match command {
        TargetCommand::DomainShow => "domain.show",
        TargetCommand::AppShow => "app.show",
        TargetCommand::TeamShow => "team.show",
        TargetCommand::MemberList => "member.list",
        TargetCommand::MemberManage => "member.manage",
        TargetCommand::Server => "server",
    }
}
