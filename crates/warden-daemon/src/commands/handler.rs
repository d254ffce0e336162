//! Core command handler types: context, result, and trait.
//!
//! Every command implements [`CommandDef`], which provides metadata
//! (name, help, whether it is admin-gated) and an `execute` method.
//! Commands receive a [`CommandContext`] describing who is invoking the
//! command and from where, and return a [`CommandResult`] with the
//! outcome. Authorization failures surface as `WardenError`, never as a
//! rendered message.

use warden_types::WardenError;

/// Execution context passed to every command handler.
///
/// The connection layer supplies all of this; the core never queries
/// the platform itself.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Platform user ID of the caller.
    pub user_id: String,
    /// The caller's platform role-ID set.
    pub caller_role_ids: Vec<String>,
    /// Channel the command was issued from.
    pub channel_id: String,
    /// Already-tokenized arguments, excluding the command name itself.
    pub args: Vec<String>,
}

/// Structured outcome of a command, for the dispatch layer to present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,
    /// Outcome text; the dispatch layer decides how to render it.
    pub message: String,
}

impl CommandResult {
    /// Create a successful result with a message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create a failure result with a message (e.g. bad arguments).
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Trait all commands implement.
///
/// Commands are registered in a [`super::registry::CommandRegistry`]
/// and dispatched by the [`super::router::CommandRouter`], which runs
/// the admin and channel-restriction gates before `execute` is invoked.
pub trait CommandDef: Send + Sync {
    /// Primary command name, lowercase.
    fn name(&self) -> &str;

    /// One-line description shown in help listings.
    fn description(&self) -> &str;

    /// Usage pattern (e.g. `"setconfig <key> <value>"`).
    fn usage(&self) -> &str;

    /// Whether the router must require an admin role before dispatch.
    fn admin_only(&self) -> bool {
        false
    }

    /// Execute the command with the given context.
    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult, WardenError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_result_constructors() {
        let r = CommandResult::ok("done");
        assert!(r.success);
        assert_eq!(r.message, "done");

        let r = CommandResult::error("bad arguments");
        assert!(!r.success);
        assert_eq!(r.message, "bad arguments");
    }
}
