//! Command router: runs the authorization gates, then dispatches.
//!
//! Gate order mirrors the message-processing pipeline the bot has
//! always had: ignored users are dropped before anything else, then the
//! command is looked up, then the admin gate, then the channel
//! restriction gate. Authorization failures are typed errors; the
//! router never renders them.

use std::sync::Arc;

use tracing::{debug, warn};

use warden_policy::PolicyEngine;
use warden_types::WardenError;

use super::handler::{CommandContext, CommandResult};
use super::registry::CommandRegistry;

/// Routes an already-tokenized command to its registered handler after
/// policy checks.
pub struct CommandRouter {
    registry: CommandRegistry,
    policy: Arc<PolicyEngine>,
}

impl CommandRouter {
    /// Create a router over a populated registry and the process's
    /// policy engine.
    pub fn new(registry: CommandRegistry, policy: Arc<PolicyEngine>) -> Self {
        Self { registry, policy }
    }

    /// Dispatch `command` for the caller described by `ctx`.
    ///
    /// Returns `Ok(None)` when the caller is on the ignored list (the
    /// command is dropped and no response is owed), `Ok(Some(result))`
    /// when a handler ran or the command is unknown, and a typed error
    /// when an authorization gate failed. Gate failures perform no
    /// mutation.
    pub fn dispatch(
        &self,
        command: &str,
        ctx: &CommandContext,
    ) -> Result<Option<CommandResult>, WardenError> {
        if self.policy.is_ignored(&ctx.user_id) {
            debug!(user = %ctx.user_id, command, "dropping command from ignored user");
            return Ok(None);
        }

        let Some(cmd) = self.registry.lookup(command) else {
            return Ok(Some(CommandResult::error(format!(
                "unknown command '{command}'"
            ))));
        };

        if cmd.admin_only() && !self.policy.is_admin(&ctx.caller_role_ids) {
            warn!(
                command = cmd.name(),
                user = %ctx.user_id,
                channel = %ctx.channel_id,
                "denied: caller lacks an admin role"
            );
            return Err(WardenError::PermissionDenied {
                command: cmd.name().to_string(),
            });
        }

        if !self.policy.is_allowed(cmd.name(), &ctx.channel_id) {
            warn!(
                command = cmd.name(),
                user = %ctx.user_id,
                channel = %ctx.channel_id,
                "denied: channel restriction"
            );
            return Err(WardenError::RestrictionViolation {
                command: cmd.name().to_string(),
                channel: ctx.channel_id.clone(),
            });
        }

        cmd.execute(ctx).map(Some)
    }

    /// The underlying registry (for help listings).
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}
