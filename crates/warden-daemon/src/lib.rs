//! Command surface for the Warden moderation bot.
//!
//! The connection layer hands this crate an already-tokenized command
//! name plus caller context; the [`commands::CommandRouter`] runs the
//! authorization gates against the policy engine and dispatches to the
//! registered handler. Nothing here touches the transport or renders
//! user-facing messages.

pub mod commands;

pub use commands::builtins::register_builtins;
pub use commands::handler::{CommandContext, CommandDef, CommandResult};
pub use commands::registry::CommandRegistry;
pub use commands::router::CommandRouter;
