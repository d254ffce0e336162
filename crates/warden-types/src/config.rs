//! Configuration types for a Warden guild instance.
//!
//! [`GuildConfig`] is the top-level configuration record parsed from the
//! JSON document at startup. Scalar fields are reachable through the
//! generic accessor in `warden-config`; list fields are opaque to it and
//! round-trip only through full reload/save.

use serde::{Deserialize, Serialize};

use crate::WardenError;

/// Polarity of a command restriction rule.
///
/// Serialized as the wire values `"white"` / `"black"` carried by
/// existing config documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RestrictionMode {
    /// Only the listed channels may run the command.
    #[serde(rename = "white")]
    Whitelist,
    /// The listed channels may not run the command; all others may.
    #[serde(rename = "black")]
    Blacklist,
}

/// A per-command rule constraining which channels the command may be
/// invoked from. Rules are evaluated in document order; the first rule
/// whose command name matches wins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CommandRestriction {
    /// Command name, matched exactly (case-sensitive).
    pub command: String,
    pub mode: RestrictionMode,
    /// Channel IDs, scanned in order.
    pub channels: Vec<String>,
}

/// Top-level configuration record for a guild.
///
/// External key names are the serde-visible names (PascalCase); they are
/// the stable identifiers operators use with `setconfig`/`getconfig`,
/// distinct from the Rust field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct GuildConfig {
    /// Prefix that marks a message as a command invocation.
    pub command_key: String,
    /// Platform ID of the guild this instance serves.
    #[serde(rename = "GuildID")]
    pub guild_id: String,
    /// Display name of the guild, refreshed by the connection layer.
    pub guild_name: String,
    /// Free-text rules body posted by the `rules` command. Can far
    /// exceed the accessor's 256-character render limit.
    pub rules_text: String,
    /// Presence line shown for the bot account.
    pub status_text: String,
    /// How often the presence line is re-asserted, in minutes.
    pub status_interval_mins: i64,
    /// Maximum number of messages a single purge may delete.
    pub purge_limit: i64,
    /// Delay before self-deleting helper replies, in seconds.
    pub cleanup_delay_secs: f64,
    /// Whether command invocation messages are deleted after handling.
    pub cleanup_commands: bool,
    /// Names of platform roles whose holders are admins.
    pub admin_roles: Vec<String>,
    /// User IDs whose messages are dropped without processing.
    pub ignored_users: Vec<String>,
    /// Per-command channel restriction rules, in evaluation order.
    pub command_restrictions: Vec<CommandRestriction>,
}

impl Default for GuildConfig {
    fn default() -> Self {
        Self {
            command_key: "!".to_string(),
            guild_id: String::new(),
            guild_name: String::new(),
            rules_text: String::new(),
            status_text: String::new(),
            status_interval_mins: 10,
            purge_limit: 100,
            cleanup_delay_secs: 5.0,
            cleanup_commands: true,
            admin_roles: Vec::new(),
            ignored_users: Vec::new(),
            command_restrictions: Vec::new(),
        }
    }
}

impl GuildConfig {
    /// Parse a configuration record from a JSON document.
    pub fn from_json(content: &str) -> Result<Self, WardenError> {
        serde_json::from_str(content).map_err(|e| WardenError::Config(e.to_string()))
    }

    /// Serialize the full record to a JSON document.
    pub fn to_json(&self) -> Result<String, WardenError> {
        serde_json::to_string_pretty(self).map_err(|e| WardenError::Config(e.to_string()))
    }
}
