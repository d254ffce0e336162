//! Role types bridging the platform's guild roles and Warden's admin set.

use serde::{Deserialize, Serialize};

/// A role as reported by the platform for the configured guild.
///
/// Supplied by the connection layer at startup; Warden never fetches
/// roles itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlatformRole {
    /// Platform-assigned role ID.
    pub id: String,
    /// Human-visible role name, matched against configured admin role names.
    pub name: String,
}

impl PlatformRole {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A platform role that confers elevated access to gated commands.
///
/// Produced by the role resolver from the intersection of configured
/// admin role names and the guild's live role list. The resolved list is
/// a startup snapshot; it is not recomputed when configuration reloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRole {
    pub name: String,
    pub id: String,
}
