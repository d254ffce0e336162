//! The field-descriptor table behind the generic accessor.
//!
//! Every externally addressable configuration field has one entry here:
//! its stable external key and a typed getter/setter pair. Non-scalar
//! fields carry [`FieldAccess::Opaque`]; they are listed so `get("all")`
//! can enumerate them, but they cannot be read or written individually.
//!
//! Table order is schema order: it determines the rendering order of
//! `get("all")`.

use warden_types::GuildConfig;

/// Typed access to one configuration field.
///
/// Getters return owned values; the accessor only ever renders them.
pub enum FieldAccess {
    Str {
        get: fn(&GuildConfig) -> String,
        set: fn(&mut GuildConfig, String),
    },
    Int {
        get: fn(&GuildConfig) -> i64,
        set: fn(&mut GuildConfig, i64),
    },
    Float {
        get: fn(&GuildConfig) -> f64,
        set: fn(&mut GuildConfig, f64),
    },
    Bool {
        get: fn(&GuildConfig) -> bool,
        set: fn(&mut GuildConfig, bool),
    },
    /// List-valued field: visible to `get("all")` as a skipped entry,
    /// rejected by single-key get/set.
    Opaque,
}

/// One row of the accessor schema.
pub struct FieldDescriptor {
    /// Stable external key (the serde-visible name of the field).
    pub key: &'static str,
    pub access: FieldAccess,
}

/// The accessor schema, in rendering order.
pub static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        key: "CommandKey",
        access: FieldAccess::Str {
            get: |c| c.command_key.clone(),
            set: |c, v| c.command_key = v,
        },
    },
    FieldDescriptor {
        key: "GuildID",
        access: FieldAccess::Str {
            get: |c| c.guild_id.clone(),
            set: |c, v| c.guild_id = v,
        },
    },
    FieldDescriptor {
        key: "GuildName",
        access: FieldAccess::Str {
            get: |c| c.guild_name.clone(),
            set: |c, v| c.guild_name = v,
        },
    },
    FieldDescriptor {
        key: "RulesText",
        access: FieldAccess::Str {
            get: |c| c.rules_text.clone(),
            set: |c, v| c.rules_text = v,
        },
    },
    FieldDescriptor {
        key: "StatusText",
        access: FieldAccess::Str {
            get: |c| c.status_text.clone(),
            set: |c, v| c.status_text = v,
        },
    },
    FieldDescriptor {
        key: "StatusIntervalMins",
        access: FieldAccess::Int {
            get: |c| c.status_interval_mins,
            set: |c, v| c.status_interval_mins = v,
        },
    },
    FieldDescriptor {
        key: "PurgeLimit",
        access: FieldAccess::Int {
            get: |c| c.purge_limit,
            set: |c, v| c.purge_limit = v,
        },
    },
    FieldDescriptor {
        key: "CleanupDelaySecs",
        access: FieldAccess::Float {
            get: |c| c.cleanup_delay_secs,
            set: |c, v| c.cleanup_delay_secs = v,
        },
    },
    FieldDescriptor {
        key: "CleanupCommands",
        access: FieldAccess::Bool {
            get: |c| c.cleanup_commands,
            set: |c, v| c.cleanup_commands = v,
        },
    },
    FieldDescriptor {
        key: "AdminRoles",
        access: FieldAccess::Opaque,
    },
    FieldDescriptor {
        key: "IgnoredUsers",
        access: FieldAccess::Opaque,
    },
    FieldDescriptor {
        key: "CommandRestrictions",
        access: FieldAccess::Opaque,
    },
];

/// Look up a descriptor by external key (exact, case-sensitive).
pub fn lookup(key: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|d| d.key == key)
}
