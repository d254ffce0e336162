//! Error types shared across all Warden crates.

/// Errors that can occur across the Warden runtime.
///
/// Authorization failures (`PermissionDenied`, `RestrictionViolation`)
/// and accessor failures (`UnknownKey`, `UnsupportedType`, `Parse`)
/// propagate as typed results to the dispatch layer; the core never
/// writes user-facing output itself.
#[derive(Debug, thiserror::Error)]
pub enum WardenError {
    #[error("permission denied: command '{command}' requires an admin role")]
    PermissionDenied { command: String },

    #[error("command '{command}' is not allowed in channel {channel}")]
    RestrictionViolation { command: String, channel: String },

    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    #[error("configuration key '{key}' is not a scalar field")]
    UnsupportedType { key: String },

    #[error("invalid {expected} value '{value}' for configuration key '{key}'")]
    Parse {
        key: String,
        expected: &'static str,
        value: String,
    },

    #[error("config I/O error: {0}")]
    Io(String),

    #[error("configuration error: {0}")]
    Config(String),
}
