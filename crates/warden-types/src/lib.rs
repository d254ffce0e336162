//! Core types shared across all Warden crates.
//!
//! Defines the guild configuration record, command restriction rules,
//! platform role types, and the error taxonomy used by the policy
//! engine, configuration store, and command surface.

pub mod config;
pub mod error;
pub mod role;

pub use config::{CommandRestriction, GuildConfig, RestrictionMode};
pub use error::WardenError;
pub use role::{AdminRole, PlatformRole};
