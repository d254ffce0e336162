//! Schema-driven configuration store.
//!
//! [`ConfigStore`] owns the live [`warden_types::GuildConfig`] record and
//! mediates every read and mutation: generic get/set by external key
//! name, reload-from-disk, and save-to-disk. The generic accessor is
//! driven by an explicit field-descriptor table ([`schema`]) built once
//! at compile time, giving reflection-style genericity with static
//! types.

pub mod schema;
pub mod store;

pub use schema::{FieldAccess, FieldDescriptor};
pub use store::{ConfigStore, ConfigView, RenderedField, RenderedValue, MAX_RENDERED_LEN};
