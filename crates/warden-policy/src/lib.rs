//! Authorization policy engine.
//!
//! [`PolicyEngine`] is the single entry point consulted before any
//! privileged operation: it answers whether a caller holds an admin
//! role, whether a command may run in a channel, and whether a user is
//! ignored outright. Admin roles and restriction rules are snapshotted
//! at engine construction; only the ignored-user check reads the live
//! configuration record.

pub mod engine;
pub mod restrictions;
pub mod roles;

pub use engine::PolicyEngine;
pub use restrictions::RestrictionEvaluator;
pub use roles::AdminRoleSet;
