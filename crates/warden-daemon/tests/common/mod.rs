//! Shared helpers for integration tests.
//!
//! Each integration test file compiles common/ as its own module, so not
//! every helper is used in every file.
#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;

use warden_config::ConfigStore;
use warden_daemon::{register_builtins, CommandContext, CommandRegistry, CommandRouter};
use warden_policy::PolicyEngine;
use warden_types::{CommandRestriction, GuildConfig, PlatformRole, RestrictionMode};

/// A config document with one admin role, one ignored user, and one
/// channel restriction on `setconfig`.
pub fn sample_config() -> GuildConfig {
    GuildConfig {
        guild_id: "g-1".into(),
        guild_name: "Test Guild".into(),
        admin_roles: vec!["Moderators".into()],
        ignored_users: vec!["u-ignored".into()],
        command_restrictions: vec![CommandRestriction {
            command: "setconfig".into(),
            mode: RestrictionMode::Blacklist,
            channels: vec!["C-public".into()],
        }],
        ..GuildConfig::default()
    }
}

/// The guild's live roles as the connection layer would report them.
pub fn guild_roles() -> Vec<PlatformRole> {
    vec![
        PlatformRole::new("r-member", "Members"),
        PlatformRole::new("r-mod", "Moderators"),
    ]
}

/// A fully wired store + policy engine + router over a temp document.
pub struct TestHarness {
    pub dir: TempDir,
    pub store: Arc<ConfigStore>,
    pub router: CommandRouter,
}

impl TestHarness {
    pub fn config_path(&self) -> std::path::PathBuf {
        self.dir.path().join("config.json")
    }

    /// Overwrite the on-disk document (the in-memory record is
    /// untouched until a reload).
    pub fn write_document(&self, config: &GuildConfig) {
        std::fs::write(self.config_path(), config.to_json().unwrap()).unwrap();
    }
}

pub fn harness() -> TestHarness {
    harness_with(sample_config())
}

pub fn harness_with(config: GuildConfig) -> TestHarness {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, config.to_json().unwrap()).expect("should write config document");

    let store = Arc::new(ConfigStore::load(&path).expect("should load config store"));
    let policy = Arc::new(PolicyEngine::new(Arc::clone(&store), &guild_roles()));

    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry, &store);

    TestHarness {
        dir,
        store,
        router: CommandRouter::new(registry, policy),
    }
}

/// Context for a caller holding the Moderators role.
pub fn admin_ctx(channel: &str, args: &[&str]) -> CommandContext {
    ctx("u-admin", &["r-mod"], channel, args)
}

/// Context for a caller with only the Members role.
pub fn member_ctx(channel: &str, args: &[&str]) -> CommandContext {
    ctx("u-member", &["r-member"], channel, args)
}

/// Context for the configured ignored user.
pub fn ignored_ctx(channel: &str, args: &[&str]) -> CommandContext {
    ctx("u-ignored", &["r-mod"], channel, args)
}

pub fn ctx(user: &str, roles: &[&str], channel: &str, args: &[&str]) -> CommandContext {
    CommandContext {
        user_id: user.to_string(),
        caller_role_ids: roles.iter().map(|r| r.to_string()).collect(),
        channel_id: channel.to_string(),
        args: args.iter().map(|a| a.to_string()).collect(),
    }
}
