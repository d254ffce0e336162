//! Built-in configuration-management commands.
//!
//! `setconfig`, `getconfig`, `reloadconfig`, and `saveconfig` are the
//! admin surface over the [`ConfigStore`]. Each is admin-gated by the
//! router; none of them renders platform messages.

use std::sync::Arc;

use warden_config::{ConfigStore, ConfigView};
use warden_types::WardenError;

use super::handler::{CommandContext, CommandDef, CommandResult};
use super::registry::CommandRegistry;

/// Register the four configuration commands against `store`.
pub fn register_builtins(registry: &mut CommandRegistry, store: &Arc<ConfigStore>) {
    registry.register(Box::new(SetConfigCommand {
        store: Arc::clone(store),
    }));
    registry.register(Box::new(GetConfigCommand {
        store: Arc::clone(store),
    }));
    registry.register(Box::new(ReloadConfigCommand {
        store: Arc::clone(store),
    }));
    registry.register(Box::new(SaveConfigCommand {
        store: Arc::clone(store),
    }));
}

// ---------------------------------------------------------------------------
// setconfig
// ---------------------------------------------------------------------------

/// Mutate one scalar configuration field in place.
struct SetConfigCommand {
    store: Arc<ConfigStore>,
}

impl CommandDef for SetConfigCommand {
    fn name(&self) -> &str {
        "setconfig"
    }

    fn description(&self) -> &str {
        "Set a runtime configuration field"
    }

    fn usage(&self) -> &str {
        "setconfig <key> <value>"
    }

    fn admin_only(&self) -> bool {
        true
    }

    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult, WardenError> {
        let [key, value] = ctx.args.as_slice() else {
            return Ok(CommandResult::error(format!(
                "invalid arguments supplied; usage: {}",
                self.usage()
            )));
        };

        self.store.set(key, value)?;
        Ok(CommandResult::ok(format!(
            "successfully set property '{key}'"
        )))
    }
}

// ---------------------------------------------------------------------------
// getconfig
// ---------------------------------------------------------------------------

/// Render one scalar field, or the full field listing for `all`.
struct GetConfigCommand {
    store: Arc<ConfigStore>,
}

impl CommandDef for GetConfigCommand {
    fn name(&self) -> &str {
        "getconfig"
    }

    fn description(&self) -> &str {
        "View the runtime configuration"
    }

    fn usage(&self) -> &str {
        "getconfig [key|all]"
    }

    fn admin_only(&self) -> bool {
        true
    }

    fn execute(&self, ctx: &CommandContext) -> Result<CommandResult, WardenError> {
        if ctx.args.len() > 1 {
            return Ok(CommandResult::error(format!(
                "invalid arguments supplied; usage: {}",
                self.usage()
            )));
        }
        let key = ctx.args.first().map(String::as_str).unwrap_or("all");

        let message = match self.store.get(key)? {
            ConfigView::Single(field) => format!("{} - {}", field.key, field.value),
            ConfigView::All(fields) => {
                let lines: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{} - {}", f.key, f.value))
                    .collect();
                lines.join("\n")
            }
        };

        Ok(CommandResult::ok(message))
    }
}

// ---------------------------------------------------------------------------
// reloadconfig
// ---------------------------------------------------------------------------

/// Replace the in-memory record with the on-disk document.
struct ReloadConfigCommand {
    store: Arc<ConfigStore>,
}

impl CommandDef for ReloadConfigCommand {
    fn name(&self) -> &str {
        "reloadconfig"
    }

    fn description(&self) -> &str {
        "Reload configuration from disk"
    }

    fn usage(&self) -> &str {
        "reloadconfig"
    }

    fn admin_only(&self) -> bool {
        true
    }

    fn execute(&self, _ctx: &CommandContext) -> Result<CommandResult, WardenError> {
        self.store.reload()?;
        Ok(CommandResult::ok(
            "successfully reloaded configuration from disk",
        ))
    }
}

// ---------------------------------------------------------------------------
// saveconfig
// ---------------------------------------------------------------------------

/// Write the full in-memory record back to the document.
struct SaveConfigCommand {
    store: Arc<ConfigStore>,
}

impl CommandDef for SaveConfigCommand {
    fn name(&self) -> &str {
        "saveconfig"
    }

    fn description(&self) -> &str {
        "Save the runtime configuration to disk"
    }

    fn usage(&self) -> &str {
        "saveconfig"
    }

    fn admin_only(&self) -> bool {
        true
    }

    fn execute(&self, _ctx: &CommandContext) -> Result<CommandResult, WardenError> {
        self.store.save()?;
        Ok(CommandResult::ok("saved runtime configuration successfully"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warden_types::GuildConfig;

    fn ctx(args: &[&str]) -> CommandContext {
        CommandContext {
            user_id: "u1".into(),
            caller_role_ids: vec![],
            channel_id: "C1".into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn registry_with_store() -> (CommandRegistry, Arc<ConfigStore>) {
        let store = Arc::new(ConfigStore::with_record(
            GuildConfig::default(),
            "/nonexistent/config.json",
        ));
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry, &store);
        (registry, store)
    }

    #[test]
    fn all_builtins_are_admin_only() {
        let (registry, _store) = registry_with_store();
        for name in ["setconfig", "getconfig", "reloadconfig", "saveconfig"] {
            let cmd = registry.lookup(name).expect(name);
            assert!(cmd.admin_only(), "{name} must be admin-gated");
        }
    }

    #[test]
    fn setconfig_requires_exactly_two_args() {
        let (registry, store) = registry_with_store();
        let cmd = registry.lookup("setconfig").unwrap();

        let result = cmd.execute(&ctx(&["CommandKey"])).unwrap();
        assert!(!result.success);
        assert!(result.message.contains("usage"));

        let result = cmd.execute(&ctx(&["CommandKey", "!!"])).unwrap();
        assert!(result.success);
        assert_eq!(store.snapshot().command_key, "!!");
    }

    #[test]
    fn setconfig_propagates_accessor_errors() {
        let (registry, _store) = registry_with_store();
        let cmd = registry.lookup("setconfig").unwrap();

        let err = cmd.execute(&ctx(&["Bogus", "1"])).unwrap_err();
        assert!(matches!(err, WardenError::UnknownKey(_)));

        let err = cmd.execute(&ctx(&["PurgeLimit", "lots"])).unwrap_err();
        assert!(matches!(err, WardenError::Parse { .. }));
    }

    #[test]
    fn getconfig_defaults_to_all() {
        let (registry, _store) = registry_with_store();
        let cmd = registry.lookup("getconfig").unwrap();

        let result = cmd.execute(&ctx(&[])).unwrap();
        assert!(result.success);
        assert!(result.message.contains("CommandKey - !"));
        assert!(result.message.contains("AdminRoles - Skipped Value"));
    }

    #[test]
    fn getconfig_single_key() {
        let (registry, store) = registry_with_store();
        store.set("GuildName", "My Guild").unwrap();
        let cmd = registry.lookup("getconfig").unwrap();

        let result = cmd.execute(&ctx(&["GuildName"])).unwrap();
        assert_eq!(result.message, "GuildName - My Guild");

        let err = cmd.execute(&ctx(&["Bogus"])).unwrap_err();
        assert!(matches!(err, WardenError::UnknownKey(_)));
    }

    #[test]
    fn reload_and_save_propagate_io_errors() {
        let (registry, _store) = registry_with_store();
        // The store points at a nonexistent path.
        let err = registry
            .lookup("reloadconfig")
            .unwrap()
            .execute(&ctx(&[]))
            .unwrap_err();
        assert!(matches!(err, WardenError::Io(_)));

        let err = registry
            .lookup("saveconfig")
            .unwrap()
            .execute(&ctx(&[]))
            .unwrap_err();
        assert!(matches!(err, WardenError::Io(_)));
    }
}
