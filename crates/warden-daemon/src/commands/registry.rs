//! Command registry: stores and looks up [`CommandDef`] implementations.
//!
//! Lookups are case-insensitive so `SetConfig` and `setconfig` resolve
//! to the same handler regardless of how the client cased the message.

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::CommandDef;

/// Registry of command definitions, keyed by lowercase name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Arc<dyn CommandDef>>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command by its name. Overwrites any previous
    /// registration for the same name.
    pub fn register(&mut self, cmd: Box<dyn CommandDef>) {
        let arc: Arc<dyn CommandDef> = Arc::from(cmd);
        self.commands.insert(arc.name().to_lowercase(), arc);
    }

    /// Look up a command by name (case-insensitive).
    pub fn lookup(&self, name: &str) -> Option<Arc<dyn CommandDef>> {
        self.commands.get(&name.to_lowercase()).cloned()
    }

    /// All registered commands, sorted by name for deterministic
    /// listings.
    pub fn list(&self) -> Vec<Arc<dyn CommandDef>> {
        let mut commands: Vec<_> = self.commands.values().cloned().collect();
        commands.sort_by(|a, b| a.name().cmp(b.name()));
        commands
    }
}
