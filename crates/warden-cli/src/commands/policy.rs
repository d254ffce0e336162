//! Policy evaluation commands.
//!
//! `warden policy check -c PATH COMMAND CHANNEL` -- print whether the
//! restriction table allows the command in the channel.

use std::path::Path;

use anyhow::{Context, Result};

use warden_config::ConfigStore;
use warden_policy::RestrictionEvaluator;

/// Run `warden policy check`.
pub fn check(config_path: &Path, command: &str, channel: &str) -> Result<()> {
    let store = ConfigStore::load(config_path)
        .with_context(|| format!("cannot load config document {}", config_path.display()))?;

    let evaluator = store.read(|record| RestrictionEvaluator::new(record.command_restrictions.clone()));

    if evaluator.is_allowed(command, channel) {
        println!("allowed: '{command}' may run in channel {channel}");
    } else {
        println!("denied: '{command}' may not run in channel {channel}");
    }
    Ok(())
}
