//! Configuration document commands.
//!
//! `warden config show -c PATH`            -- display all fields
//! `warden config get -c PATH KEY`         -- print one field
//! `warden config set -c PATH KEY VALUE`   -- edit one field and save

use std::path::Path;

use anyhow::{Context, Result};

use warden_config::{ConfigStore, ConfigView};

/// Run `warden config show`.
pub fn show(config_path: &Path) -> Result<()> {
    print_view(&load(config_path)?, "all")
}

/// Run `warden config get KEY`.
pub fn get(config_path: &Path, key: &str) -> Result<()> {
    print_view(&load(config_path)?, key)
}

/// Run `warden config set KEY VALUE`.
///
/// Parses the value per the field's declared type, then writes the
/// whole document back atomically.
pub fn set(config_path: &Path, key: &str, value: &str) -> Result<()> {
    let store = load(config_path)?;
    store
        .set(key, value)
        .with_context(|| format!("cannot set '{key}'"))?;
    store.save().context("cannot save config document")?;
    println!("set {key} and saved {}", config_path.display());
    Ok(())
}

fn load(config_path: &Path) -> Result<ConfigStore> {
    ConfigStore::load(config_path)
        .with_context(|| format!("cannot load config document {}", config_path.display()))
}

fn print_view(store: &ConfigStore, key: &str) -> Result<()> {
    match store.get(key)? {
        ConfigView::Single(field) => println!("{} - {}", field.key, field.value),
        ConfigView::All(fields) => {
            for field in fields {
                println!("{} - {}", field.key, field.value);
            }
        }
    }
    Ok(())
}
