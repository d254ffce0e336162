//! The configuration store: the single owner of the live config record.
//!
//! Every command handler is a potential concurrent reader and the
//! admin-gated handlers are concurrent writers, so the record lives
//! behind one `RwLock`. Writers hold the exclusive section for the whole
//! mutation, including the file I/O of `reload` and `save`, so a reader
//! never observes a partially-applied change.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::{info, warn};

use warden_types::{GuildConfig, WardenError};

use crate::schema::{self, FieldAccess, FieldDescriptor};

/// Longest literal a rendered field may occupy in a `get("all")` listing.
pub const MAX_RENDERED_LEN: usize = 256;

/// A single field value prepared for display by the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedValue {
    /// The field's value, rendered as text.
    Value(String),
    /// A string field longer than [`MAX_RENDERED_LEN`] in a full listing.
    Truncated,
    /// A non-scalar field enumerated by `get("all")`.
    Skipped,
}

impl std::fmt::Display for RenderedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderedValue::Value(v) => write!(f, "{v}"),
            RenderedValue::Truncated => write!(f, "Truncated..."),
            RenderedValue::Skipped => write!(f, "Skipped Value"),
        }
    }
}

/// A rendered field keyed by its external name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
    pub key: &'static str,
    pub value: RenderedValue,
}

/// Result of a `get`: one field or the full listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigView {
    Single(RenderedField),
    All(Vec<RenderedField>),
}

/// Owns the current [`GuildConfig`] and mediates all access to it.
pub struct ConfigStore {
    /// Path of the backing JSON document.
    path: PathBuf,
    record: RwLock<GuildConfig>,
}

impl ConfigStore {
    /// Load the store from the JSON document at `path`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, WardenError> {
        let path = path.into();
        let record = read_record(&path)?;
        Ok(Self {
            path,
            record: RwLock::new(record),
        })
    }

    /// Build a store around an existing record. `path` is where `reload`
    /// and `save` will look.
    pub fn with_record(record: GuildConfig, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            record: RwLock::new(record),
        }
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `f` against the live record under the read lock.
    ///
    /// This is how the policy engine reads live fields (e.g. the
    /// ignored-user list) without copying the record.
    pub fn read<R>(&self, f: impl FnOnce(&GuildConfig) -> R) -> R {
        let record = self.record.read().expect("config lock poisoned");
        f(&record)
    }

    /// Clone the current record.
    pub fn snapshot(&self) -> GuildConfig {
        self.read(GuildConfig::clone)
    }

    /// Render one field by external key, or every field for `key == "all"`.
    ///
    /// In the full listing, string values longer than
    /// [`MAX_RENDERED_LEN`] render as [`RenderedValue::Truncated`] and
    /// non-scalar fields as [`RenderedValue::Skipped`]. A single-key get
    /// of a non-scalar field fails with `UnsupportedType`.
    pub fn get(&self, key: &str) -> Result<ConfigView, WardenError> {
        let record = self.record.read().expect("config lock poisoned");

        if key == "all" {
            let fields = schema::FIELDS
                .iter()
                .map(|d| RenderedField {
                    key: d.key,
                    value: render(d, &record, true),
                })
                .collect();
            return Ok(ConfigView::All(fields));
        }

        let descriptor =
            schema::lookup(key).ok_or_else(|| WardenError::UnknownKey(key.to_string()))?;
        match render(descriptor, &record, false) {
            RenderedValue::Skipped => Err(WardenError::UnsupportedType {
                key: key.to_string(),
            }),
            value => Ok(ConfigView::Single(RenderedField {
                key: descriptor.key,
                value,
            })),
        }
    }

    /// Parse `raw_value` per the field's static type and mutate the
    /// field in place.
    ///
    /// On any failure (unknown key, non-scalar field, parse error) the
    /// prior value is left untouched.
    pub fn set(&self, key: &str, raw_value: &str) -> Result<(), WardenError> {
        let descriptor =
            schema::lookup(key).ok_or_else(|| WardenError::UnknownKey(key.to_string()))?;

        let mut record = self.record.write().expect("config lock poisoned");
        match descriptor.access {
            FieldAccess::Str { set, .. } => set(&mut record, raw_value.to_string()),
            FieldAccess::Int { set, .. } => {
                let parsed: i64 = raw_value
                    .parse()
                    .map_err(|_| parse_error(key, "integer", raw_value))?;
                set(&mut record, parsed);
            }
            FieldAccess::Float { set, .. } => {
                let parsed: f64 = raw_value
                    .parse()
                    .map_err(|_| parse_error(key, "float", raw_value))?;
                set(&mut record, parsed);
            }
            FieldAccess::Bool { set, .. } => {
                let parsed: bool = raw_value
                    .parse()
                    .map_err(|_| parse_error(key, "boolean", raw_value))?;
                set(&mut record, parsed);
            }
            FieldAccess::Opaque => {
                return Err(WardenError::UnsupportedType {
                    key: key.to_string(),
                })
            }
        }

        info!(key, "configuration field updated");
        Ok(())
    }

    /// Re-read the backing document and replace the entire record.
    ///
    /// On failure the in-memory record is unchanged. Derived state (the
    /// policy engine's admin-role snapshot) is deliberately not touched.
    pub fn reload(&self) -> Result<(), WardenError> {
        let mut record = self.record.write().expect("config lock poisoned");
        let fresh = read_record(&self.path)?;
        *record = fresh;
        info!(path = %self.path.display(), "configuration reloaded from disk");
        Ok(())
    }

    /// Serialize the full record and replace the backing document.
    ///
    /// Writes to a sibling temp file and renames over the target, so a
    /// crash mid-write cannot leave a partial document.
    pub fn save(&self) -> Result<(), WardenError> {
        let record = self.record.write().expect("config lock poisoned");
        let json = record.to_json()?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|e| {
            WardenError::Io(format!(
                "cannot write config file {}: {e}",
                tmp_path.display()
            ))
        })?;
        std::fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = std::fs::remove_file(&tmp_path);
            WardenError::Io(format!(
                "cannot replace config file {}: {e}",
                self.path.display()
            ))
        })?;

        info!(path = %self.path.display(), "configuration saved to disk");
        Ok(())
    }
}

/// Read and parse the document at `path`.
fn read_record(path: &Path) -> Result<GuildConfig, WardenError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| WardenError::Io(format!("cannot read config file {}: {e}", path.display())))?;
    GuildConfig::from_json(&content).map_err(|e| {
        warn!(path = %path.display(), "config document failed to parse");
        e
    })
}

fn render(descriptor: &FieldDescriptor, record: &GuildConfig, truncate: bool) -> RenderedValue {
    match descriptor.access {
        FieldAccess::Str { get, .. } => {
            let value = get(record);
            if truncate && value.len() > MAX_RENDERED_LEN {
                RenderedValue::Truncated
            } else {
                RenderedValue::Value(value)
            }
        }
        FieldAccess::Int { get, .. } => RenderedValue::Value(get(record).to_string()),
        FieldAccess::Float { get, .. } => RenderedValue::Value(get(record).to_string()),
        FieldAccess::Bool { get, .. } => RenderedValue::Value(get(record).to_string()),
        FieldAccess::Opaque => RenderedValue::Skipped,
    }
}

fn parse_error(key: &str, expected: &'static str, value: &str) -> WardenError {
    WardenError::Parse {
        key: key.to_string(),
        expected,
        value: value.to_string(),
    }
}
