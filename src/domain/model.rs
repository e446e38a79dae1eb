use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Compatible-range marker put in front of every pinned version.
pub const PIN_PREFIX: &str = "^";

pub type DependencyMap = IndexMap<String, String>;

/// One entry of `lerna list --all --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub version: String,
    pub location: PathBuf,
    pub private: bool,
}

/// A decoded `package.json`.
///
/// Only the name, version and the two dependency sections are modelled.
/// Every other top-level field is carried in `other` and written back
/// untouched, in its original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<DependencyMap>,
    #[serde(
        default,
        rename = "devDependencies",
        skip_serializing_if = "Option::is_none"
    )]
    pub dev_dependencies: Option<DependencyMap>,
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
    #[serde(skip)]
    pub layout: Layout,
}

/// Textual details of the source file that the model itself does not
/// carry but the encoder reproduces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub key_order: Vec<String>,
    pub trailing_newline: bool,
}

/// Package name to pinned version (`^<version>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionDictionary {
    entries: HashMap<String, String>,
}

impl VersionDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, pinned: impl Into<String>) {
        self.entries.insert(name.into(), pinned.into());
    }

    pub fn pinned(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Unchanged,
    Written,
    /// Dry run: the manifest is out of date but was left alone.
    WouldWrite,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub packages: usize,
    pub written: usize,
    pub unchanged: usize,
    pub would_write: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: UpdateOutcome) {
        match outcome {
            UpdateOutcome::Unchanged => self.unchanged += 1,
            UpdateOutcome::Written => self.written += 1,
            UpdateOutcome::WouldWrite => self.would_write += 1,
        }
    }
}
