//! Static description of the CARLA Python API
//!
//! The catalog is loaded once from a JSON document and treated as
//! read-only afterwards. Lookups never mutate it, so one instance can be
//! shared by every feature handler for the lifetime of the process.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Failure to produce a usable catalog. Fatal to every feature: the
/// caller surfaces it once and serves empty results from then on.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("API catalog file not found or unreadable: {0}")]
    NotFound(#[from] std::io::Error),

    #[error("API catalog is not valid JSON of the expected shape: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The full API surface, keyed by class name
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCatalog {
    pub classes: BTreeMap<String, ClassEntry>,
}

/// A single API class: documentation, base classes and members
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassEntry {
    #[serde(default)]
    pub docstring: String,
    #[serde(default)]
    pub base_classes: Vec<String>,
    #[serde(default)]
    pub methods: BTreeMap<String, MethodEntry>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyEntry>,
}

/// A method as described by the catalog. The signature stays a raw
/// string; parameter structure is derived on demand by the signature
/// parser, never cached.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodEntry {
    pub signature: String,
    #[serde(default)]
    pub docstring: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyEntry {
    #[serde(default)]
    pub docstring: String,
    #[serde(default)]
    pub readable: bool,
    #[serde(default)]
    pub writable: bool,
}

impl ApiCatalog {
    /// Load the catalog from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = serde_json::from_str(&content)?;
        Ok(catalog)
    }

    pub fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.get(name)
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}
