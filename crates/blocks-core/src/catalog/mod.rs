//! Component catalog: which components exist and what they directly require
//!
//! The catalog is read-only once constructed. It is either the built-in table
//! or a `catalog.yaml` shipped alongside the templates. Both go through
//! [`Catalog::new`], which rejects dangling dependencies and duplicate names.

pub mod builtin;
pub mod manifest;

use crate::error::{InstallError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub use manifest::{CatalogManifest, CATALOG_MANIFEST_FILE};

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Component identifier in its declared casing (e.g. `FormRenderer`)
    pub name: String,

    /// Components this one directly requires, in install order
    #[serde(default)]
    pub requires: Vec<String>,

    /// Message shown after the component installs (deprecations and the like)
    #[serde(default)]
    pub notice: Option<String>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requires: Vec::new(),
            notice: None,
        }
    }

    pub fn requires<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

/// Validated, ordered component catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    docs_url: Option<String>,
}

impl Catalog {
    /// Build a catalog, failing on duplicate names or dependencies that point
    /// outside the catalog
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(InstallError::DuplicateComponent(entry.name.clone()));
            }
        }

        for entry in &entries {
            if let Some(missing) = entry.requires.iter().find(|d| !seen.contains(d.as_str())) {
                return Err(InstallError::CatalogIntegrity {
                    component: entry.name.clone(),
                    dependency: missing.clone(),
                });
            }
        }

        Ok(Self {
            entries,
            docs_url: None,
        })
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::entries())
    }

    /// Load `catalog.yaml` from the template root, falling back to the built-in table
    pub async fn load_or_builtin(template_root: &Path) -> Result<Self> {
        match CatalogManifest::load(template_root).await? {
            Some(manifest) => manifest.into_catalog(),
            None => Self::builtin(),
        }
    }

    pub fn with_docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = Some(url.into());
        self
    }

    /// Documentation URL declared by the catalog manifest, if any
    pub fn docs_url(&self) -> Option<&str> {
        self.docs_url.as_deref()
    }

    /// Exact, case-sensitive membership test. `button` is not `Button`.
    pub fn is_known(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Direct dependencies only; a dependency's own requirements are never expanded
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.get(name).map(|e| e.requires.as_slice()).unwrap_or(&[])
    }

    pub fn notice_of(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|e| e.notice.as_deref())
    }

    /// All component names in declared order
    pub fn all_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// On-disk directory name for a component. Template directories are stored
/// lower-cased while identifiers keep their declared casing.
pub fn component_dir_name(name: &str) -> String {
    name.to_lowercase()
}
