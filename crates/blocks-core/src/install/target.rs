//! Resolution of a requested component into the set that must be present

use crate::catalog::{component_dir_name, Catalog};
use crate::error::{InstallError, Result};
use std::path::{Path, PathBuf};

/// One install invocation: what was asked for, where it goes, and what that implies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallTarget {
    destination_root: PathBuf,
    requested: String,
    resolved: Vec<String>,
}

impl InstallTarget {
    /// Validate `requested` against the catalog and resolve its direct dependencies.
    /// Does not touch the filesystem.
    pub fn new(catalog: &Catalog, requested: &str, destination_root: &Path) -> Result<Self> {
        if !catalog.is_known(requested) {
            return Err(InstallError::UnknownComponent(requested.to_string()));
        }

        Ok(Self {
            destination_root: destination_root.to_path_buf(),
            requested: requested.to_string(),
            resolved: resolve(catalog, requested),
        })
    }

    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    pub fn requested(&self) -> &str {
        &self.requested
    }

    /// Requested component first, then its declared dependencies in order
    pub fn resolved(&self) -> &[String] {
        &self.resolved
    }

    /// Dependencies of the requested component as they appear in the resolved set
    pub fn dependencies(&self) -> &[String] {
        &self.resolved[1..]
    }

    /// Where a component lands under the destination root
    pub fn component_path(&self, name: &str) -> PathBuf {
        self.destination_root.join(component_dir_name(name))
    }
}

/// `{requested} ∪ dependencies(requested)`, requested first, declaration order,
/// no duplicates. Only one level is expanded.
pub fn resolve(catalog: &Catalog, requested: &str) -> Vec<String> {
    let mut resolved = vec![requested.to_string()];
    for dep in catalog.dependencies_of(requested) {
        if !resolved.contains(dep) {
            resolved.push(dep.clone());
        }
    }
    resolved
}
