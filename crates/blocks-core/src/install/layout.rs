//! Where things live in the bundled template tree

use crate::catalog::component_dir_name;
use std::path::{Path, PathBuf};

/// Presence of this file in a destination means the shared assets were already copied
pub const BOOTSTRAP_MARKER: &str = "utils.ts";

/// A shared support asset copied once per destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedAsset {
    /// Path relative to the template root
    pub source: &'static str,
    /// Path relative to the destination root
    pub dest: &'static str,
}

const SHARED_ASSETS: &[SharedAsset] = &[
    SharedAsset {
        source: "utils.ts",
        dest: "utils.ts",
    },
    SharedAsset {
        source: "globalStyle.ts",
        dest: "globalStyle.ts",
    },
    SharedAsset {
        source: "icon",
        dest: "icon",
    },
];

/// Layout of the bundled template tree:
///
/// ```text
/// <root>/
///   components/<lowercased-id>/...
///   utils.ts
///   globalStyle.ts
///   icon/
/// ```
#[derive(Debug, Clone)]
pub struct TemplateLayout {
    root: PathBuf,
}

impl TemplateLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn components_dir(&self) -> PathBuf {
        self.root.join("components")
    }

    /// Source directory for a component
    pub fn component_source(&self, name: &str) -> PathBuf {
        self.components_dir().join(component_dir_name(name))
    }

    pub fn shared_assets(&self) -> &'static [SharedAsset] {
        SHARED_ASSETS
    }

    pub fn shared_source(&self, asset: &SharedAsset) -> PathBuf {
        self.root.join(asset.source)
    }
}
