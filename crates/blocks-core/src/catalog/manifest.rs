//! Optional catalog manifest shipped with the templates (templates/catalog.yaml)

use super::{Catalog, CatalogEntry};
use crate::error::{InstallError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

pub const CATALOG_MANIFEST_FILE: &str = "catalog.yaml";

/// Catalog manifest as written on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Components in display order
    pub components: Vec<CatalogEntry>,

    /// Documentation link printed after a successful install
    #[serde(default)]
    pub docs_url: Option<String>,
}

impl CatalogManifest {
    /// Read the manifest from a template root. Returns `Ok(None)` when the
    /// file does not exist.
    pub async fn load(template_root: &Path) -> Result<Option<Self>> {
        let path = template_root.join(CATALOG_MANIFEST_FILE);
        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Ok(None);
        }

        let content =
            fs::read_to_string(&path)
                .await
                .map_err(|e| InstallError::CatalogManifest {
                    path: path.clone(),
                    details: e.to_string(),
                })?;

        Self::parse(&content)
            .map(Some)
            .map_err(|e| InstallError::CatalogManifest {
                path,
                details: e.to_string(),
            })
    }

    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Validate and convert into a [`Catalog`]
    pub fn into_catalog(self) -> Result<Catalog> {
        let catalog = Catalog::new(self.components)?;
        Ok(match self.docs_url {
            Some(url) => catalog.with_docs_url(url),
            None => catalog,
        })
    }
}
