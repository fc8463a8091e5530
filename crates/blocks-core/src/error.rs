//! Error types for catalog loading and component installation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the catalog or installing components
#[derive(Debug, Error)]
pub enum InstallError {
    /// A catalog entry lists a dependency the catalog does not know.
    /// Indicates a packaging defect in the bundled templates.
    #[error("Catalog integrity error: '{component}' depends on unknown component '{dependency}'")]
    CatalogIntegrity {
        component: String,
        dependency: String,
    },

    /// The same identifier appears twice in the catalog
    #[error("Catalog integrity error: component '{0}' is listed more than once")]
    DuplicateComponent(String),

    /// catalog.yaml exists but could not be read or parsed
    #[error("Failed to load catalog manifest {}: {details}", .path.display())]
    CatalogManifest { path: PathBuf, details: String },

    /// The requested name is not in the catalog
    #[error("Invalid component: {0}")]
    UnknownComponent(String),

    /// The bundled template for a component (or a shared asset) is absent
    #[error("{name} not found in source directory ({})", .path.display())]
    SourceMissing { name: String, path: PathBuf },

    /// The copy capability reported an error
    #[error("Failed to copy {name}: {source:#}")]
    CopyFailure {
        name: String,
        #[source]
        source: anyhow::Error,
    },
}

impl InstallError {
    /// Whether this error indicates a broken tool install rather than a user mistake
    pub fn is_packaging_defect(&self) -> bool {
        matches!(
            self,
            InstallError::CatalogIntegrity { .. }
                | InstallError::DuplicateComponent(_)
                | InstallError::CatalogManifest { .. }
                | InstallError::SourceMissing { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, InstallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_component_message() {
        let err = InstallError::UnknownComponent("DoesNotExist".to_string());
        assert_eq!(err.to_string(), "Invalid component: DoesNotExist");
        assert!(!err.is_packaging_defect());
    }

    #[test]
    fn test_integrity_error_names_both_sides() {
        let err = InstallError::CatalogIntegrity {
            component: "FormRenderer".to_string(),
            dependency: "Ghost".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("FormRenderer"));
        assert!(msg.contains("Ghost"));
        assert!(err.is_packaging_defect());
    }

    #[test]
    fn test_copy_failure_includes_cause() {
        let err = InstallError::CopyFailure {
            name: "Button".to_string(),
            source: anyhow::anyhow!("permission denied"),
        };
        assert!(err.to_string().contains("permission denied"));
        assert!(!err.is_packaging_defect());
    }
}
