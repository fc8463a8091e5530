//! Building Blocks Core - Shared library for component-distribution CLIs
//!
//! Copies selected component sources, their shared support files, and their
//! declared dependencies from a bundled template tree into a project. There is
//! no registry and no build step: the catalog is a fixed table (or a
//! `catalog.yaml` shipped with the templates) and installation is a copy.
//!
//! # Architecture
//!
//! - **Catalog** - which components exist and what each directly requires
//! - **Install** - resolution, existence checks, bootstrap of shared assets,
//!   fail-fast copying, and a per-run [`InstallReport`]
//! - **Commands** - `--list` / `--add` handling for binaries, driven by a
//!   [`ProductConfig`]
//!
//! # Example Usage
//!
//! ```ignore
//! use blocks_core::{Catalog, Installer, LocalFs, NullReporter, TemplateLayout};
//!
//! let catalog = Catalog::builtin()?;
//! let installer = Installer::new(&catalog, TemplateLayout::new("templates"), LocalFs);
//! let report = installer.install("FormRenderer", dest, &NullReporter).await?;
//! assert!(report.is_success());
//! ```

pub mod catalog;
pub mod commands;
pub mod error;
pub mod install;
pub mod product;

// Re-export main types for convenience
pub use catalog::{component_dir_name, Catalog, CatalogEntry, CatalogManifest};
pub use commands::{run, RunArgs};
pub use error::InstallError;
pub use install::{
    ComponentFs, ConsoleReporter, InstallReport, InstallTarget, Installer, LocalFs,
    NullReporter, Outcome, Reporter, TemplateLayout,
};
pub use product::ProductConfig;
