//! Component installation
//!
//! This module provides:
//! - Resolution of a requested component into its install set
//! - The filesystem capability used for existence checks and copying
//! - The installer itself, with progress reporting and a per-run report

pub mod copier;
pub mod installer;
pub mod layout;
pub mod progress;
pub mod report;
pub mod target;

pub use copier::{ComponentFs, LocalFs};
pub use installer::Installer;
pub use layout::{SharedAsset, TemplateLayout, BOOTSTRAP_MARKER};
pub use progress::{ConsoleReporter, InstallEvent, NullReporter, Reporter};
pub use report::{BootstrapOutcome, ComponentOutcome, InstallReport, Outcome};
pub use target::{resolve, InstallTarget};
