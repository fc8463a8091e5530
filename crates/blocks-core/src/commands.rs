//! Command handling shared by CLI binaries
//!
//! Binaries parse their own flags, resolve the template root and working
//! directory, then hand off to [`run`]. The returned value is the process
//! exit code.

use crate::catalog::Catalog;
use crate::error::InstallError;
use crate::install::{ComponentFs, ConsoleReporter, Installer, LocalFs, TemplateLayout};
use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Parsed command-line request
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Component to install
    pub add: Option<String>,

    /// Print the catalog and exit
    pub list: bool,

    /// Root of the bundled template tree
    pub template_root: PathBuf,

    /// Directory the destination is created under
    pub working_dir: PathBuf,
}

/// Execute one invocation. Catalog packaging defects are returned as errors;
/// everything else maps to an exit code.
pub async fn run<C: ProductConfig>(config: &C, args: RunArgs) -> Result<i32> {
    let catalog = Catalog::load_or_builtin(&args.template_root).await?;
    let reporter = ConsoleReporter;

    if args.list {
        reporter.catalog(&catalog, true);
        return Ok(0);
    }

    let Some(requested) = args.add.as_deref() else {
        eprintln!(
            "{}",
            "Please specify a component to install using -a or --add".red()
        );
        eprintln!(
            "Run '{} --list' to see available {} components.",
            config.name(),
            config.display_name()
        );
        return Ok(1);
    };

    if !catalog.is_known(requested) {
        let err = InstallError::UnknownComponent(requested.to_string());
        eprintln!("{}", err.to_string().red());
        reporter.catalog(&catalog, false);
        return Ok(1);
    }

    let destination = args.working_dir.join(config.destination_dir_name());
    let installer = Installer::new(&catalog, TemplateLayout::new(&args.template_root), LocalFs);
    installer.fs().ensure_dir(&destination).await?;

    let report = installer.install(requested, &destination, &reporter).await?;
    let docs_url = catalog.docs_url().unwrap_or(config.docs_url());
    reporter.summary(&report, docs_url);

    Ok(report.exit_code())
}
