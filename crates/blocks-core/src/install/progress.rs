//! Progress output for install runs

use super::report::InstallReport;
use crate::catalog::Catalog;
use crate::error::InstallError;
use colored::Colorize;

/// Something the installer did, reported as it happens
#[derive(Debug)]
pub enum InstallEvent<'a> {
    AssetCopied {
        name: &'a str,
    },
    ComponentInstalled {
        name: &'a str,
        notice: Option<&'a str>,
    },
    ComponentFailed {
        name: &'a str,
        error: &'a InstallError,
    },
    AlreadyInstalled {
        requested: &'a str,
    },
    BootstrapFailed {
        name: &'a str,
        error: &'a InstallError,
    },
}

/// Sink for install progress
pub trait Reporter {
    fn report(&self, event: InstallEvent<'_>);
}

/// Discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: InstallEvent<'_>) {}
}

/// Prints progress to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, event: InstallEvent<'_>) {
        match event {
            InstallEvent::AssetCopied { name } => {
                println!("{} {} copied successfully", "✓".green(), name);
            }
            InstallEvent::ComponentInstalled { name, notice } => {
                println!("{} Component {} installed successfully", "✓".green(), name);
                if let Some(notice) = notice {
                    println!("  {} {}", "Note:".yellow(), notice);
                }
            }
            InstallEvent::ComponentFailed { name, error } => {
                eprintln!(
                    "{} {}",
                    format!("Error installing component {}:", name).red(),
                    error
                );
            }
            InstallEvent::AlreadyInstalled { requested } => {
                println!(
                    "{} {} and all its dependencies are already installed.",
                    "✓".green(),
                    requested
                );
            }
            InstallEvent::BootstrapFailed { name, error } => {
                eprintln!(
                    "{} {}",
                    format!("Error copying shared file {}:", name).red(),
                    error
                );
            }
        }
    }
}

impl ConsoleReporter {
    /// Closing summary: dependency section and docs link
    pub fn summary(&self, report: &InstallReport, docs_url: &str) {
        for line in summary_lines(report, docs_url) {
            println!("{}", line);
        }
    }

    /// Catalog listing, optionally with each entry's dependencies
    pub fn catalog(&self, catalog: &Catalog, with_dependencies: bool) {
        for line in catalog_lines(catalog, with_dependencies) {
            println!("{}", line);
        }
    }
}

/// Lines printed after an install. Empty for a failed run or a no-op run.
pub fn summary_lines(report: &InstallReport, docs_url: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if !report.is_success() || report.all_present() {
        return lines;
    }

    if !report.dependencies.is_empty() {
        let present = report.present_dependencies();
        lines.push(String::new());
        lines.push(format!("Installed dependencies for {}:", report.requested));
        for dep in &report.dependencies {
            if present.contains(&dep.as_str()) {
                lines.push(format!("- {} (already present)", dep));
            } else {
                lines.push(format!("- {}", dep));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!("For documentation visit: {}", docs_url));
    lines
}

pub fn catalog_lines(catalog: &Catalog, with_dependencies: bool) -> Vec<String> {
    let mut lines = vec![String::new(), "Available components:".to_string()];
    for entry in catalog.entries() {
        if with_dependencies && !entry.requires.is_empty() {
            lines.push(format!(
                "- {} (requires: {})",
                entry.name,
                entry.requires.join(", ")
            ));
        } else {
            lines.push(format!("- {}", entry.name));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::install::report::Outcome;
    use crate::install::target::InstallTarget;
    use std::path::Path;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            CatalogEntry::new("Button"),
            CatalogEntry::new("Select"),
            CatalogEntry::new("Input"),
            CatalogEntry::new("Form").requires(["Select", "Input"]),
        ])
        .unwrap()
    }

    fn report(requested: &str) -> InstallReport {
        let target = InstallTarget::new(&catalog(), requested, Path::new("/lib")).unwrap();
        InstallReport::new(&target)
    }

    #[test]
    fn test_catalog_lines_with_dependencies() {
        let lines = catalog_lines(&catalog(), true);
        assert_eq!(lines[1], "Available components:");
        assert_eq!(lines[2], "- Button");
        assert_eq!(lines[5], "- Form (requires: Select, Input)");
    }

    #[test]
    fn test_catalog_lines_names_only() {
        let lines = catalog_lines(&catalog(), false);
        assert_eq!(lines.last().map(String::as_str), Some("- Form"));
    }

    #[test]
    fn test_summary_without_dependencies_has_no_section() {
        let mut report = report("Button");
        report.set("Button", Outcome::Installed);
        let lines = summary_lines(&report, "https://docs");
        assert!(!lines.iter().any(|l| l.contains("Installed dependencies")));
        assert_eq!(lines.last().unwrap(), "For documentation visit: https://docs");
    }

    #[test]
    fn test_summary_marks_present_dependencies() {
        let mut report = report("Form");
        report.set("Form", Outcome::Installed);
        report.set("Select", Outcome::AlreadyPresent);
        report.set("Input", Outcome::Installed);
        let lines = summary_lines(&report, "https://docs");
        assert!(lines.contains(&"Installed dependencies for Form:".to_string()));
        assert!(lines.contains(&"- Select (already present)".to_string()));
        assert!(lines.contains(&"- Input".to_string()));
    }

    #[test]
    fn test_summary_empty_when_nothing_to_do() {
        let mut report = report("Form");
        for name in ["Form", "Select", "Input"] {
            report.set(name, Outcome::AlreadyPresent);
        }
        assert!(summary_lines(&report, "https://docs").is_empty());
    }
}
