//! Installs a component and its direct dependencies into a destination root
//!
//! One invocation walks a fixed sequence: validate, resolve, check what is
//! already present, bootstrap shared assets if needed, then copy each missing
//! component in resolution order. The first copy failure ends the run; the
//! remaining components stay [`Outcome::NotAttempted`]. Nothing is retried.
//!
//! Concurrent runs against the same destination are not coordinated.

use super::copier::ComponentFs;
use super::layout::{SharedAsset, TemplateLayout, BOOTSTRAP_MARKER};
use super::progress::{InstallEvent, Reporter};
use super::report::{BootstrapOutcome, InstallReport, Outcome};
use super::target::InstallTarget;
use crate::catalog::Catalog;
use crate::error::{InstallError, Result};
use std::path::Path;

pub struct Installer<'a, F: ComponentFs> {
    catalog: &'a Catalog,
    layout: TemplateLayout,
    fs: F,
}

impl<'a, F: ComponentFs> Installer<'a, F> {
    pub fn new(catalog: &'a Catalog, layout: TemplateLayout, fs: F) -> Self {
        Self {
            catalog,
            layout,
            fs,
        }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Install `requested` and its declared dependencies under `destination_root`.
    ///
    /// Returns `Err` only for an unknown component, before any filesystem access.
    /// Copy and source failures are recorded in the report, which then carries
    /// the aborting error in [`InstallReport::failure`].
    pub async fn install(
        &self,
        requested: &str,
        destination_root: &Path,
        reporter: &dyn Reporter,
    ) -> Result<InstallReport> {
        let target = InstallTarget::new(self.catalog, requested, destination_root)?;
        let mut report = InstallReport::new(&target);

        let mut pending = Vec::new();
        for name in target.resolved() {
            if self.fs.exists(&target.component_path(name)).await {
                report.set(name, Outcome::AlreadyPresent);
            } else {
                pending.push(name.as_str());
            }
        }

        match self.bootstrap(destination_root, reporter).await {
            Ok((outcome, written)) => {
                report.bootstrap = outcome;
                report.files_written += written;
            }
            Err(e) => {
                report.bootstrap = BootstrapOutcome::Failed(e.to_string());
                report.failure = Some(e);
                return Ok(report);
            }
        }

        if pending.is_empty() {
            reporter.report(InstallEvent::AlreadyInstalled { requested });
            return Ok(report);
        }

        for name in pending {
            match self.copy_component(name, &target).await {
                Ok(written) => {
                    report.files_written += written;
                    report.set(name, Outcome::Installed);
                    reporter.report(InstallEvent::ComponentInstalled {
                        name,
                        notice: self.catalog.notice_of(name),
                    });
                }
                Err(e) => {
                    reporter.report(InstallEvent::ComponentFailed { name, error: &e });
                    report.set(name, Outcome::Failed(e.to_string()));
                    report.failure = Some(e);
                    break;
                }
            }
        }

        Ok(report)
    }

    /// Copy the shared assets unless the marker file is already present.
    ///
    /// Every source is checked before anything is written and the marker is
    /// copied last, so an aborted bootstrap is retried on the next run.
    async fn bootstrap(
        &self,
        destination_root: &Path,
        reporter: &dyn Reporter,
    ) -> Result<(BootstrapOutcome, usize)> {
        if self.fs.exists(&destination_root.join(BOOTSTRAP_MARKER)).await {
            return Ok((BootstrapOutcome::Skipped, 0));
        }

        let mut assets: Vec<&SharedAsset> = self.layout.shared_assets().iter().collect();
        assets.sort_by_key(|asset| asset.dest == BOOTSTRAP_MARKER);

        for asset in &assets {
            let src = self.layout.shared_source(asset);
            if !self.fs.exists(&src).await {
                let err = InstallError::SourceMissing {
                    name: asset.source.to_string(),
                    path: src,
                };
                reporter.report(InstallEvent::BootstrapFailed {
                    name: asset.dest,
                    error: &err,
                });
                return Err(err);
            }
        }

        let mut copied = Vec::new();
        let mut written = 0;
        for asset in assets {
            let src = self.layout.shared_source(asset);
            match self
                .fs
                .copy_recursive(&src, &destination_root.join(asset.dest))
                .await
            {
                Ok(n) => written += n,
                Err(source) => {
                    let err = InstallError::CopyFailure {
                        name: asset.dest.to_string(),
                        source,
                    };
                    reporter.report(InstallEvent::BootstrapFailed {
                        name: asset.dest,
                        error: &err,
                    });
                    return Err(err);
                }
            }
            reporter.report(InstallEvent::AssetCopied { name: asset.dest });
            copied.push(asset.dest.to_string());
        }

        Ok((BootstrapOutcome::Copied(copied), written))
    }

    async fn copy_component(&self, name: &str, target: &InstallTarget) -> Result<usize> {
        let src = self.layout.component_source(name);
        if !self.fs.exists(&src).await {
            return Err(InstallError::SourceMissing {
                name: name.to_string(),
                path: src,
            });
        }

        self.fs
            .copy_recursive(&src, &target.component_path(name))
            .await
            .map_err(|source| InstallError::CopyFailure {
                name: name.to_string(),
                source,
            })
    }
}
