//! Per-invocation install results

use super::target::InstallTarget;
use crate::error::InstallError;

/// What happened to one member of the resolved set
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The component directory already existed; nothing was written
    AlreadyPresent,
    /// Copied in this invocation
    Installed,
    /// The copy was attempted and failed
    Failed(String),
    /// Skipped because an earlier step aborted the invocation
    NotAttempted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentOutcome {
    pub name: String,
    pub outcome: Outcome,
}

/// Result of the one-time shared asset copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Marker file present, nothing copied
    Skipped,
    /// Assets copied, by destination name
    Copied(Vec<String>),
    Failed(String),
}

/// Summary of one install invocation
#[derive(Debug)]
pub struct InstallReport {
    pub requested: String,
    /// Dependencies of `requested` in declaration order (may be empty)
    pub dependencies: Vec<String>,
    /// One entry per resolved component, in resolution order
    pub outcomes: Vec<ComponentOutcome>,
    pub bootstrap: BootstrapOutcome,
    /// Files written across bootstrap and component copies
    pub files_written: usize,
    /// The error that aborted the invocation, if any
    pub failure: Option<InstallError>,
}

impl InstallReport {
    pub(crate) fn new(target: &InstallTarget) -> Self {
        Self {
            requested: target.requested().to_string(),
            dependencies: target.dependencies().to_vec(),
            outcomes: target
                .resolved()
                .iter()
                .map(|name| ComponentOutcome {
                    name: name.clone(),
                    outcome: Outcome::NotAttempted,
                })
                .collect(),
            bootstrap: BootstrapOutcome::Skipped,
            files_written: 0,
            failure: None,
        }
    }

    pub(crate) fn set(&mut self, name: &str, outcome: Outcome) {
        if let Some(entry) = self.outcomes.iter_mut().find(|o| o.name == name) {
            entry.outcome = outcome;
        }
    }

    pub fn outcome_of(&self, name: &str) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.name == name)
            .map(|o| &o.outcome)
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// Every resolved component was already in place before this run
    pub fn all_present(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.outcome == Outcome::AlreadyPresent)
    }

    /// Components copied in this invocation, in order
    pub fn installed(&self) -> Vec<&str> {
        self.with_outcome(|o| *o == Outcome::Installed)
    }

    pub fn not_attempted(&self) -> Vec<&str> {
        self.with_outcome(|o| *o == Outcome::NotAttempted)
    }

    pub fn freshly_installed_dependencies(&self) -> Vec<&str> {
        self.dependencies
            .iter()
            .filter(|d| self.outcome_of(d) == Some(&Outcome::Installed))
            .map(String::as_str)
            .collect()
    }

    pub fn present_dependencies(&self) -> Vec<&str> {
        self.dependencies
            .iter()
            .filter(|d| self.outcome_of(d) == Some(&Outcome::AlreadyPresent))
            .map(String::as_str)
            .collect()
    }

    /// Process exit status for this invocation
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    fn with_outcome(&self, pred: impl Fn(&Outcome) -> bool) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| pred(&o.outcome))
            .map(|o| o.name.as_str())
            .collect()
    }
}
