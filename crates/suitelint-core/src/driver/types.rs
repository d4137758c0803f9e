//! Batch results and rule selection.

use serde::Serialize;

use crate::config::CheckConfig;
use crate::rules::{LogWarningRule, Rule, ToolUsageRule, Violation};

/// Which rule set the driver runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSelection {
    Logging,
    Tools,
    All,
}

impl RuleSelection {
    pub fn build(self, config: &CheckConfig) -> Vec<Box<dyn Rule>> {
        match self {
            RuleSelection::Logging => vec![Box::new(LogWarningRule::new(config))],
            RuleSelection::Tools => vec![Box::new(ToolUsageRule::new(config))],
            RuleSelection::All => vec![
                Box::new(LogWarningRule::new(config)),
                Box::new(ToolUsageRule::new(config)),
            ],
        }
    }
}

/// Aggregated outcome of one batch: violations in input order plus
/// per-file skip notes. Consumed once by a reporter.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    pub violations: Vec<Violation>,
    pub notes: Vec<FileNote>,
    /// Files that were actually parsed and traversed.
    pub files_checked: usize,
}

impl CheckReport {
    /// Clean means no violations; skipped files do not fail a batch.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Why a file contributed no violations.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileNote {
    pub file: String,
    pub reason: SkipReason,
    pub detail: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Missing,
    Unreadable,
    ParseFailed,
    AnalysisFailed,
}
