//! Per-file orchestration.
//!
//! Every per-file failure is demoted to a warning and a `FileNote`;
//! nothing escapes the driver. The batch outcome is only visible through
//! the returned `CheckReport`.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::warn;

use crate::config::CheckConfig;
use crate::driver::types::{CheckReport, FileNote, RuleSelection, SkipReason};
use crate::errors::ParseError;
use crate::parser::PythonParser;
use crate::rules::Rule;
use crate::visitor::CheckVisitor;

pub struct BatchDriver {
    parser: PythonParser,
    config: CheckConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl BatchDriver {
    /// Fails only if the Python grammar cannot be loaded.
    pub fn new(config: CheckConfig, selection: RuleSelection) -> Result<Self, ParseError> {
        let rules = selection.build(&config);
        Ok(Self {
            parser: PythonParser::new()?,
            config,
            rules,
        })
    }

    /// Check each path in order; files are independent and a failure in
    /// one never aborts the rest.
    pub fn check_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> CheckReport {
        let mut report = CheckReport::default();
        for path in paths {
            self.check_one(path.as_ref(), &mut report);
        }
        report
    }

    fn check_one(&mut self, path: &Path, report: &mut CheckReport) {
        let display_path = path.display().to_string();

        if !path.is_file() {
            warn!(file = %display_path, "input file not found, skipping");
            report.notes.push(FileNote {
                file: display_path,
                reason: SkipReason::Missing,
                detail: "no such file".to_string(),
            });
            return;
        }

        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                warn!(file = %display_path, error = %err, "could not read file, skipping");
                report.notes.push(FileNote {
                    file: display_path,
                    reason: SkipReason::Unreadable,
                    detail: err.to_string(),
                });
                return;
            }
        };

        let file = match self.parser.parse(&display_path, &source) {
            Ok(file) => file,
            Err(err) => {
                warn!(file = %display_path, error = %err, "parse failed, file contributes no violations");
                report.notes.push(FileNote {
                    file: display_path,
                    reason: SkipReason::ParseFailed,
                    detail: err.to_string(),
                });
                return;
            }
        };

        report.files_checked += 1;

        // Traversal shares no state across files, so a panicking rule is
        // isolated to this file and the batch continues.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            CheckVisitor::run(&file, &self.config, &self.rules)
        }));
        match outcome {
            Ok(violations) => report.violations.extend(violations),
            Err(payload) => {
                let detail = panic_message(payload.as_ref());
                warn!(file = %display_path, detail = %detail, "analysis failed unexpectedly, skipping file");
                report.notes.push(FileNote {
                    file: display_path,
                    reason: SkipReason::AnalysisFailed,
                    detail,
                });
            }
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
