//! Console reporter — human-readable output with color codes.

use crate::driver::{CheckReport, SkipReason};
use crate::errors::ReportError;
use crate::rules::ViolationPayload;

use super::Reporter;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Console reporter for human-readable terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, color: &'static str) -> &'static str {
        if self.use_color {
            color
        } else {
            ""
        }
    }

    fn reset(&self) -> &'static str {
        if self.use_color {
            RESET
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &CheckReport) -> Result<String, ReportError> {
        let mut output = String::new();

        for note in &report.notes {
            let reason = match note.reason {
                SkipReason::Missing => "not found",
                SkipReason::Unreadable => "unreadable",
                SkipReason::ParseFailed => "parse failed",
                SkipReason::AnalysisFailed => "analysis failed",
            };
            output.push_str(&format!(
                "{}⚠ {} skipped ({}): {}{}\n",
                self.paint(YELLOW),
                note.file,
                reason,
                note.detail,
                self.reset(),
            ));
        }

        if report.is_clean() {
            output.push_str(&format!(
                "{}✓ no convention violations found{}\n",
                self.paint(GREEN),
                self.reset(),
            ));
            return Ok(output);
        }

        for violation in &report.violations {
            output.push_str(&format!(
                "{}✗ {}:{}: {}{}\n",
                self.paint(RED),
                violation.file,
                violation.line,
                violation.context,
                self.reset(),
            ));
            match &violation.payload {
                ViolationPayload::LogWarning { call } => {
                    output.push_str(&format!("    {call}\n"));
                }
                ViolationPayload::ToolUsage {
                    command,
                    tool,
                    description,
                } => {
                    output.push_str(&format!("    execute(\"{command}\")\n"));
                    output.push_str(&format!("    use tool {tool} instead — {description}\n"));
                }
            }
        }

        let plural = if report.violations.len() == 1 { "" } else { "s" };
        output.push_str(&format!(
            "\n{} convention violation{} found.\n\n",
            report.violations.len(),
            plural
        ));
        output.push_str(REMEDIATION);

        Ok(output)
    }
}

const REMEDIATION: &str = "\
Test conventions:
  * log.warning() is reserved for the runner. Inside a test method, log
    at debug/info level, or fail the test instead of warning about it.
  * Prefer the dedicated tool wrapper over raw execute() when one
    exists; wrappers handle path lookup, privilege escalation, and
    output parsing consistently across distributions.
";
