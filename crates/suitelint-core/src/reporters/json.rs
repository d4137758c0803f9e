//! JSON reporter — machine-readable report for CI integration.

use crate::driver::CheckReport;
use crate::errors::ReportError;

use super::Reporter;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &CheckReport) -> Result<String, ReportError> {
        let mut text = serde_json::to_string_pretty(report)?;
        text.push('\n');
        Ok(text)
    }
}
