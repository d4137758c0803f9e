//! Report rendering backends.

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use crate::driver::CheckReport;
use crate::errors::ReportError;

/// Renders a finished `CheckReport` to text. Exit-code policy stays with
/// the caller; reporters only format.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &CheckReport) -> Result<String, ReportError>;
}
