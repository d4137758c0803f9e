//! Violation rules — each inspects one call site and decides whether it
//! breaks a convention.

pub mod logging;
pub mod tool_usage;
pub mod types;

pub use logging::LogWarningRule;
pub use tool_usage::ToolUsageRule;
pub use types::{Violation, ViolationPayload};

use crate::parser::SourceFile;
use crate::visitor::CallSite;

/// A pluggable convention rule. `evaluate` returns a payload when the
/// call site violates the convention and `None` otherwise; it never
/// errors on a non-matching call.
pub trait Rule {
    fn id(&self) -> &'static str;
    fn evaluate(&self, call: &CallSite, file: &SourceFile) -> Option<ViolationPayload>;
}
