//! Violation records.

use serde::Serialize;

/// One convention violation at a specific call site. Outlives the
/// traversal that produced it; aggregated across files by the driver.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Violation {
    pub file: String,
    /// 1-based line of the offending call.
    pub line: usize,
    /// `Class.method` or the bare method name.
    pub context: String,
    pub payload: ViolationPayload,
}

/// Rule-specific detail attached to a violation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ViolationPayload {
    /// Warning-level logging inside a test body.
    LogWarning { call: String },
    /// Raw command execution where a dedicated tool wrapper exists.
    ToolUsage {
        /// Extracted command text, truncated to 80 characters.
        command: String,
        tool: String,
        description: String,
    },
}
