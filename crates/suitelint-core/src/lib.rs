//! suitelint-core: static analysis of test-suite conventions.
//!
//! This crate provides the analysis engine:
//! - Parser: tree-sitter-python collaborator, per-file error isolation
//! - Visitor: scope-tracking traversal classifying every call site
//! - Rules: warning-level logging and raw-command-execution checks
//! - Tools: ordered command-pattern table with first-match-wins policy
//! - Driver: batch orchestration, one independent check per file
//! - Reporters: console and JSON rendering

pub mod config;
pub mod driver;
pub mod errors;
pub mod parser;
pub mod reporters;
pub mod rules;
pub mod tools;
pub mod visitor;

// Re-exports for convenience
pub use config::CheckConfig;
pub use driver::{BatchDriver, CheckReport, FileNote, RuleSelection, SkipReason};
pub use errors::{ParseError, ReportError};
pub use parser::{PythonParser, SourceFile};
pub use reporters::{ConsoleReporter, JsonReporter, Reporter};
pub use rules::{LogWarningRule, Rule, ToolUsageRule, Violation, ViolationPayload};
pub use visitor::{CallSite, CheckVisitor, ScopeContext};
