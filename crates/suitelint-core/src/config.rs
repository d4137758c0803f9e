//! Checker configuration.
//!
//! Everything the rules compare names against is configuration, not a
//! literal: the test-metadata marker can be aliased or re-exported in
//! suite code, and downstream projects rename their logger bindings.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Names the visitor and rules recognize. All fields have defaults
/// matching the upstream test-suite conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Decorator callees that mark a function as a test case regardless
    /// of its name.
    pub test_markers: BTreeSet<String>,
    /// Reserved lifecycle method names that are never test methods.
    pub lifecycle_methods: BTreeSet<String>,
    /// Receiver names the logging rule treats as a logger binding.
    pub log_receivers: BTreeSet<String>,
    /// Callee attribute names the tool-usage rule treats as raw command
    /// execution.
    pub execute_attrs: BTreeSet<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            test_markers: names(&["TestCaseMetadata"]),
            lifecycle_methods: names(&["before_case", "after_case", "before_suite", "after_suite"]),
            log_receivers: names(&["log", "logger"]),
            execute_attrs: names(&["execute", "execute_async"]),
        }
    }
}

fn names(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}
