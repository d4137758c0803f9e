//! Tool-usage rule: no raw command execution when a wrapper exists.

use std::collections::BTreeSet;

use crate::config::CheckConfig;
use crate::parser::SourceFile;
use crate::rules::types::ViolationPayload;
use crate::rules::Rule;
use crate::tools::{extract_command, match_tool};
use crate::visitor::CallSite;

/// Longest command text echoed in a violation payload.
const MAX_COMMAND_LEN: usize = 80;

/// Flags `node.execute("ip addr show")`-style calls whose command
/// resolves to a known tool wrapper. Unknown commands are fine: the
/// convention only applies where a wrapper actually exists.
pub struct ToolUsageRule {
    execute_attrs: BTreeSet<String>,
}

impl ToolUsageRule {
    pub fn new(config: &CheckConfig) -> Self {
        Self {
            execute_attrs: config.execute_attrs.clone(),
        }
    }
}

impl Rule for ToolUsageRule {
    fn id(&self) -> &'static str {
        "no-raw-execute"
    }

    fn evaluate(&self, call: &CallSite, file: &SourceFile) -> Option<ViolationPayload> {
        if !self.execute_attrs.contains(&call.attribute) {
            return None;
        }
        let first_arg = *call.positional_args().first()?;
        let command = extract_command(first_arg, file);
        if command.is_empty() {
            return None;
        }
        let hit = match_tool(&command)?;
        Some(ViolationPayload::ToolUsage {
            command: command.chars().take(MAX_COMMAND_LEN).collect(),
            tool: hit.tool.to_string(),
            description: hit.description.to_string(),
        })
    }
}
