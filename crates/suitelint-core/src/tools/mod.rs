//! Command-to-tool matching: an ordered regex table over command text,
//! plus best-effort extraction of that text from argument expressions.

pub mod extract;
pub mod table;

pub use extract::extract_command;
pub use table::{match_tool, ToolPattern, TOOL_PATTERNS};
