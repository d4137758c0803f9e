//! Error handling for suitelint.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod parse_error;
pub mod report_error;

pub use parse_error::ParseError;
pub use report_error::ReportError;
