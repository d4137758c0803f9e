//! Report rendering errors.

/// Errors raised while rendering a `CheckReport`.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}
