//! Batch driver — applies the visitor to each input file independently
//! and aggregates violations across the batch.

pub mod batch;
pub mod types;

pub use batch::BatchDriver;
pub use types::{CheckReport, FileNote, RuleSelection, SkipReason};
