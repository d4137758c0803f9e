//! Scope-tracking visitor — classifies every call site by its enclosing
//! class/method context in a single traversal.
//!
//! Context is threaded down the recursion as an immutable value, so the
//! restore-on-exit invariant is structural: a subtree can never leak
//! scope state into its siblings or ancestors.

pub mod types;
pub mod walk;

pub use types::{CallSite, ScopeContext};
pub use walk::CheckVisitor;
