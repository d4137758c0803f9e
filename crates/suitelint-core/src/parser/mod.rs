//! Python parser collaborator — a thin wrapper over tree-sitter-python.

pub mod python;

pub use python::{PythonParser, SourceFile};
