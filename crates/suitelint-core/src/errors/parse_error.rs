//! Parse errors.

/// Errors raised while turning source text into a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{file}:{line}: syntax error: {detail}")]
    Syntax {
        file: String,
        /// 1-based line of the first ERROR or MISSING node.
        line: usize,
        detail: String,
    },

    #[error("failed to load Python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}
