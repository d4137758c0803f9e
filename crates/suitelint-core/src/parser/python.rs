//! Python parsing via native tree-sitter.
//!
//! tree-sitter is error-tolerant and will happily hand back a tree with
//! ERROR/MISSING nodes for malformed input. A convention check over half
//! a file would under-report, so such trees are rejected here with the
//! first error's location; the driver demotes that to a per-file warning.

use tree_sitter::{Node, Parser, Tree};

use crate::errors::ParseError;

/// One parsed Python file: path, source text, and its syntax tree.
/// Immutable once parsed; owned by the driver for one check.
#[derive(Debug)]
pub struct SourceFile {
    pub path: String,
    pub source: String,
    pub tree: Tree,
}

impl SourceFile {
    /// Source text of a node, empty on (impossible) out-of-range spans.
    pub fn text_of(&self, node: &Node) -> &str {
        node.utf8_text(self.source.as_bytes()).unwrap_or("")
    }
}

/// Python parser
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        let language = tree_sitter_python::LANGUAGE;
        parser.set_language(&language.into())?;
        Ok(Self { parser })
    }

    /// Parse source text into a `SourceFile`, rejecting malformed input.
    pub fn parse(&mut self, path: &str, source: &str) -> Result<SourceFile, ParseError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::Syntax {
                file: path.to_string(),
                line: 1,
                detail: "parser produced no tree".to_string(),
            })?;

        if tree.root_node().has_error() {
            let (line, detail) = first_error(tree.root_node(), source.as_bytes());
            return Err(ParseError::Syntax {
                file: path.to_string(),
                line,
                detail,
            });
        }

        Ok(SourceFile {
            path: path.to_string(),
            source: source.to_string(),
            tree,
        })
    }
}

/// Locate the first ERROR or MISSING node, depth first.
fn first_error(node: Node, source: &[u8]) -> (usize, String) {
    if node.is_missing() {
        return (
            node.start_position().row + 1,
            format!("missing {}", node.kind()),
        );
    }
    if node.is_error() {
        let snippet: String = node
            .utf8_text(source)
            .unwrap_or("")
            .chars()
            .take(30)
            .collect();
        return (
            node.start_position().row + 1,
            format!("unexpected input near `{}`", snippet.trim()),
        );
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            return first_error(child, source);
        }
    }
    // has_error() held but no ERROR/MISSING descendant was found.
    (node.start_position().row + 1, "invalid syntax".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_source() {
        let mut parser = PythonParser::new().unwrap();
        let file = parser
            .parse("suite.py", "class TestSuite:\n    def test_one(self) -> None:\n        pass\n")
            .unwrap();
        assert_eq!(file.path, "suite.py");
        assert_eq!(file.tree.root_node().kind(), "module");
    }

    #[test]
    fn rejects_malformed_source_with_location() {
        let mut parser = PythonParser::new().unwrap();
        let err = parser
            .parse("bad.py", "def broken(:\n    pass\n")
            .unwrap_err();
        match err {
            ParseError::Syntax { file, line, .. } => {
                assert_eq!(file, "bad.py");
                assert!(line >= 1);
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }
}
