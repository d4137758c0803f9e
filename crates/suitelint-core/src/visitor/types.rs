//! Traversal state and call-site records.

use tree_sitter::Node;

/// Transient class/method/test-classification state during traversal.
///
/// Never mutated in place: entering a scope derives a new value and the
/// caller keeps its own, so exiting a subtree restores context by
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeContext {
    pub current_class: Option<String>,
    pub current_method: Option<String>,
    pub in_test_method: bool,
}

impl ScopeContext {
    /// Context for the body of a class. Method/test state is untouched.
    pub fn with_class(&self, name: &str) -> Self {
        Self {
            current_class: Some(name.to_string()),
            current_method: self.current_method.clone(),
            in_test_method: self.in_test_method,
        }
    }

    /// Context for the body of a function or method.
    pub fn with_method(&self, name: &str, in_test_method: bool) -> Self {
        Self {
            current_class: self.current_class.clone(),
            current_method: Some(name.to_string()),
            in_test_method,
        }
    }
}

/// One `receiver.attribute(...)` invocation seen inside a test method.
pub struct CallSite<'a> {
    /// 1-based line for reporting.
    pub line: usize,
    pub class_name: Option<String>,
    pub method_name: Option<String>,
    /// Callee attribute name, e.g. `warning` or `execute`.
    pub attribute: String,
    /// Receiver's bound name when the receiver is a bare identifier
    /// (`log.warning`); `None` for attribute chains (`self.log.warning`).
    pub receiver: Option<String>,
    /// The `call` node itself.
    pub node: Node<'a>,
    /// The `argument_list` node, when present.
    pub arguments: Option<Node<'a>>,
}

impl<'a> CallSite<'a> {
    /// `Class.method`, or the bare method name outside a class.
    pub fn context(&self) -> String {
        match (&self.class_name, &self.method_name) {
            (Some(class), Some(method)) => format!("{class}.{method}"),
            (None, Some(method)) => method.clone(),
            (Some(class), None) => class.clone(),
            (None, None) => "<module>".to_string(),
        }
    }

    /// Positional arguments, in order. Keyword arguments and comments
    /// inside the argument list are skipped.
    pub fn positional_args(&self) -> Vec<Node<'a>> {
        let Some(arguments) = self.arguments else {
            return Vec::new();
        };
        let mut args = Vec::new();
        let mut cursor = arguments.walk();
        for child in arguments.named_children(&mut cursor) {
            if child.kind() != "keyword_argument" && child.kind() != "comment" {
                args.push(child);
            }
        }
        args
    }
}
