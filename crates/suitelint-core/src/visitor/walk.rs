//! Single-pass traversal applying the active rules to call sites.

use tree_sitter::Node;

use crate::config::CheckConfig;
use crate::parser::SourceFile;
use crate::rules::{Rule, Violation};
use crate::visitor::types::{CallSite, ScopeContext};

/// Walks one file's syntax tree, tracking scope and handing every
/// `receiver.attribute(...)` call inside a test method to the rules.
pub struct CheckVisitor<'a> {
    file: &'a SourceFile,
    config: &'a CheckConfig,
    rules: &'a [Box<dyn Rule>],
    violations: Vec<Violation>,
}

impl<'a> CheckVisitor<'a> {
    pub fn run(
        file: &'a SourceFile,
        config: &'a CheckConfig,
        rules: &'a [Box<dyn Rule>],
    ) -> Vec<Violation> {
        let mut visitor = Self {
            file,
            config,
            rules,
            violations: Vec::new(),
        };
        visitor.visit(file.tree.root_node(), &ScopeContext::default());
        visitor.violations
    }

    fn visit(&mut self, node: Node<'a>, ctx: &ScopeContext) {
        match node.kind() {
            "class_definition" => {
                let name = self.field_text(node, "name");
                // Superclass arguments evaluate in the enclosing scope,
                // not inside the class being defined.
                if let Some(superclasses) = node.child_by_field_name("superclasses") {
                    self.visit_children(superclasses, ctx);
                }
                let inner = ctx.with_class(&name);
                if let Some(body) = node.child_by_field_name("body") {
                    self.visit(body, &inner);
                }
            }
            // Decorators attach to the wrapped definition in the grammar;
            // collect them here so the function sees its marker list.
            "decorated_definition" => {
                let mut decorators = Vec::new();
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "decorator" {
                        decorators.push(child);
                    }
                }
                // Decorator expressions run in the enclosing scope when
                // the definition executes, so calls nested in them are
                // attributed to the surrounding method.
                for decorator in &decorators {
                    self.visit_children(*decorator, ctx);
                }
                if let Some(definition) = node.child_by_field_name("definition") {
                    if definition.kind() == "function_definition" {
                        self.visit_function(definition, &decorators, ctx);
                    } else {
                        self.visit(definition, ctx);
                    }
                }
            }
            "function_definition" => self.visit_function(node, &[], ctx),
            "call" => {
                if ctx.in_test_method {
                    self.inspect_call(node, ctx);
                }
                // A call's arguments may themselves contain calls.
                self.visit_children(node, ctx);
            }
            _ => self.visit_children(node, ctx),
        }
    }

    fn visit_children(&mut self, node: Node<'a>, ctx: &ScopeContext) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, ctx);
        }
    }

    /// Test classification is the OR of the name rule and the decorator
    /// rule: a marker decorator wins regardless of the function's name,
    /// and an undecorated method counts unless it is underscore-prefixed
    /// or a reserved lifecycle name.
    fn visit_function(&mut self, node: Node<'a>, decorators: &[Node<'a>], ctx: &ScopeContext) {
        let name = self.field_text(node, "name");

        let named_test = ctx.current_class.is_some()
            && !name.starts_with('_')
            && !self.config.lifecycle_methods.contains(&name);
        let marked_test = decorators.iter().any(|d| self.is_marker_decorator(*d));

        let inner = ctx.with_method(&name, named_test || marked_test);
        if let Some(body) = node.child_by_field_name("body") {
            self.visit(body, &inner);
        }
    }

    /// A marker decorator is a call whose callee is a bare identifier in
    /// the configured marker set, e.g. `@TestCaseMetadata(...)`.
    fn is_marker_decorator(&self, decorator: Node<'a>) -> bool {
        let Some(expr) = decorator.named_child(0) else {
            return false;
        };
        if expr.kind() != "call" {
            return false;
        }
        let Some(function) = expr.child_by_field_name("function") else {
            return false;
        };
        function.kind() == "identifier"
            && self
                .config
                .test_markers
                .contains(self.file.text_of(&function))
    }

    fn inspect_call(&mut self, node: Node<'a>, ctx: &ScopeContext) {
        let Some(function) = node.child_by_field_name("function") else {
            return;
        };
        if function.kind() != "attribute" {
            return;
        }
        let Some(attribute) = function.child_by_field_name("attribute") else {
            return;
        };
        let receiver = function.child_by_field_name("object").and_then(|object| {
            (object.kind() == "identifier").then(|| self.file.text_of(&object).to_string())
        });

        let call = CallSite {
            line: node.start_position().row + 1,
            class_name: ctx.current_class.clone(),
            method_name: ctx.current_method.clone(),
            attribute: self.file.text_of(&attribute).to_string(),
            receiver,
            node,
            arguments: node.child_by_field_name("arguments"),
        };

        for rule in self.rules {
            if let Some(payload) = rule.evaluate(&call, self.file) {
                tracing::debug!(
                    file = %self.file.path,
                    line = call.line,
                    rule = rule.id(),
                    "violation found"
                );
                self.violations.push(Violation {
                    file: self.file.path.clone(),
                    line: call.line,
                    context: call.context(),
                    payload,
                });
            }
        }
    }

    fn field_text(&self, node: Node<'a>, field: &str) -> String {
        node.child_by_field_name(field)
            .map(|n| self.file.text_of(&n).to_string())
            .unwrap_or_default()
    }
}
