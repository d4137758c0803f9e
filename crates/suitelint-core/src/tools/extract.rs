//! Best-effort command-string extraction from argument expressions.
//!
//! Only the literal shape of the command matters for tool matching, so
//! interpolated and formatted segments become `{}` placeholders instead
//! of being resolved.

use tree_sitter::Node;

use crate::parser::SourceFile;

/// Extract the command text an argument expression would evaluate to.
/// Unknown expression shapes yield an empty string, which never matches
/// any tool pattern.
pub fn extract_command(node: Node, file: &SourceFile) -> String {
    match node.kind() {
        // Plain strings and f-strings share the `string` node: literal
        // segments concatenate, interpolations become `{}`.
        "string" => extract_string(node, file),
        // Implicit concatenation of adjacent literals: "ip " "addr".
        "concatenated_string" => {
            let mut out = String::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                out.push_str(&extract_command(child, file));
            }
            out
        }
        // `+` concatenation and `%` formatting both land here; join the
        // extractable sides with a space, tolerating the other side
        // being opaque.
        "binary_operator" => {
            let left = node
                .child_by_field_name("left")
                .map(|n| extract_command(n, file))
                .unwrap_or_default();
            let right = node
                .child_by_field_name("right")
                .map(|n| extract_command(n, file))
                .unwrap_or_default();
            join_with_space(left, right)
        }
        // `"...".format(...)`: the receiver carries the command shape;
        // format arguments are ignored.
        "call" => {
            let Some(function) = node.child_by_field_name("function") else {
                return String::new();
            };
            if function.kind() != "attribute" {
                return String::new();
            }
            let is_format = function
                .child_by_field_name("attribute")
                .map(|a| file.text_of(&a) == "format")
                .unwrap_or(false);
            if !is_format {
                return String::new();
            }
            function
                .child_by_field_name("object")
                .map(|o| extract_command(o, file))
                .unwrap_or_default()
        }
        "parenthesized_expression" => node
            .named_child(0)
            .map(|inner| extract_command(inner, file))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn extract_string(node: Node, file: &SourceFile) -> String {
    let mut out = String::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        match child.kind() {
            "string_content" | "escape_sequence" => out.push_str(file.text_of(&child)),
            "interpolation" => out.push_str("{}"),
            _ => {}
        }
    }
    out
}

fn join_with_space(left: String, right: String) -> String {
    match (left.is_empty(), right.is_empty()) {
        (true, true) => String::new(),
        (false, true) => left,
        (true, false) => right,
        (false, false) => format!("{left} {right}"),
    }
}
