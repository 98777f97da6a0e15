//! Detection rules. Each rule is a predicate over a single node.

use tree_sitter::Node;

use crate::parser::SyntaxTree;

/// Superclass names that mark a class component.
pub const COMPONENT_BASES: [&str; 2] = ["Component", "React.Component"];

/// Named function declarations, including generators.
///
/// An anonymous `export default function () {}` is a declaration too; a
/// function expression anywhere else is not, and neither are methods or
/// TypeScript overload signatures.
pub fn is_function_declaration(node: Node) -> bool {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => true,
        "function_expression" | "function" | "generator_function" => {
            node.is_named() && is_default_export(node)
        }
        _ => false,
    }
}

/// Arrow functions bound directly to a capitalized variable name, as in
/// `const Button = () => ...`. Wrapping parentheses are transparent.
pub fn is_function_component(node: Node, tree: &SyntaxTree) -> bool {
    if node.kind() != "arrow_function" {
        return false;
    }
    let mut value = node;
    let mut parent = node.parent();
    while let Some(p) = parent.filter(|p| p.kind() == "parenthesized_expression") {
        value = p;
        parent = p.parent();
    }
    let Some(declarator) = parent else {
        return false;
    };
    if declarator.kind() != "variable_declarator"
        || declarator.child_by_field_name("value") != Some(value)
    {
        return false;
    }
    match declarator.child_by_field_name("name") {
        Some(name) if name.kind() == "identifier" => starts_uppercase(tree.node_text(name)),
        _ => false,
    }
}

/// Class declarations extending one of [`COMPONENT_BASES`].
///
/// The superclass is compared by name only; where `Component` was imported
/// from is not checked.
pub fn is_class_component(node: Node, tree: &SyntaxTree) -> bool {
    let is_declaration = match node.kind() {
        "class_declaration" | "abstract_class_declaration" => true,
        "class" => node.is_named() && is_default_export(node),
        _ => false,
    };
    if !is_declaration {
        return false;
    }
    superclass_name(node, tree)
        .map(|name| COMPONENT_BASES.contains(&name.as_str()))
        .unwrap_or(false)
}

/// Dotted name of the `extends` target, if it is an identifier or a member
/// chain of identifiers.
pub fn superclass_name(class: Node, tree: &SyntaxTree) -> Option<String> {
    let mut cursor = class.walk();
    let heritage = class
        .children(&mut cursor)
        .find(|c| c.kind() == "class_heritage")?;

    let mut cursor = heritage.walk();
    let extends = heritage
        .children(&mut cursor)
        .find(|c| c.kind() == "extends_clause")?;

    dotted_name(extends.child_by_field_name("value")?, tree)
}

fn dotted_name(node: Node, tree: &SyntaxTree) -> Option<String> {
    match node.kind() {
        "identifier" => Some(tree.node_text(node).to_string()),
        "member_expression" => {
            let object = dotted_name(node.child_by_field_name("object")?, tree)?;
            let property = node.child_by_field_name("property")?;
            Some(format!("{}.{}", object, tree.node_text(property)))
        }
        _ => None,
    }
}

/// Whether `node` is the value of an `export default` statement.
fn is_default_export(node: Node) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    if parent.kind() != "export_statement" {
        return false;
    }
    let mut cursor = parent.walk();
    let has_default = parent.children(&mut cursor).any(|c| c.kind() == "default");
    has_default
}

fn starts_uppercase(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
