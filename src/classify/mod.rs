//! Structural classification of a parsed file.
//!
//! Three independent rules run over every node of the tree:
//!
//! | Rule                 | Node shape                                   | Counter            |
//! |----------------------|----------------------------------------------|--------------------|
//! | function declaration | `function Name() {}`                         | `function_like`    |
//! | function component   | `const Name = () => ...` (capitalized name)  | `function_like`    |
//! | class component      | `class Name extends Component {}`            | `class_components` |
//!
//! The node shapes are disjoint, so no node is counted twice and the walk
//! order does not matter.

mod rules;

pub use rules::{
    is_class_component, is_function_component, is_function_declaration, superclass_name,
    COMPONENT_BASES,
};

use std::ops::AddAssign;

use crate::parser::SyntaxTree;

/// Per-file tally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassificationCounts {
    /// Named function declarations plus capitalized arrow components.
    pub function_like: usize,
    /// Classes extending a component base.
    pub class_components: usize,
}

impl AddAssign for ClassificationCounts {
    fn add_assign(&mut self, other: Self) {
        self.function_like += other.function_like;
        self.class_components += other.class_components;
    }
}

/// Walk every node of `tree` and apply the rules.
pub fn classify(tree: &SyntaxTree) -> ClassificationCounts {
    let mut counts = ClassificationCounts::default();
    let mut cursor = tree.root_node().walk();

    loop {
        let node = cursor.node();
        if is_function_declaration(node) || is_function_component(node, tree) {
            counts.function_like += 1;
        }
        if is_class_component(node, tree) {
            counts.class_components += 1;
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return counts;
            }
        }
    }
}
