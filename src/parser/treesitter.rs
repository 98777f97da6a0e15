//! Tree-sitter backed parser.

use once_cell::sync::OnceCell;
use std::path::Path;
use tree_sitter::{Language, Node, Parser as TsParser};

use super::{Dialect, ParseError, SyntaxTree};

/// Longest token excerpt quoted in an error message.
const MAX_EXCERPT: usize = 24;

static SHARED: OnceCell<ScriptParser> = OnceCell::new();

/// Parser for JavaScript, JSX, TypeScript and TSX.
///
/// Holds the grammars only; a tree-sitter parser is created per call, so one
/// instance can be shared across threads.
pub struct ScriptParser {
    tsx: Language,
    typescript: Language,
}

impl Default for ScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptParser {
    pub fn new() -> Self {
        Self {
            tsx: tree_sitter_typescript::LANGUAGE_TSX.into(),
            typescript: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    /// Process-wide instance.
    pub fn shared() -> &'static ScriptParser {
        SHARED.get_or_init(ScriptParser::new)
    }

    fn language(&self, dialect: Dialect) -> &Language {
        match dialect {
            Dialect::Tsx => &self.tsx,
            Dialect::TypeScript => &self.typescript,
        }
    }

    /// Parse `source`, read from `path`, with the dialect its extension
    /// selects.
    pub fn parse<'src>(
        &self,
        path: &Path,
        source: &'src str,
    ) -> Result<SyntaxTree<'src>, ParseError> {
        self.parse_as(Dialect::for_path(path), path, source)
    }

    /// Parse `source` with an explicit dialect.
    pub fn parse_as<'src>(
        &self,
        dialect: Dialect,
        path: &Path,
        source: &'src str,
    ) -> Result<SyntaxTree<'src>, ParseError> {
        let mut parser = TsParser::new();
        parser
            .set_language(self.language(dialect))
            .map_err(|e| ParseError::new(path, format!("cannot load {} grammar: {}", dialect, e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new(path, "parser produced no tree"))?;

        let root = tree.root_node();
        if root.has_error() {
            let message = match first_error(root) {
                Some(node) => describe(node, source),
                None => "Unexpected syntax".to_string(),
            };
            return Err(ParseError::new(path, message));
        }

        // A statement cannot open with an object literal; `{` starts a block.
        // Tree-sitter accepts it anyway, which lets JSON files through.
        if let Some(object) = leading_object_statement(root) {
            let pos = object.start_position();
            return Err(ParseError::new(
                path,
                format!("Unexpected token `{{` ({}:{})", pos.row + 1, pos.column),
            ));
        }

        Ok(SyntaxTree::new(tree, source, dialect))
    }
}

/// Top-level expression statement whose expression is a bare object literal.
fn leading_object_statement(root: Node) -> Option<Node> {
    let mut cursor = root.walk();
    let found = root
        .named_children(&mut cursor)
        .filter(|stmt| stmt.kind() == "expression_statement")
        .filter_map(|stmt| stmt.named_child(0))
        .find(|expr| expr.kind() == "object");
    found
}

/// First ERROR or MISSING node in document order.
fn first_error(root: Node) -> Option<Node> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        // Only subtrees that contain an error are worth entering.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Babel-style message: what went wrong and `(line:column)`, line 1-based,
/// column 0-based.
fn describe(node: Node, source: &str) -> String {
    let pos = node.start_position();
    let location = format!("({}:{})", pos.row + 1, pos.column);

    if node.is_missing() {
        return format!("Missing `{}` {}", node.kind(), location);
    }

    let text = node.utf8_text(source.as_bytes()).unwrap_or("");
    let excerpt: String = text
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .take(MAX_EXCERPT)
        .collect();
    if excerpt.is_empty() {
        format!("Unexpected token {}", location)
    } else {
        format!("Unexpected token `{}` {}", excerpt, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(name: &str, source: &str) -> Result<(), ParseError> {
        ScriptParser::new().parse(Path::new(name), source).map(|_| ())
    }

    #[test]
    fn test_modern_module_syntax() {
        let source = r#"
import React, { useState } from 'react';
export * from './types';

const config = await import('./config');
const name = config?.user?.name ?? 'anonymous';
const { a, ...rest } = config;

export default function App() {
    return <View style={{ flex: 1 }}>{name}</View>;
}
"#;
        assert!(parse("App.js", source).is_ok());
    }

    #[test]
    fn test_typescript_annotations_and_decorators() {
        let source = r#"
interface Props { title: string; count?: number }

@observer
class Store {
    @observable items: string[] = [];
}

export const Title = ({ title }: Props): JSX.Element => <Text>{title}</Text>;
"#;
        assert!(parse("Title.tsx", source).is_ok());
    }

    #[test]
    fn test_angle_bracket_cast_in_ts() {
        let source = "const n = <number>value;\n";
        assert!(parse("cast.ts", source).is_ok());
    }

    #[test]
    fn test_unterminated_block_is_error() {
        let err = parse("src/broken.js", "function Foo() {\n  return 1;\n").unwrap_err();
        assert_eq!(err.file, "src/broken.js");
        assert!(!err.message.is_empty());
        assert!(err.message.contains('('), "message should carry a position: {}", err.message);
    }

    #[test]
    fn test_unexpected_token_message() {
        let err = parse("bad.js", "const = 5;\n").unwrap_err();
        assert!(
            err.message.starts_with("Unexpected token") || err.message.starts_with("Missing"),
            "unexpected message: {}",
            err.message
        );
    }

    #[test]
    fn test_json_document_is_error() {
        let source = "{\n  \"images\" : [],\n  \"info\" : {\n    \"version\" : 1\n  }\n}\n";
        let err = parse("Contents.json", source).unwrap_err();
        assert_eq!(err.message, "Unexpected token `{` (1:0)");

        let err = parse("app.json", "{ \"name\": \"SampleApp\" }").unwrap_err();
        assert!(err.message.starts_with("Unexpected token"));
    }

    #[test]
    fn test_parenthesized_object_is_expression() {
        assert!(parse("a.js", "({ a: 1 });\n").is_ok());
        assert!(parse("a.js", "const o = { a: 1 };\n{ let b = 2; }\n").is_ok());
    }

    #[test]
    fn test_empty_source_parses() {
        assert!(parse("empty.js", "").is_ok());
    }

    #[test]
    fn test_shared_parser_is_reused() {
        let a = ScriptParser::shared() as *const ScriptParser;
        let b = ScriptParser::shared() as *const ScriptParser;
        assert_eq!(a, b);
    }
}
