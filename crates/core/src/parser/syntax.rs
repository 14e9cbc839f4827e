use super::declaration_extractor::method_return_type;
use super::utils::enclosing_declaration_type;
use crate::interfaces::{MethodDeclaration, SyntaxNode, SyntaxTree};
use tree_sitter::{Node, Tree};

const METHOD_KINDS: [&str; 3] = [
    "method_declaration",
    "constructor_declaration",
    "compact_constructor_declaration",
];

/// `SyntaxTree` over a tree-sitter Java tree and the text it was parsed from
pub struct JavaSyntaxTree<'a> {
    tree: &'a Tree,
    source: &'a str,
}

impl<'a> JavaSyntaxTree<'a> {
    pub fn new(tree: &'a Tree, source: &'a str) -> Self {
        Self { tree, source }
    }
}

impl SyntaxTree for JavaSyntaxTree<'_> {
    type Node<'n>
        = JavaNode<'n>
    where
        Self: 'n;

    fn node_at(&self, offset: usize) -> Option<JavaNode<'_>> {
        if offset > self.source.len() {
            return None;
        }
        // A caret at the very end of the text belongs to the last token
        let offset = if offset == self.source.len() {
            offset.saturating_sub(1)
        } else {
            offset
        };
        let node = self
            .tree
            .root_node()
            .named_descendant_for_byte_range(offset, offset)?;
        Some(JavaNode {
            node,
            source: self.source,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JavaNode<'a> {
    node: Node<'a>,
    source: &'a str,
}

impl SyntaxNode for JavaNode<'_> {
    fn parent(&self) -> Option<Self> {
        self.node.parent().map(|node| JavaNode {
            node,
            source: self.source,
        })
    }

    fn method_declaration(&self) -> Option<MethodDeclaration> {
        if !METHOD_KINDS.contains(&self.node.kind()) {
            return None;
        }
        let name = self
            .node
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(self.source.as_bytes()).ok())
            .unwrap_or_default()
            .to_string();

        Some(MethodDeclaration {
            name,
            return_type: method_return_type(&self.node, self.source),
            enclosing_type: enclosing_declaration_type(&self.node, self.source),
        })
    }
}
