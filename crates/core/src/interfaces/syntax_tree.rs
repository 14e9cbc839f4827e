use crate::types::{ReturnType, TypeRef};

/// A method declaration as seen from the syntax tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub name: String,
    pub return_type: ReturnType,
    /// The declaration directly enclosing the method
    pub enclosing_type: Option<TypeRef>,
}

/// A node in a host syntax tree
pub trait SyntaxNode: Sized {
    fn parent(&self) -> Option<Self>;

    /// `Some` when this node itself is a method (or constructor) declaration
    fn method_declaration(&self) -> Option<MethodDeclaration>;
}

/// Read-only view over a parsed document
pub trait SyntaxTree {
    type Node<'a>: SyntaxNode
    where
        Self: 'a;

    /// The innermost node covering byte `offset`
    fn node_at(&self, offset: usize) -> Option<Self::Node<'_>>;
}
