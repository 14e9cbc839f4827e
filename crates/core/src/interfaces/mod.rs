//! Capabilities the host environment supplies to the generator
//!
//! The generator never walks a concrete syntax tree or type table itself. It
//! only talks to these traits, so any host that can answer the queries below
//! (the bundled tree-sitter Java host, an IDE bridge, test fixtures) can drive
//! the same locate/map/render pipeline.

pub mod syntax_tree;
pub mod type_system;

pub use syntax_tree::{MethodDeclaration, SyntaxNode, SyntaxTree};
pub use type_system::{Declaration, TypeSystem};
