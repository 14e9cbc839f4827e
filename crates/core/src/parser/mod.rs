//! Java source parsing and declaration extraction using tree-sitter

pub mod declaration_extractor;
pub mod java_parser;
pub mod syntax;
pub mod utils;

// Re-export commonly used items
pub use declaration_extractor::DeclarationExtractor;
pub use java_parser::JavaParser;
pub use syntax::{JavaNode, JavaSyntaxTree};
