use crate::{
    error::{Error, Result},
    parser::declaration_extractor::DeclarationExtractor,
    types::TypeDeclaration,
};
use std::path::Path;
use tree_sitter::{Parser, Tree};

pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| Error::TreeSitterError(format!("Failed to set language: {e}")))?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| Error::ParseError("Failed to parse source code".to_string()))
    }

    /// Parse `source` and return every type it declares, in source order
    pub fn get_declarations(
        &mut self,
        source: &str,
        origin: Option<&Path>,
        extractor: &DeclarationExtractor,
    ) -> Result<Vec<TypeDeclaration>> {
        let tree = self.parse(source)?;
        extractor.extract(&tree, source, origin)
    }
}
