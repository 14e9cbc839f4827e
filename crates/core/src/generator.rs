//! Locate → select mode → match → render, in one call

use crate::{
    config::Config,
    error::{AbortReason, Result},
    interfaces::{Declaration, SyntaxTree, TypeSystem},
    locator::Locator,
    mapper::{match_setters, render, select_mode},
    types::{Analysis, GeneratedText},
};
use tracing::debug;

pub struct MappingGenerator {
    config: Config,
    locator: Locator,
}

impl Default for MappingGenerator {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl MappingGenerator {
    pub fn new(config: Config) -> Self {
        let locator = Locator::new(config.max_ascent_depth);
        Self { config, locator }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate the snippet for the method around `offset`
    pub fn generate<T, S>(&self, tree: &T, types: &S, offset: usize) -> Result<GeneratedText>
    where
        T: SyntaxTree,
        S: TypeSystem,
    {
        self.analyze(tree, types, offset).map(|a| a.generated)
    }

    /// Like [`generate`](Self::generate), also returning the located context
    pub fn analyze<T, S>(&self, tree: &T, types: &S, offset: usize) -> Result<Analysis>
    where
        T: SyntaxTree,
        S: TypeSystem,
    {
        let context = self.locator.locate(tree, types, offset)?;
        let target = types
            .declaration_of(&context.target)
            .ok_or(AbortReason::UnresolvableType)?;
        let source = types
            .declaration_of(&context.source)
            .ok_or(AbortReason::UnresolvableType)?;

        let generated = self.generate_for(target, source);
        Ok(Analysis { context, generated })
    }

    /// Generate the snippet building `target` from the fields of `source`
    pub fn generate_for<T, S>(&self, target: &T, source: &S) -> GeneratedText
    where
        T: Declaration + ?Sized,
        S: Declaration + ?Sized,
    {
        let mode = select_mode(target, &self.config.fluent_markers);
        let matches = match_setters(target, source);
        debug!(
            "Mapping {} -> {}: {} setters, {} matched",
            source.name(),
            target.name(),
            matches.len(),
            matches.iter().filter(|m| m.is_matched()).count()
        );

        let text = render(mode, target.name(), &matches, &self.config.render_options());
        GeneratedText {
            target: target.type_ref().clone(),
            source: source.type_ref().clone(),
            mode,
            matches,
            text,
        }
    }
}
