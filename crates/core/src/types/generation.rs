use serde::{Deserialize, Serialize};
use std::fmt;

use super::type_ref::TypeRef;

/// Textual form of the generated mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// `return new T().setA(a).setB(b);`
    ChainedBuilder,
    /// `var result = new T(); result.setA(a); return result;`
    ImperativeAssignment,
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::ChainedBuilder => f.write_str("chained builder"),
            GenerationMode::ImperativeAssignment => f.write_str("imperative assignment"),
        }
    }
}

/// One emitted setter call; `field` is `None` when the null literal is passed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetterMatch {
    pub setter: String,
    pub field: Option<String>,
}

impl SetterMatch {
    pub fn is_matched(&self) -> bool {
        self.field.is_some()
    }
}

/// The method under the cursor and the two types it relates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedContext {
    pub method_name: String,
    pub target: TypeRef,
    pub source: TypeRef,
}

/// A complete snippet ready to be handed to the document editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    pub target: TypeRef,
    pub source: TypeRef,
    pub mode: GenerationMode,
    pub matches: Vec<SetterMatch>,
    pub text: String,
}

impl GeneratedText {
    pub fn matched_count(&self) -> usize {
        self.matches.iter().filter(|m| m.is_matched()).count()
    }
}

/// Everything a single generation run resolved, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub context: LocatedContext,
    pub generated: GeneratedText,
}
