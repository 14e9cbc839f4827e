use serde::Serialize;

use crate::impl_case_insensitive_deserialize;
use crate::types::{GenerationMode, SetterMatch};

/// How the local variable of an imperative snippet is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationStyle {
    /// `var result = new T();`
    #[default]
    Var,
    /// `T result = new T();`
    Explicit,
}

impl_case_insensitive_deserialize!(
    DeclarationStyle,
    Var => "var" | "implicit",
    Explicit => "explicit"
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub local_variable: String,
    pub null_literal: String,
    pub declaration_style: DeclarationStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            local_variable: "result".to_string(),
            null_literal: "null".to_string(),
            declaration_style: DeclarationStyle::Var,
        }
    }
}

impl RenderOptions {
    fn argument<'a>(&'a self, m: &'a SetterMatch) -> &'a str {
        m.field.as_deref().unwrap_or(&self.null_literal)
    }
}

/// Render the snippet constructing `target_name` from `matches`
pub fn render(
    mode: GenerationMode,
    target_name: &str,
    matches: &[SetterMatch],
    options: &RenderOptions,
) -> String {
    match mode {
        GenerationMode::ChainedBuilder => render_chained(target_name, matches, options),
        GenerationMode::ImperativeAssignment => render_imperative(target_name, matches, options),
    }
}

fn render_chained(target_name: &str, matches: &[SetterMatch], options: &RenderOptions) -> String {
    let mut out = format!("return new {target_name}()");
    for m in matches {
        out.push_str(&format!("\n.{}({})", m.setter, options.argument(m)));
    }
    out.push(';');
    out
}

fn render_imperative(
    target_name: &str,
    matches: &[SetterMatch],
    options: &RenderOptions,
) -> String {
    let local = &options.local_variable;
    let declared_as = match options.declaration_style {
        DeclarationStyle::Var => "var",
        DeclarationStyle::Explicit => target_name,
    };

    let mut out = format!("{declared_as} {local} = new {target_name}();");
    for m in matches {
        out.push_str(&format!("\n{local}.{}({});", m.setter, options.argument(m)));
    }
    out.push_str(&format!("\nreturn {local};"));
    out
}
