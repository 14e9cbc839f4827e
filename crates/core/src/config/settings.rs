use crate::{
    error::{Error, Result},
    locator::DEFAULT_MAX_ASCENT_DEPTH,
    mapper::{DeclarationStyle, RenderOptions},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names searched for, nearest directory first
pub const CONFIG_FILE_NAMES: [&str; 2] = [".o2ox.json", "o2ox.json"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Name of the local variable in imperative snippets
    pub local_variable: String,
    /// Argument passed to setters that have no matching field
    pub null_literal: String,
    pub declaration_style: DeclarationStyle,
    /// Annotations whose `chain = true` forces chained snippets
    pub fluent_markers: Vec<String>,
    /// Expose setters generated by Lombok `@Data` / `@Setter`
    pub synthesize_lombok_setters: bool,
    pub max_ascent_depth: usize,
    /// Re-indent inserted snippets to the cursor line
    pub reindent: bool,
    pub indent_unit: String,

    // Where the config was loaded from (internal, not exposed in JSON)
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            local_variable: render.local_variable,
            null_literal: render.null_literal,
            declaration_style: render.declaration_style,
            fluent_markers: vec!["lombok.experimental.Accessors".to_string()],
            synthesize_lombok_setters: true,
            max_ascent_depth: DEFAULT_MAX_ASCENT_DEPTH,
            reindent: true,
            indent_unit: "    ".to_string(),
            loaded_from: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        config.loaded_from = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load the nearest config above `start_path`, or the defaults when there is none
    pub fn discover(start_path: &Path) -> Result<Self> {
        match Self::find_config_file(start_path) {
            Some(path) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = if start_path.is_file() {
            start_path.parent()?
        } else {
            start_path
        };

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }
            current = current.parent()?;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !is_java_identifier(&self.local_variable) {
            return Err(Error::ConfigError(format!(
                "local_variable '{}' is not a valid identifier",
                self.local_variable
            )));
        }
        if self.null_literal.trim().is_empty() {
            return Err(Error::ConfigError("null_literal must not be empty".to_string()));
        }
        if self.indent_unit.chars().any(|c| c != ' ' && c != '\t') {
            return Err(Error::ConfigError(
                "indent_unit may only contain spaces and tabs".to_string(),
            ));
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            local_variable: self.local_variable.clone(),
            null_literal: self.null_literal.clone(),
            declaration_style: self.declaration_style,
        }
    }
}

fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
