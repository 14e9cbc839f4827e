use anyhow::{Context, Result};
use o2ox_core::{apply_insertion, MappingGenerator, Position, Reindent};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use super::load_project;
use crate::utils::{parse_location, resolve_offset};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub location: String,
    pub write: bool,
    pub json: bool,
    pub source_root: Option<PathBuf>,
}

pub fn generate_command(options: &GenerateOptions) -> Result<()> {
    let location = parse_location(&options.location)?;
    debug!("Generating at {}", location.display());

    let (config, project) = load_project(&location, options.source_root.as_deref())?;
    let offset = resolve_offset(project.source(), &location)?;

    let generator = MappingGenerator::new(config);
    let generated = generator.generate(&project.syntax_tree(), project.types(), offset)?;

    if options.write {
        let config = generator.config();
        let reindent = config.reindent.then(|| Reindent {
            indent_unit: config.indent_unit.clone(),
        });
        let edit = apply_insertion(project.source(), offset, &generated.text, reindent.as_ref())?;
        fs::write(&location.path, &edit.text)
            .with_context(|| format!("Failed to write {}", location.path.display()))?;

        let caret = Position::from_offset(&edit.text, edit.caret).unwrap_or(Position::new(0, 0));
        info!(
            "Inserted {} bytes into {}",
            edit.inserted.len(),
            location.path.display()
        );
        if !options.json {
            println!(
                "✅ Mapped {} -> {} ({}, {}/{} setters matched)",
                generated.source,
                generated.target,
                generated.mode,
                generated.matched_count(),
                generated.matches.len()
            );
            println!(
                "   Caret: {}:{}:{}",
                location.path.display(),
                caret.line + 1,
                caret.character + 1
            );
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else if !options.write {
        println!("{}", generated.text);
    }

    Ok(())
}
