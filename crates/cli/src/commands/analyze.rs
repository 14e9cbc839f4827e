use anyhow::Result;
use o2ox_core::MappingGenerator;
use std::path::Path;
use tracing::debug;

use super::load_project;
use crate::display::print_analysis;
use crate::utils::{parse_location, resolve_offset};

pub fn analyze_command(location_arg: &str, json: bool, source_root: Option<&Path>) -> Result<()> {
    debug!("Analyzing: {}", location_arg);

    let location = parse_location(location_arg)?;
    let (config, project) = load_project(&location, source_root)?;
    let offset = resolve_offset(project.source(), &location)?;

    let generator = MappingGenerator::new(config);
    let analysis = generator.analyze(&project.syntax_tree(), project.types(), offset)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(
            &analysis,
            &location.display(),
            project.types().len(),
            &generator.config().null_literal,
        );
    }
    Ok(())
}
