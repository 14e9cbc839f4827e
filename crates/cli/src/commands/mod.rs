pub mod analyze;
pub mod generate;
pub mod init;

pub use analyze::analyze_command;
pub use generate::{generate_command, GenerateOptions};
pub use init::init_command;

use anyhow::{Context, Result};
use o2ox_core::{Config, JavaProject};
use std::path::Path;

use crate::utils::Location;

/// Load configuration and the project snapshot around `location`
pub(crate) fn load_project(
    location: &Location,
    source_root: Option<&Path>,
) -> Result<(Config, JavaProject)> {
    if !location.path.is_file() {
        return Err(anyhow::anyhow!("File not found: {}", location.path.display()));
    }
    let config = Config::discover(&location.path)
        .with_context(|| format!("Failed to load configuration for {}", location.path.display()))?;
    let project = JavaProject::load(&location.path, source_root, &config)
        .with_context(|| format!("Failed to load {}", location.path.display()))?;
    Ok((config, project))
}
