use anyhow::{Context, Result};
use o2ox_core::{config::CONFIG_FILE_NAMES, Config};
use std::{env, path::Path};
use tracing::info;

pub fn init_command(cwd: Option<&Path>, force: bool) -> Result<()> {
    let dir = match cwd {
        Some(cwd) => cwd.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let config_path = dir.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    Config::default()
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Wrote default config to {}", config_path.display());
    println!("✅ Created config: {}", config_path.display());
    Ok(())
}
