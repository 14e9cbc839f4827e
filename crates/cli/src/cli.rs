use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{analyze_command, generate_command, init_command, GenerateOptions};

#[derive(Parser, Debug)]
#[command(name = "o2ox")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the mapping snippet for the method at a location
    #[command(visible_alias = "g")]
    Generate {
        /// Java file with 1-based line and optional column (e.g., src/Order.java:12:9)
        location: String,

        /// Insert the snippet into the file instead of printing it
        #[arg(short, long)]
        write: bool,

        /// Print the generation result as JSON
        #[arg(long)]
        json: bool,

        /// Directory whose .java files are indexed for type lookups
        #[arg(short = 's', long = "source-root")]
        source_root: Option<PathBuf>,
    },
    /// Show how the method at a location would be mapped
    #[command(visible_alias = "a")]
    Analyze {
        /// Java file with 1-based line and optional column (e.g., src/Order.java:12:9)
        location: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,

        /// Directory whose .java files are indexed for type lookups
        #[arg(short = 's', long = "source-root")]
        source_root: Option<PathBuf>,
    },
    /// Write a default .o2ox.json configuration
    Init {
        /// Directory to write the configuration to (defaults to current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Generate {
                location,
                write,
                json,
                source_root,
            } => generate_command(&GenerateOptions {
                location,
                write,
                json,
                source_root,
            }),
            Commands::Analyze {
                location,
                json,
                source_root,
            } => analyze_command(&location, json, source_root.as_deref()),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
