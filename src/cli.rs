use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strive_images::config::{ProductMode, WriteMode};

#[derive(Parser)]
#[command(name = "strive-images")]
#[command(author, version, about = "Load category and product images into the storefront database")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the schema, then bind category and product images
    Run {
        /// SQLite database file (overrides config)
        #[arg(long)]
        database: Option<PathBuf>,

        /// Image directory (overrides config)
        #[arg(long)]
        images: Option<PathBuf>,

        /// How product images are matched to products
        #[arg(long, value_enum)]
        mode: Option<ProductMode>,

        /// Append or replace images at an existing product and order
        #[arg(long, value_enum)]
        write_mode: Option<WriteMode>,

        /// Schema file to apply instead of the configured one
        #[arg(long, conflicts_with = "no_schema")]
        schema: Option<PathBuf>,

        /// Skip schema application
        #[arg(long)]
        no_schema: bool,

        /// Roll back instead of committing
        #[arg(long)]
        dry_run: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a schema file (or the bundled schema) to the database
    ApplySchema {
        /// Schema file; the bundled schema is used if omitted
        file: Option<PathBuf>,

        /// SQLite database file (overrides config)
        #[arg(long)]
        database: Option<PathBuf>,
    },

    /// Show how filenames would be resolved to products
    Resolve {
        /// Filenames to resolve
        #[arg(required = true)]
        files: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
