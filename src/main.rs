mod cli;

use strive_images::config::{self, Config};
use strive_images::ingest::Ingestor;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};
use strive_db::schema::{self, BUNDLED_SCHEMA};
use strive_resolver::generated::parse_generated_name;
use strive_resolver::ProductResolver;

/// Settings a `run` invocation can override on top of the config file.
struct RunOverrides {
    database: Option<PathBuf>,
    images: Option<PathBuf>,
    mode: Option<config::ProductMode>,
    write_mode: Option<config::WriteMode>,
    schema: Option<PathBuf>,
    no_schema: bool,
}

impl RunOverrides {
    fn apply(self, config: &mut Config) {
        if let Some(database) = self.database {
            config.database.path = database;
        }
        if let Some(images) = self.images {
            config.images.dir = images;
        }
        if let Some(mode) = self.mode {
            config.products.mode = mode;
        }
        if self.write_mode.is_some() {
            config.products.write_mode = self.write_mode;
        }
        if let Some(schema) = self.schema {
            config.schema.apply = true;
            config.schema.path = Some(schema);
        }
        if self.no_schema {
            config.schema.apply = false;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "strive_images=debug,strive_db=debug,strive_resolver=trace,strive_common=debug"
                .to_string()
        } else {
            "strive_images=info,strive_db=info,strive_resolver=info,strive_common=warn".to_string()
        }
    });

    // Logs go to stderr so `--json` output on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            database,
            images,
            mode,
            write_mode,
            schema,
            no_schema,
            dry_run,
            json,
        } => {
            let overrides = RunOverrides {
                database,
                images,
                mode,
                write_mode,
                schema,
                no_schema,
            };
            run_ingest(cli.config.as_deref(), overrides, dry_run, json)
        }
        Commands::ApplySchema { file, database } => {
            apply_schema(cli.config.as_deref(), database, file.as_deref())
        }
        Commands::Resolve { files, json } => resolve_files(cli.config.as_deref(), &files, json),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("strive-images {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn run_ingest(
    config_path: Option<&Path>,
    overrides: RunOverrides,
    dry_run: bool,
    json: bool,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    overrides.apply(&mut config);
    config::validate_config(&config)?;

    tracing::info!("Connecting to database at {}", config.database.path.display());
    let mut conn = strive_db::connection::open(&config.database.path)
        .context("Database connection failed")?;
    tracing::info!("Connected to database");

    let report = Ingestor::new(&config).run(&mut conn, dry_run)?;

    drop(conn);
    tracing::info!("Database connection closed");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }

    if !dry_run && !report.committed {
        anyhow::bail!("Database changes were not committed");
    }

    Ok(())
}

fn apply_schema(
    config_path: Option<&Path>,
    database: Option<PathBuf>,
    file: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let db_path = database.unwrap_or(config.database.path);

    let conn = strive_db::connection::open(&db_path).context("Database connection failed")?;

    let report = match file.or(config.schema.path.as_deref()) {
        Some(path) => schema::apply_schema_file(&conn, path)
            .with_context(|| format!("SQL file not readable at {}", path.display()))?,
        None => schema::apply_schema(&conn, BUNDLED_SCHEMA),
    };

    println!(
        "Schema applied to {}: {} executed, {} failed",
        db_path.display(),
        report.executed,
        report.failed
    );

    Ok(())
}

fn resolve_files(config_path: Option<&Path>, files: &[String], json: bool) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let resolver = ProductResolver::new(&config.products.tables);

    let mut results = Vec::with_capacity(files.len());
    for file in files {
        let resolution = resolver.resolve(file);
        let order = resolution.view().map(|view| resolver.display_order(view));
        let generated = parse_generated_name(file);

        if json {
            results.push(serde_json::json!({
                "file": file,
                "resolution": resolution,
                "display_order": order,
                "generated": generated,
            }));
            continue;
        }

        println!("{}", file);
        match resolution.pattern() {
            Some(pattern) => {
                println!("  Strategy: {}", resolution.strategy());
                println!("  Pattern: {}", pattern);
                println!("  View: {}", resolution.view().unwrap_or_default());
                if let Some(order) = order {
                    println!("  Order: {}", order);
                }
            }
            None => println!("  Strategy: unresolved"),
        }
        if let Some(name) = generated {
            println!(
                "  Generated: product {} order {}",
                name.product_id, name.display_order
            );
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            let config = Config::default();
            config::validate_config(&config)?;
            config
        }
    };

    let tables = &config.products.tables;
    println!("  Database: {}", config.database.path.display());
    println!(
        "  Schema: {}",
        match (config.schema.apply, &config.schema.path) {
            (false, _) => "disabled".to_string(),
            (true, Some(path)) => path.display().to_string(),
            (true, None) => "bundled".to_string(),
        }
    );
    println!("  Images: {}", config.images.dir.display());
    println!("  Category mappings: {}", config.categories.len());
    println!(
        "  Product mode: {} ({})",
        config.products.mode,
        config.products.effective_write_mode()
    );
    println!("  Special cases: {}", tables.special_cases.len());
    println!("  Key phrases: {}", tables.type_keys.len());
    println!("  View words: {}", tables.view_words.len());
    println!("  Mapped images: {}", config.products.mapped.len());

    Ok(())
}
