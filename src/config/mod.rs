mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    expand_paths(&mut config);

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./strive-images.toml",
        "~/.config/strive-images/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Expand a leading `~` in a configured path.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).as_ref()),
        None => path.to_path_buf(),
    }
}

fn expand_paths(config: &mut Config) {
    config.database.path = expand_path(&config.database.path);
    config.images.dir = expand_path(&config.images.dir);
    if let Some(schema) = config.schema.path.as_mut() {
        *schema = expand_path(schema);
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.database.path.as_os_str().is_empty() {
        anyhow::bail!("Database path cannot be empty");
    }

    if !config.images.dir.is_dir() {
        tracing::warn!("Image directory does not exist: {:?}", config.images.dir);
    }

    // Category filenames must be unique
    let mut seen = HashSet::new();
    for category in &config.categories {
        if category.file.is_empty() || category.name.is_empty() {
            anyhow::bail!("Category entries need both a file and a name");
        }
        if !seen.insert(category.file.as_str()) {
            anyhow::bail!("Category image '{}' is mapped more than once", category.file);
        }
    }

    let tables = &config.products.tables;
    for key in &tables.type_keys {
        if key.key.trim().is_empty() {
            anyhow::bail!("Key phrase for pattern '{}' is empty", key.pattern);
        }
        if key.pattern.trim().is_empty() {
            anyhow::bail!("Key phrase '{}' has an empty product pattern", key.key);
        }
    }

    let mut seen = HashSet::new();
    for case in &tables.special_cases {
        if case.pattern.trim().is_empty() {
            anyhow::bail!("Special case '{}' has an empty product pattern", case.file);
        }
        if !seen.insert(case.file.as_str()) {
            anyhow::bail!("Special case '{}' is listed more than once", case.file);
        }
    }

    for word in &tables.view_words {
        if word.word.trim().is_empty() {
            anyhow::bail!("View word for '{}' is empty", word.view);
        }
    }

    for view in strive_resolver::ViewTag::all() {
        if tables.view_orders.order_for(*view) == 0 {
            anyhow::bail!("Display order for view '{}' must be at least 1", view);
        }
    }

    for mapped in &config.products.mapped {
        if mapped.order == 0 {
            anyhow::bail!("Display order for '{}' must be at least 1", mapped.file);
        }
    }

    for key in config.products.unknown.keys() {
        tracing::warn!("Unknown key '{}' in [products] is ignored", key);
    }

    if config.products.mode == ProductMode::Generated
        && config.products.write_mode == Some(WriteMode::Append)
    {
        tracing::warn!("Generated product images always replace; write_mode = append is ignored");
    }

    Ok(())
}
