use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use strive_resolver::tables::{default_mapped_images, MappedImage, ResolverTables};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub images: ImagesConfig,

    /// Category images, bound by exact filename
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryImage>,

    #[serde(default)]
    pub products: ProductsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            schema: SchemaConfig::default(),
            images: ImagesConfig::default(),
            categories: default_categories(),
            products: ProductsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub path: PathBuf,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("strive.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchemaConfig {
    /// Apply the schema before binding images
    #[serde(default = "default_apply_schema")]
    pub apply: bool,

    /// Schema file; the bundled schema is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_apply_schema() -> bool {
    true
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            apply: default_apply_schema(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ImagesConfig {
    #[serde(default = "default_images_dir")]
    pub dir: PathBuf,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: default_images_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryImage {
    /// Filename inside the image directory
    pub file: String,

    /// Exact category name
    pub name: String,
}

impl CategoryImage {
    pub fn new(file: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
        }
    }
}

fn default_categories() -> Vec<CategoryImage> {
    vec![
        CategoryImage::new("1.jpg", "Men's Jackets"),
        CategoryImage::new("2.jpg", "Men's Footwear"),
        CategoryImage::new("3.jpg", "Outdoor"),
        CategoryImage::new("4.jpg", "Winter Sports"),
        CategoryImage::new("5.jpg", "Camping & Hiking"),
        CategoryImage::new("6.jpg", "Water Sports"),
    ]
}

/// How product images are matched to products.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProductMode {
    /// Resolve hand-named files through the special-case and key phrase tables
    #[default]
    Fuzzy,
    /// Read the product id and order from `product_<id>_<order>` filenames
    Generated,
    /// Use the fixed filename to product table
    Mapped,
}

impl std::fmt::Display for ProductMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fuzzy => write!(f, "fuzzy"),
            Self::Generated => write!(f, "generated"),
            Self::Mapped => write!(f, "mapped"),
        }
    }
}

/// What happens to existing images at the same product and display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Insert alongside existing rows; re-runs accumulate duplicates
    Append,
    /// Delete existing rows at the same product and order first
    Replace,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Append => write!(f, "append"),
            Self::Replace => write!(f, "replace"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductsConfig {
    #[serde(default)]
    pub mode: ProductMode,

    /// Overrides the mode's default write behaviour (fuzzy and mapped only)
    #[serde(default)]
    pub write_mode: Option<WriteMode>,

    /// Special cases, key phrases, view words and view orders
    #[serde(flatten)]
    pub tables: ResolverTables,

    /// Fixed filename to product table for the mapped mode
    #[serde(default = "default_mapped_images")]
    pub mapped: Vec<MappedImage>,

    /// Keys under `[products]` that no field claimed, kept for validation
    #[serde(flatten, skip_serializing)]
    pub unknown: BTreeMap<String, toml::Value>,
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            mode: ProductMode::default(),
            write_mode: None,
            tables: ResolverTables::default(),
            mapped: default_mapped_images(),
            unknown: BTreeMap::new(),
        }
    }
}

impl ProductsConfig {
    /// Write mode in effect for the configured product mode.
    ///
    /// Generated filenames always replace. Fuzzy and mapped runs append
    /// unless configured otherwise.
    pub fn effective_write_mode(&self) -> WriteMode {
        match self.mode {
            ProductMode::Generated => WriteMode::Replace,
            ProductMode::Fuzzy | ProductMode::Mapped => {
                self.write_mode.unwrap_or(WriteMode::Append)
            }
        }
    }
}
