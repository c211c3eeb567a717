//! Path utilities for detecting ingestible image files by extension.
//!
//! Only the formats the storefront can serve are picked up from the image
//! directory; every other entry is ignored.

use std::path::Path;

/// List of image file extensions picked up from the image directory.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Lowercased extension of a path, if it has one.
pub fn extension_lowercase(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Check if a path has an ingestible image file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use strive_common::paths::is_image_file;
///
/// assert!(is_image_file(Path::new("1.jpg")));
/// assert!(is_image_file(Path::new("/path/to/product_5_1.PNG")));
/// assert!(!is_image_file(Path::new("notes.txt")));
/// ```
pub fn is_image_file(path: &Path) -> bool {
    extension_lowercase(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Get the list of image file extensions.
///
/// # Examples
///
/// ```
/// use strive_common::paths::image_extensions;
///
/// let extensions = image_extensions();
/// assert!(extensions.contains(&"jpeg"));
/// ```
#[must_use]
pub fn image_extensions() -> &'static [&'static str] {
    IMAGE_EXTENSIONS
}

/// File name without its extension.
///
/// Returns an empty string for paths without a UTF-8 file stem.
pub fn base_name(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or("")
}
