//! MIME type classification for image files.
//!
//! The content type stored next to every image payload is derived from the
//! file extension alone; the bytes are never sniffed.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths::extension_lowercase;

/// Content type stored in the `image_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageMime {
    /// `image/jpeg`, for `.jpg` and `.jpeg`.
    #[serde(rename = "image/jpeg")]
    Jpeg,
    /// `image/png`.
    #[serde(rename = "image/png")]
    Png,
    /// `application/octet-stream`, for anything else.
    #[serde(rename = "application/octet-stream")]
    OctetStream,
}

impl ImageMime {
    /// Classify a path by its extension, case-insensitively.
    pub fn from_path(path: &Path) -> Self {
        match extension_lowercase(path).as_deref() {
            Some("jpg") | Some("jpeg") => Self::Jpeg,
            Some("png") => Self::Png,
            _ => Self::OctetStream,
        }
    }

    /// The MIME string written to the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::OctetStream => "application/octet-stream",
        }
    }

    /// Whether the extension was recognized.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::OctetStream)
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a file and warn when the extension is not a known image type.
///
/// Unknown types are not an error: the generic binary type is used and
/// processing continues.
pub fn classify(path: &Path) -> ImageMime {
    let mime = ImageMime::from_path(path);
    if !mime.is_known() {
        tracing::warn!(
            "Unknown image type for {}, using {}",
            path.display(),
            mime
        );
    }
    mime
}
