//! View tags and their display orders.
//!
//! A view tag says which side of a product a photo shows. It is read from the
//! words left in a filename once the product key phrase is removed, and it
//! decides the image's position in the product gallery.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::normalize::normalize;

/// Side of the product shown in an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewTag {
    Front,
    Back,
    Side,
    Inside,
    Top,
    Bottom,
    /// No view word was found.
    #[default]
    Unknown,
}

impl ViewTag {
    /// All view tags, in declaration order.
    pub fn all() -> &'static [ViewTag] {
        &[
            ViewTag::Front,
            ViewTag::Back,
            ViewTag::Side,
            ViewTag::Inside,
            ViewTag::Top,
            ViewTag::Bottom,
            ViewTag::Unknown,
        ]
    }
}

impl fmt::Display for ViewTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => write!(f, "front"),
            Self::Back => write!(f, "back"),
            Self::Side => write!(f, "side"),
            Self::Inside => write!(f, "inside"),
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for ViewTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            "side" => Ok(Self::Side),
            "inside" => Ok(Self::Inside),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "unknown" => Ok(Self::Unknown),
            other => Err(format!("unknown view tag: {}", other)),
        }
    }
}

/// A location word and the view it denotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewWord {
    pub word: String,
    pub view: ViewTag,
}

impl ViewWord {
    pub fn new(word: impl Into<String>, view: ViewTag) -> Self {
        Self {
            word: word.into(),
            view,
        }
    }
}

/// Default location vocabulary, in match priority order.
pub fn default_view_words() -> Vec<ViewWord> {
    vec![
        ViewWord::new("on", ViewTag::Front),
        ViewWord::new("ön", ViewTag::Front),
        ViewWord::new("arka", ViewTag::Back),
        ViewWord::new("yan", ViewTag::Side),
        ViewWord::new("ic", ViewTag::Inside),
        ViewWord::new("iç", ViewTag::Inside),
        ViewWord::new("taban", ViewTag::Bottom),
        ViewWord::new("ust", ViewTag::Top),
        ViewWord::new("üst", ViewTag::Top),
    ]
}

/// View vocabulary with its words normalized once up front.
#[derive(Debug, Clone)]
pub struct ViewVocabulary {
    words: Vec<(String, ViewTag)>,
}

impl ViewVocabulary {
    pub fn new(words: &[ViewWord]) -> Self {
        let words = words
            .iter()
            .map(|w| (normalize(&w.word), w.view))
            .filter(|(word, _)| !word.is_empty())
            .collect();
        Self { words }
    }

    /// Find the view named in already-normalized text.
    ///
    /// Words are tested as substrings in vocabulary order; the first hit
    /// wins. Returns [`ViewTag::Unknown`] when nothing matches.
    pub fn detect(&self, normalized_text: &str) -> ViewTag {
        self.words
            .iter()
            .find(|(word, _)| normalized_text.contains(word.as_str()))
            .map(|(_, view)| *view)
            .unwrap_or_default()
    }
}

/// Display order assigned to each view.
///
/// The defaults put front and unknown views first and every other view at
/// position 2, so several non-front views of one product share an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOrders {
    pub front: u32,
    pub back: u32,
    pub side: u32,
    pub inside: u32,
    pub top: u32,
    pub bottom: u32,
    pub unknown: u32,
}

impl Default for ViewOrders {
    fn default() -> Self {
        Self {
            front: 1,
            back: 2,
            side: 2,
            inside: 2,
            top: 2,
            bottom: 2,
            unknown: 1,
        }
    }
}

impl ViewOrders {
    /// Display order for `view`.
    pub fn order_for(&self, view: ViewTag) -> u32 {
        match view {
            ViewTag::Front => self.front,
            ViewTag::Back => self.back,
            ViewTag::Side => self.side,
            ViewTag::Inside => self.inside,
            ViewTag::Top => self.top,
            ViewTag::Bottom => self.bottom,
            ViewTag::Unknown => self.unknown,
        }
    }
}
