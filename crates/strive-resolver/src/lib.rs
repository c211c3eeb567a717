//! # strive-resolver
//!
//! Maps hand-named product image files to the product they show.
//!
//! Resolution is a chain of strategies tried in priority order, the first
//! match winning:
//!
//! 1. **Special case**: the exact filename is listed in the special-case table.
//! 2. **Pattern key**: a product-type key phrase occurs in the normalized base
//!    name. The rest of the name is searched for a location word giving the
//!    view.
//! 3. **Unresolved**: nothing matched.
//!
//! A resolution yields a product *name pattern*; looking the product up is
//! left to the caller.
//!
//! ```
//! use strive_resolver::{ProductResolver, Resolution, ViewTag};
//! use strive_resolver::tables::ResolverTables;
//!
//! let resolver = ProductResolver::new(&ResolverTables::default());
//!
//! match resolver.resolve("Men's Jackets_on.jpg") {
//!     Resolution::PatternKey { pattern, view, .. } => {
//!         assert_eq!(pattern, "Alpine Explorer Insulated Jacket");
//!         assert_eq!(view, ViewTag::Front);
//!     }
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod generated;
pub mod normalize;
pub mod tables;
pub mod view;

use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use normalize::normalize;
use strive_common::paths::base_name;
use tables::ResolverTables;
pub use view::{ViewOrders, ViewTag};
use view::ViewVocabulary;

/// Outcome of resolving one filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Resolution<'a> {
    /// The filename is listed in the special-case table.
    SpecialCase { pattern: &'a str, view: ViewTag },
    /// A product-type key phrase was found in the filename.
    PatternKey {
        key: &'a str,
        pattern: &'a str,
        view: ViewTag,
    },
    /// No strategy matched.
    Unresolved,
}

impl<'a> Resolution<'a> {
    /// Product name pattern, if resolved.
    pub fn pattern(&self) -> Option<&'a str> {
        match self {
            Self::SpecialCase { pattern, .. } | Self::PatternKey { pattern, .. } => Some(*pattern),
            Self::Unresolved => None,
        }
    }

    /// View tag, if resolved.
    pub fn view(&self) -> Option<ViewTag> {
        match self {
            Self::SpecialCase { view, .. } | Self::PatternKey { view, .. } => Some(*view),
            Self::Unresolved => None,
        }
    }

    /// Short name of the strategy that produced this outcome.
    pub fn strategy(&self) -> &'static str {
        match self {
            Self::SpecialCase { .. } => "special_case",
            Self::PatternKey { .. } => "pattern_key",
            Self::Unresolved => "unresolved",
        }
    }
}

#[derive(Debug, Clone)]
struct PreparedKey {
    normalized: String,
    key: String,
    pattern: String,
}

#[derive(Debug, Clone)]
struct SpecialTarget {
    pattern: String,
    view: ViewTag,
}

/// Filename resolver built from a set of [`ResolverTables`].
///
/// Key phrases and view words are normalized once at construction.
#[derive(Debug, Clone)]
pub struct ProductResolver {
    special_cases: HashMap<String, SpecialTarget>,
    keys: Vec<PreparedKey>,
    vocabulary: ViewVocabulary,
    orders: ViewOrders,
}

impl ProductResolver {
    pub fn new(tables: &ResolverTables) -> Self {
        let mut special_cases = HashMap::with_capacity(tables.special_cases.len());
        for case in &tables.special_cases {
            special_cases
                .entry(case.file.clone())
                .or_insert_with(|| SpecialTarget {
                    pattern: case.pattern.clone(),
                    view: case.view,
                });
        }

        let keys = tables
            .type_keys
            .iter()
            .filter_map(|k| {
                let normalized = normalize(&k.key);
                if normalized.is_empty() {
                    tracing::debug!("Ignoring empty key phrase for pattern {:?}", k.pattern);
                    return None;
                }
                Some(PreparedKey {
                    normalized,
                    key: k.key.clone(),
                    pattern: k.pattern.clone(),
                })
            })
            .collect();

        Self {
            special_cases,
            keys,
            vocabulary: ViewVocabulary::new(&tables.view_words),
            orders: tables.view_orders,
        }
    }

    /// Resolve a filename (extension included) to a product pattern and view.
    pub fn resolve(&self, filename: &str) -> Resolution<'_> {
        if let Some(target) = self.special_cases.get(filename) {
            return Resolution::SpecialCase {
                pattern: &target.pattern,
                view: target.view,
            };
        }

        let base = normalize(base_name(Path::new(filename)));
        for key in &self.keys {
            if base.contains(key.normalized.as_str()) {
                let rest = base.replacen(key.normalized.as_str(), "", 1);
                return Resolution::PatternKey {
                    key: &key.key,
                    pattern: &key.pattern,
                    view: self.vocabulary.detect(&rest),
                };
            }
        }

        Resolution::Unresolved
    }

    /// Display order for a resolved view.
    pub fn display_order(&self, view: ViewTag) -> u32 {
        self.orders.order_for(view)
    }
}

impl Default for ProductResolver {
    fn default() -> Self {
        Self::new(&ResolverTables::default())
    }
}
