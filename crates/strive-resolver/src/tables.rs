//! Hand-authored lookup tables driving filename resolution.
//!
//! The tables are plain data, deserializable from the tool's configuration
//! file. The defaults are the tables the storefront's image set was named
//! against.

use serde::{Deserialize, Serialize};

use crate::view::{default_view_words, ViewOrders, ViewTag, ViewWord};

/// A file whose name follows no convention, mapped directly to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCase {
    /// Exact filename, extension included.
    pub file: String,
    /// Substring of the product's name.
    pub pattern: String,
    #[serde(default)]
    pub view: ViewTag,
}

/// A product-type key phrase and the product name pattern it stands for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeKey {
    pub key: String,
    pub pattern: String,
}

impl TypeKey {
    pub fn new(key: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pattern: pattern.into(),
        }
    }
}

/// A filename bound to a product id and display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedImage {
    pub file: String,
    pub product_id: i64,
    pub order: u32,
}

/// Every table the fuzzy resolver consults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverTables {
    pub special_cases: Vec<SpecialCase>,
    pub type_keys: Vec<TypeKey>,
    pub view_words: Vec<ViewWord>,
    pub view_orders: ViewOrders,
}

impl Default for ResolverTables {
    fn default() -> Self {
        Self {
            special_cases: default_special_cases(),
            type_keys: default_type_keys(),
            view_words: default_view_words(),
            view_orders: ViewOrders::default(),
        }
    }
}

/// Default special-case table.
pub fn default_special_cases() -> Vec<SpecialCase> {
    vec![
        SpecialCase {
            file: "IMG_0423.jpg".to_string(),
            pattern: "Explorer 4-Person Tent".to_string(),
            view: ViewTag::Inside,
        },
        SpecialCase {
            file: "DSC01877.png".to_string(),
            pattern: "Lightweight Hiking Backpack".to_string(),
            view: ViewTag::Back,
        },
    ]
}

/// Default product-type key table, in match priority order.
///
/// Longer phrases come before phrases they contain.
pub fn default_type_keys() -> Vec<TypeKey> {
    vec![
        TypeKey::new("Men's Jackets", "Alpine Explorer Insulated Jacket"),
        TypeKey::new("kırmızı mont", "Alpine Explorer Insulated Jacket"),
        TypeKey::new("kırmızı", "Alpine Explorer Insulated Jacket"),
        TypeKey::new("tamir seti", "Bike Repair Kit"),
        TypeKey::new("bisiklet", "Trail Master Pro Bike"),
        TypeKey::new("tişört", "Performance T-Shirt"),
        TypeKey::new("çadır", "Explorer 4-Person Tent"),
        TypeKey::new("sırt çantası", "Lightweight Hiking Backpack"),
        TypeKey::new("çanta", "Lightweight Hiking Backpack"),
        TypeKey::new("ayakkabı", "Trail Running Shoes"),
    ]
}

/// Default fixed filename to product table.
pub fn default_mapped_images() -> Vec<MappedImage> {
    [
        ("trail_master_pro_bike.jpg", 28, 1),
        ("bike_repair_kit.jpg", 30, 1),
        ("tshirt1.jpg", 2, 1),
        ("tshirt2.jpg", 2, 2),
        ("tshirt3.jpg", 2, 3),
        ("explorer_tent.jpg", 16, 1),
        ("hiking_backpack.jpg", 17, 1),
    ]
    .into_iter()
    .map(|(file, product_id, order)| MappedImage {
        file: file.to_string(),
        product_id,
        order,
    })
    .collect()
}
