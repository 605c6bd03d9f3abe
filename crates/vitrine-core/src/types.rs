//! # Catalog Types
//!
//! Core catalog types used throughout Vitrine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Variant      │   │  OptionChoice   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  category       │   │  choices []     │   │  name "Color"   │       │
//! │  │  base_price     │   │  image?         │   │  value "Red"    │       │
//! │  │  variants []    │   │  price_adj      │   └─────────────────┘       │
//! │  │  main_image?    │   │  stock          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  DisplayMedia   │   │   MediaKind     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  url            │   │  Image          │                             │
//! │  │  kind           │   │  Video          │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Canonical Representation
//! Every variant carries its choices as a `Vec<OptionChoice>`. The legacy
//! flattened `optionName`/`optionValue` pair that still appears in wire data
//! is normalized away at the ingestion boundary ([`crate::ingest`]); nothing
//! past that boundary ever branches on shape.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Option Choice
// =============================================================================

/// One selected dimension of a variant, e.g. (Color, Red).
///
/// Pair equality is exact string equality on both fields; matching never
/// normalizes case or whitespace. The catalog is expected to use consistent
/// spellings across variants of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionChoice {
    /// The option dimension, e.g. "Color".
    pub name: String,
    /// The concrete value, e.g. "Red".
    pub value: String,
}

impl OptionChoice {
    /// Creates a choice from any string-ish pair.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        OptionChoice {
            name: name.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Variant
// =============================================================================

/// A specific purchasable configuration of a product (e.g. Red/Medium),
/// with its own stock, optional price delta, and optional image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variant {
    /// The option choices that identify this variant. Order is irrelevant;
    /// matching treats this as a set.
    pub choices: Vec<OptionChoice>,

    /// Image shown when this variant is selected (or partially matched).
    pub image: Option<String>,

    /// Signed offset from the product's base price, in cents.
    pub price_adjustment: Money,

    /// Units on hand. Non-negative in well-formed data.
    pub stock: i64,
}

impl Variant {
    /// Checks whether this variant carries the exact (name, value) pair.
    pub fn has_choice(&self, name: &str, value: &str) -> bool {
        self.choices
            .iter()
            .any(|c| c.name == name && c.value == value)
    }

    /// Returns this variant's value for an option name, if it carries one.
    pub fn value_for(&self, name: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.value.as_str())
    }

    /// Whether at least one unit can be purchased.
    #[inline]
    pub const fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as the resolver sees it: normalized variants plus the media
/// fields the display-image fallback chain walks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Category key; selects the [`crate::category::CategoryConfig`] that
    /// callers pass alongside this product.
    pub category: String,

    /// Base price in cents, before any variant adjustment.
    pub base_price: Money,

    /// All purchasable configurations. May be empty for a product sold
    /// without options.
    pub variants: Vec<Variant>,

    /// The product's own primary image.
    pub main_image: Option<String>,

    /// Gallery images after the primary one.
    pub additional_images: Vec<String>,

    /// Product videos, lowest-priority media fallback.
    pub videos: Vec<String>,
}

impl Product {
    /// The number of option dimensions each variant is expected to carry.
    ///
    /// Taken from the first variant; all variants of a product are assumed
    /// structurally uniform (enforced at ingestion, see
    /// [`crate::ingest::normalize_product`]). Zero when there are no
    /// variants.
    pub fn option_cardinality(&self) -> usize {
        self.variants.first().map_or(0, |v| v.choices.len())
    }

    /// Final display price for a variant of this product: base price plus
    /// the variant's signed adjustment, floored at zero.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::money::Money;
    /// use vitrine_core::types::{Product, Variant};
    ///
    /// let product = Product {
    ///     category: "clothes".into(),
    ///     base_price: Money::from_cents(1999),
    ///     variants: vec![],
    ///     main_image: None,
    ///     additional_images: vec![],
    ///     videos: vec![],
    /// };
    /// let premium = Variant {
    ///     choices: vec![],
    ///     image: None,
    ///     price_adjustment: Money::from_cents(500),
    ///     stock: 1,
    /// };
    /// assert_eq!(product.variant_price(&premium).cents(), 2499);
    /// ```
    pub fn variant_price(&self, variant: &Variant) -> Money {
        (self.base_price + variant.price_adjustment).floor_at_zero()
    }
}

// =============================================================================
// Display Media
// =============================================================================

/// Distinguishes image URLs from video URLs in the media fallback chain,
/// so the frontend knows which element to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// The media the product detail view should currently display.
///
/// Returned by [`crate::media::resolve_display_image`]; `None` at the call
/// site means the product has no media at all, which is a valid terminal
/// state rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayMedia {
    pub url: String,
    pub kind: MediaKind,
}

impl DisplayMedia {
    /// Shorthand for an image entry.
    pub fn image(url: impl Into<String>) -> Self {
        DisplayMedia {
            url: url.into(),
            kind: MediaKind::Image,
        }
    }

    /// Shorthand for a video entry.
    pub fn video(url: impl Into<String>) -> Self {
        DisplayMedia {
            url: url.into(),
            kind: MediaKind::Video,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(pairs: &[(&str, &str)]) -> Variant {
        Variant {
            choices: pairs
                .iter()
                .map(|(n, v)| OptionChoice::new(*n, *v))
                .collect(),
            image: None,
            price_adjustment: Money::zero(),
            stock: 0,
        }
    }

    #[test]
    fn test_has_choice_is_exact() {
        let v = variant(&[("Color", "Red"), ("Size", "M")]);
        assert!(v.has_choice("Color", "Red"));
        assert!(!v.has_choice("Color", "red")); // case matters
        assert!(!v.has_choice("Size", "Red"));
    }

    #[test]
    fn test_value_for() {
        let v = variant(&[("Color", "Red"), ("Size", "M")]);
        assert_eq!(v.value_for("Size"), Some("M"));
        assert_eq!(v.value_for("Material"), None);
    }

    #[test]
    fn test_option_cardinality() {
        let mut p = Product {
            category: "clothes".into(),
            base_price: Money::from_cents(1999),
            variants: vec![],
            main_image: None,
            additional_images: vec![],
            videos: vec![],
        };
        assert_eq!(p.option_cardinality(), 0);

        p.variants.push(variant(&[("Color", "Red"), ("Size", "M")]));
        assert_eq!(p.option_cardinality(), 2);
    }

    #[test]
    fn test_variant_price_floors_at_zero() {
        let p = Product {
            category: "clothes".into(),
            base_price: Money::from_cents(500),
            variants: vec![],
            main_image: None,
            additional_images: vec![],
            videos: vec![],
        };
        let mut v = variant(&[]);
        v.price_adjustment = Money::from_cents(-800);
        assert_eq!(p.variant_price(&v).cents(), 0);

        v.price_adjustment = Money::zero();
        assert_eq!(p.variant_price(&v).cents(), 500);
    }
}
