//! # Catalog Ingestion
//!
//! Normalizes wire-shaped product JSON into the core's canonical types.
//!
//! ## The Shape Duality
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The backend emits variants in TWO shapes:                              │
//! │                                                                         │
//! │  Current:  { "options": [ {"optionName": "Color",                       │
//! │                            "optionValue": "Red"},                       │
//! │                           {"optionName": "Size",                        │
//! │                            "optionValue": "M"} ], ... }                 │
//! │                                                                         │
//! │  Legacy:   { "optionName": "Color", "optionValue": "Red", ... }         │
//! │            (single flattened pair, pre-multi-option catalog rows)       │
//! │                                                                         │
//! │  Normalization happens HERE, once. Everything past this module works    │
//! │  on Vec<OptionChoice> and never branches on shape again.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A variant carrying both shapes prefers the `options` array; a variant
//! carrying neither ingests with an empty choice list (a single-configuration
//! product).
//!
//! ## Schema Uniformity
//! All variants of a product must carry the same number of option choices.
//! A mismatch is a catalog data bug: exact matching against a non-uniform
//! variant list is undefined. Ingestion rejects such products with
//! [`CoreError::VariantSchemaMismatch`] and emits a `tracing` warning so the
//! catalog team can chase the bad row.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{OptionChoice, Product, Variant};
use crate::validation::{
    validate_media_url, validate_option_name, validate_option_value, validate_stock,
};

// =============================================================================
// Wire Types
// =============================================================================

/// One (optionName, optionValue) pair as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOptionChoice {
    pub option_name: String,
    pub option_value: String,
}

/// A variant row as the backend sends it: either shape, plus media, price
/// adjustment (signed cents), and stock.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireVariant {
    /// Current shape: an array of option choices.
    pub options: Option<Vec<WireOptionChoice>>,

    /// Legacy flattened shape: the single option's name.
    pub option_name: Option<String>,

    /// Legacy flattened shape: the single option's value.
    pub option_value: Option<String>,

    pub image: Option<String>,

    /// Signed offset from the product base price, in cents.
    #[serde(default)]
    pub price_adjustment: i64,

    #[serde(default)]
    pub stock: i64,
}

/// A product record as the backend sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProduct {
    pub category: String,

    /// Base price in cents.
    #[serde(default)]
    pub base_price: i64,

    /// The backend calls these "variations".
    #[serde(default)]
    pub variations: Vec<WireVariant>,

    pub main_image: Option<String>,

    #[serde(default)]
    pub additional_images: Vec<String>,

    #[serde(default)]
    pub videos: Vec<String>,
}

// =============================================================================
// Normalization
// =============================================================================

/// Normalizes a wire product into the canonical [`Product`].
///
/// Validates every field, resolves the variant shape duality, and enforces
/// option-cardinality uniformity across variants.
///
/// ## Example
/// ```rust
/// use vitrine_core::ingest::normalize_product;
///
/// let wire = serde_json::from_value(serde_json::json!({
///     "category": "clothes",
///     "basePrice": 1999,
///     "variations": [
///         { "optionName": "Color", "optionValue": "Red", "stock": 5 }
///     ]
/// }))
/// .unwrap();
///
/// let product = normalize_product(wire).unwrap();
/// assert_eq!(product.variants[0].choices[0].name, "Color");
/// assert_eq!(product.variants[0].choices[0].value, "Red");
/// ```
pub fn normalize_product(wire: WireProduct) -> CoreResult<Product> {
    let mut variants = Vec::with_capacity(wire.variations.len());
    for wire_variant in wire.variations {
        variants.push(normalize_variant(wire_variant)?);
    }

    check_uniform_cardinality(&variants)?;

    if let Some(main) = wire.main_image.as_deref() {
        validate_media_url(main)?;
    }
    for url in &wire.additional_images {
        validate_media_url(url)?;
    }
    for url in &wire.videos {
        validate_media_url(url)?;
    }

    Ok(Product {
        category: wire.category,
        base_price: Money::from_cents(wire.base_price),
        variants,
        main_image: wire.main_image,
        additional_images: wire.additional_images,
        videos: wire.videos,
    })
}

/// Normalizes a single variant row, resolving the shape duality.
pub fn normalize_variant(wire: WireVariant) -> CoreResult<Variant> {
    let choices = match (wire.options, wire.option_name, wire.option_value) {
        // Current shape wins even when legacy fields are also present.
        (Some(options), _, _) => options
            .into_iter()
            .map(|o| {
                validate_option_name(&o.option_name)?;
                validate_option_value(&o.option_value)?;
                Ok(OptionChoice {
                    name: o.option_name,
                    value: o.option_value,
                })
            })
            .collect::<CoreResult<Vec<_>>>()?,

        // Legacy flattened pair.
        (None, Some(name), Some(value)) => {
            validate_option_name(&name)?;
            validate_option_value(&value)?;
            vec![OptionChoice { name, value }]
        }

        // No options at all: a single-configuration product.
        (None, _, _) => Vec::new(),
    };

    if let Some(image) = wire.image.as_deref() {
        validate_media_url(image)?;
    }
    validate_stock(wire.stock)?;

    Ok(Variant {
        choices,
        image: wire.image,
        price_adjustment: Money::from_cents(wire.price_adjustment),
        stock: wire.stock,
    })
}

/// Every variant must carry as many choices as the first one.
fn check_uniform_cardinality(variants: &[Variant]) -> CoreResult<()> {
    let Some(first) = variants.first() else {
        return Ok(());
    };
    let expected = first.choices.len();

    for (index, variant) in variants.iter().enumerate().skip(1) {
        let found = variant.choices.len();
        if found != expected {
            tracing::warn!(
                index,
                expected,
                found,
                "variant option cardinality disagrees with siblings; rejecting product"
            );
            return Err(CoreError::VariantSchemaMismatch {
                expected,
                found,
                index,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_product(value: serde_json::Value) -> WireProduct {
        serde_json::from_value(value).expect("valid wire JSON")
    }

    #[test]
    fn test_normalize_options_array_shape() {
        let product = normalize_product(wire_product(json!({
            "category": "clothes",
            "basePrice": 1999,
            "variations": [{
                "options": [
                    { "optionName": "Color", "optionValue": "Red" },
                    { "optionName": "Size", "optionValue": "M" }
                ],
                "image": "rm.png",
                "priceAdjustment": -200,
                "stock": 3
            }]
        })))
        .unwrap();

        let variant = &product.variants[0];
        assert_eq!(variant.choices.len(), 2);
        assert!(variant.has_choice("Color", "Red"));
        assert!(variant.has_choice("Size", "M"));
        assert_eq!(variant.image.as_deref(), Some("rm.png"));
        assert_eq!(variant.price_adjustment.cents(), -200);
        assert_eq!(variant.stock, 3);
    }

    #[test]
    fn test_normalize_legacy_flattened_shape() {
        let product = normalize_product(wire_product(json!({
            "category": "clothes",
            "variations": [
                { "optionName": "Color", "optionValue": "Red", "stock": 5 }
            ]
        })))
        .unwrap();

        let variant = &product.variants[0];
        assert_eq!(variant.choices, vec![OptionChoice::new("Color", "Red")]);
    }

    #[test]
    fn test_both_shapes_prefers_options_array() {
        let product = normalize_product(wire_product(json!({
            "category": "clothes",
            "variations": [{
                "options": [ { "optionName": "Size", "optionValue": "L" } ],
                "optionName": "Color",
                "optionValue": "Red"
            }]
        })))
        .unwrap();

        assert_eq!(
            product.variants[0].choices,
            vec![OptionChoice::new("Size", "L")]
        );
    }

    #[test]
    fn test_shape_equivalence() {
        // The same single-choice variant in both shapes ingests identically.
        let legacy = normalize_variant(
            serde_json::from_value(json!({
                "optionName": "Color", "optionValue": "Red", "stock": 2
            }))
            .unwrap(),
        )
        .unwrap();
        let current = normalize_variant(
            serde_json::from_value(json!({
                "options": [ { "optionName": "Color", "optionValue": "Red" } ],
                "stock": 2
            }))
            .unwrap(),
        )
        .unwrap();
        assert_eq!(legacy, current);
    }

    #[test]
    fn test_no_options_is_single_configuration() {
        let product = normalize_product(wire_product(json!({
            "category": "posters",
            "variations": [ { "stock": 10 } ]
        })))
        .unwrap();
        assert!(product.variants[0].choices.is_empty());
        assert_eq!(product.option_cardinality(), 0);
    }

    #[test]
    fn test_cardinality_mismatch_rejected() {
        let err = normalize_product(wire_product(json!({
            "category": "clothes",
            "variations": [
                { "options": [
                    { "optionName": "Color", "optionValue": "Red" },
                    { "optionName": "Size", "optionValue": "M" }
                ]},
                { "optionName": "Color", "optionValue": "Blue" }
            ]
        })))
        .unwrap_err();

        assert!(matches!(
            err,
            CoreError::VariantSchemaMismatch {
                expected: 2,
                found: 1,
                index: 1
            }
        ));
    }

    #[test]
    fn test_invalid_fields_rejected() {
        assert!(normalize_product(wire_product(json!({
            "category": "clothes",
            "variations": [ { "optionName": "", "optionValue": "Red" } ]
        })))
        .is_err());

        assert!(normalize_product(wire_product(json!({
            "category": "clothes",
            "variations": [ { "optionName": "Color", "optionValue": "Red", "stock": -1 } ]
        })))
        .is_err());

        assert!(normalize_product(wire_product(json!({
            "category": "clothes",
            "mainImage": "",
            "variations": []
        })))
        .is_err());
    }

    #[test]
    fn test_ingested_product_resolves() {
        // End to end: wire JSON in, resolved variant out.
        use crate::category::{CategoryConfig, OptionSpec};
        use crate::resolver::resolve_variant;
        use crate::selection::SelectionState;

        let product = normalize_product(wire_product(json!({
            "category": "clothes",
            "basePrice": 1999,
            "variations": [
                { "options": [
                    { "optionName": "Color", "optionValue": "Red" },
                    { "optionName": "Size", "optionValue": "S" }
                ], "stock": 5, "image": "rs.png" },
                { "options": [
                    { "optionName": "Color", "optionValue": "Red" },
                    { "optionName": "Size", "optionValue": "M" }
                ], "stock": 0 },
                { "options": [
                    { "optionName": "Color", "optionValue": "Blue" },
                    { "optionName": "Size", "optionValue": "S" }
                ], "stock": 3 }
            ]
        })))
        .unwrap();

        let config = CategoryConfig::new([OptionSpec::swatch("Color"), OptionSpec::chip("Size")]);
        let s = SelectionState::new()
            .select("Color", "Red", &config)
            .select("Size", "S", &config);

        let resolved = resolve_variant(&product, &s).expect("resolves after ingestion");
        assert_eq!(resolved.stock, 5);
        assert_eq!(resolved.image.as_deref(), Some("rs.png"));
    }
}
