//! # Display Media Resolution
//!
//! Decides which image (or video) the product detail view shows while the
//! user works through an incomplete selection.
//!
//! ## Priority Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  resolve_display_image                                                  │
//! │                                                                         │
//! │  1. Resolved variant has an image?          ──► use it                  │
//! │        │ no                                                             │
//! │        ▼                                                                │
//! │  2. Selection non-empty? Best partial match ──► use its image           │
//! │     (max pair-intersection count > 0,                                   │
//! │      ties to first encountered)                                         │
//! │        │ no                                                             │
//! │        ▼                                                                │
//! │  3. Category fallback:                                                  │
//! │     exclusive-variant-media + any variant image ──► first variant image │
//! │     else product main image                                             │
//! │     else first additional image                                         │
//! │     else first video                                                    │
//! │     else None                    (no media is a valid terminal state)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::category::CategoryConfig;
use crate::selection::SelectionState;
use crate::types::{DisplayMedia, Product, Variant};

// =============================================================================
// Resolution
// =============================================================================

/// Picks the media to display for the current selection.
///
/// `resolved` is the output of [`crate::resolver::resolve_variant`] for the
/// same product and selection; it is passed in rather than recomputed so a
/// view that already resolved the variant doesn't pay for the search twice.
///
/// This function has no error path: a product with no media at all yields
/// `None`, which the view renders as its placeholder.
pub fn resolve_display_image(
    product: &Product,
    selections: &SelectionState,
    resolved: Option<&Variant>,
    config: &CategoryConfig,
) -> Option<DisplayMedia> {
    // 1. Exact match carries its own image.
    if let Some(image) = resolved.and_then(|v| v.image.as_deref()) {
        return Some(DisplayMedia::image(image));
    }

    // 2. Best partial match. Only meaningful once the user has chosen
    //    something; an empty selection would just award every variant zero.
    if !selections.is_empty() {
        if let Some(image) = best_partial_match(product, selections) {
            return Some(DisplayMedia::image(image));
        }
    }

    // 3. Category-driven fallback.
    if config.exclusive_variant_media {
        if let Some(image) = product.variants.iter().find_map(|v| v.image.as_deref()) {
            return Some(DisplayMedia::image(image));
        }
    }
    if let Some(main) = product.main_image.as_deref() {
        return Some(DisplayMedia::image(main));
    }
    if let Some(first) = product.additional_images.first() {
        return Some(DisplayMedia::image(first));
    }
    if let Some(video) = product.videos.first() {
        return Some(DisplayMedia::video(video));
    }

    None
}

/// The image of the variant sharing the most exact (name, value) pairs with
/// the selection, provided it shares at least one. Ties go to the variant
/// encountered first.
fn best_partial_match<'a>(product: &'a Product, selections: &SelectionState) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for variant in &product.variants {
        let Some(image) = variant.image.as_deref() else {
            continue;
        };
        let overlap = variant
            .choices
            .iter()
            .filter(|c| selections.get(&c.name) == Some(c.value.as_str()))
            .count();
        if overlap == 0 {
            continue;
        }
        // Strictly-greater keeps the first encountered on ties.
        if best.map_or(true, |(_, count)| overlap > count) {
            best = Some((image, overlap));
        }
    }
    best.map(|(image, _)| image)
}

// =============================================================================
// Unit Tests
// =============================================================================
