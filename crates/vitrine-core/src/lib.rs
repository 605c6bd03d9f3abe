//! # vitrine-core: Pure Storefront Logic for Vitrine
//!
//! This crate is the **heart** of Vitrine. It contains the storefront's one
//! genuinely algorithmic piece — variant resolution — as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vitrine Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Catalog UI ──► Product Detail UI ──► Cart UI ──► Checkout   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ generated TS bindings                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vitrine-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌───────────┐ ┌──────────┐ ┌────────┐ ┌───────┐ │   │
//! │  │  │  types   │ │ selection │ │ resolver │ │ media  │ │ingest │ │   │
//! │  │  │ Product  │ │ Selection │ │ matching │ │fallback│ │ wire  │ │   │
//! │  │  │ Variant  │ │  State    │ │ rules    │ │ chain  │ │ shape │ │   │
//! │  │  └──────────┘ └───────────┘ └──────────┘ └────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    REST Backend (external)                      │   │
//! │  │      products, orders, users, payments — not modeled here       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (Product, Variant, OptionChoice, media)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`category`] - Per-category option ordering and presentation config
//! - [`selection`] - SelectionState and its transition rules
//! - [`resolver`] - Option listing, availability, exact variant matching
//! - [`media`] - Display-image resolution with partial-match fallback
//! - [`ingest`] - Wire-shape normalization and schema checks
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, and rendering access is FORBIDDEN here
//! 3. **Normalize Once**: The legacy wire-shape duality dies at the ingestion
//!    boundary; the resolver never branches on shape
//! 4. **Config as a Value**: Category rules are parameters, never global state
//! 5. **Total Resolvers**: "no match yet" and "no image yet" are ordinary
//!    results (`None`/empty), never errors
//!
//! ## Example Usage
//!
//! ```rust
//! use vitrine_core::category::{CategoryConfig, OptionSpec};
//! use vitrine_core::money::Money;
//! use vitrine_core::resolver::{available_values_for, resolve_variant};
//! use vitrine_core::selection::SelectionState;
//! use vitrine_core::types::{OptionChoice, Product, Variant};
//!
//! let product = Product {
//!     category: "clothes".into(),
//!     base_price: Money::from_cents(1999),
//!     variants: vec![
//!         Variant {
//!             choices: vec![
//!                 OptionChoice::new("Color", "Red"),
//!                 OptionChoice::new("Size", "S"),
//!             ],
//!             image: Some("rs.png".into()),
//!             price_adjustment: Money::zero(),
//!             stock: 5,
//!         },
//!     ],
//!     main_image: None,
//!     additional_images: vec![],
//!     videos: vec![],
//! };
//! let config = CategoryConfig::new([OptionSpec::swatch("Color"), OptionSpec::chip("Size")]);
//!
//! // User picks Color, then asks which Sizes remain
//! let selection = SelectionState::new().select("Color", "Red", &config);
//! assert_eq!(available_values_for(&product, &selection, "Size", &config), vec!["S"]);
//!
//! // Completing the selection resolves the exact variant
//! let selection = selection.select("Size", "S", &config);
//! assert_eq!(resolve_variant(&product, &selection).unwrap().stock, 5);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod category;
pub mod error;
pub mod ingest;
pub mod media;
pub mod money;
pub mod resolver;
pub mod selection;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vitrine_core::Money` instead of
// `use vitrine_core::money::Money`

pub use category::{CategoryConfig, DisplayStyle, OptionSpec};
pub use error::{CoreError, CoreResult, ValidationError};
pub use media::resolve_display_image;
pub use money::Money;
pub use resolver::{available_values_for, is_value_available, list_option_names, resolve_variant};
pub use selection::SelectionState;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an option name ("Color", "Strap Material").
///
/// ## Business Reason
/// Option names render as picker labels; anything longer than this is a
/// data-entry mistake, not a real dimension.
pub const MAX_OPTION_NAME_LEN: usize = 50;

/// Maximum length of an option value ("Red", "One Size").
///
/// ## Business Reason
/// Values render inside chips and swatches; the admin console enforces the
/// same bound on entry.
pub const MAX_OPTION_VALUE_LEN: usize = 100;

/// Maximum length of a media URL.
///
/// ## Business Reason
/// Matches the CDN's URL limit; longer strings are truncated upstream and
/// would 404 anyway.
pub const MAX_MEDIA_URL_LEN: usize = 2048;
