//! # Category Configuration
//!
//! Per-category presentation and ordering rules for option dimensions.
//!
//! ## Why a Parameter, Not a Lookup Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  The source storefront kept this as module-global lookup data.         │
//! │  Here it is a plain value passed into every resolver call:             │
//! │                                                                         │
//! │    CategoryConfig ──► list_option_names(product, &config)              │
//! │                  ──► available_values_for(.., &config)                 │
//! │                  ──► SelectionState::select(.., &config)               │
//! │                  ──► resolve_display_image(.., &config)                │
//! │                                                                         │
//! │  Keeps the resolver pure and independently testable: no hidden         │
//! │  shared state, and tests build configs inline.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Position in [`CategoryConfig::options`] is both the display priority and
//! the precedence order that drives the cascading-clear rule: changing an
//! earlier-declared option clears every later-declared one.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Display Style
// =============================================================================

/// How the frontend presents an option dimension's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    /// Clickable color circles, value doubles as the swatch color.
    ColorSwatch,
    /// Small labelled buttons (sizes, materials).
    Chip,
    /// Plain select element for long value lists.
    Dropdown,
}

// =============================================================================
// Option Spec
// =============================================================================

/// One option dimension as the category declares it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OptionSpec {
    /// Option name, e.g. "Color".
    pub name: String,

    /// Presentation style for this dimension.
    pub display_style: DisplayStyle,

    /// Explicit value ordering, e.g. ["XS","S","M","L","XL"] for sizes.
    /// When absent, values sort by a caseless lexicographic comparator.
    pub value_order: Option<Vec<String>>,
}

impl OptionSpec {
    /// A chip-style option with no explicit value ordering.
    pub fn chip(name: impl Into<String>) -> Self {
        OptionSpec {
            name: name.into(),
            display_style: DisplayStyle::Chip,
            value_order: None,
        }
    }

    /// A color-swatch option.
    pub fn swatch(name: impl Into<String>) -> Self {
        OptionSpec {
            name: name.into(),
            display_style: DisplayStyle::ColorSwatch,
            value_order: None,
        }
    }

    /// Attaches an explicit value ordering.
    pub fn with_value_order(mut self, order: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.value_order = Some(order.into_iter().map(Into::into).collect());
        self
    }
}

// =============================================================================
// Category Config
// =============================================================================

/// The full per-category table: declared option dimensions (in display and
/// precedence order) plus media behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryConfig {
    /// Declared options. List position = display priority = precedence for
    /// the cascading-clear rule. Option names appearing on variants but not
    /// declared here are tolerated: they sort after all declared names and
    /// are never auto-cleared.
    pub options: Vec<OptionSpec>,

    /// When true, the category sources its primary product media from
    /// variant images rather than the product record itself.
    pub exclusive_variant_media: bool,
}

impl CategoryConfig {
    /// A config with no declared options. Useful for categories whose
    /// products carry no variants, and for tests.
    pub fn empty() -> Self {
        CategoryConfig::default()
    }

    /// Builds a config from option specs in display order.
    pub fn new(options: impl IntoIterator<Item = OptionSpec>) -> Self {
        CategoryConfig {
            options: options.into_iter().collect(),
            exclusive_variant_media: false,
        }
    }

    /// Marks this category as sourcing primary media from variants.
    pub fn with_exclusive_variant_media(mut self) -> Self {
        self.exclusive_variant_media = true;
        self
    }

    /// Declared display priority of an option name, if declared.
    /// Lower is earlier.
    pub fn display_priority(&self, name: &str) -> Option<usize> {
        self.options.iter().position(|o| o.name == name)
    }

    /// The declared spec for an option name, if declared.
    pub fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// The explicit value ordering for an option name, when the category
    /// declares one.
    pub fn value_order(&self, name: &str) -> Option<&[String]> {
        self.option(name)?.value_order.as_deref()
    }

    /// Option names declared strictly after `name` in precedence order.
    /// Empty when `name` is undeclared: an undeclared option has no
    /// relative order and never triggers a cascade.
    pub fn declared_after<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> {
        let skip = self
            .display_priority(name)
            .map(|p| p + 1)
            .unwrap_or(self.options.len());
        self.options[skip..].iter().map(|o| o.name.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
