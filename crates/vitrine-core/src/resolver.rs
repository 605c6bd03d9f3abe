//! # Variant Resolver
//!
//! Pure matching logic over a product's variant list and the current
//! selection.
//!
//! ## Where This Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product Detail View                                                    │
//! │                                                                         │
//! │  user picks an option                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SelectionState::select  ──────────► new SelectionState                 │
//! │       │                                                                 │
//! │       ▼ (reactive recompute)                                            │
//! │  list_option_names       ──► which pickers to render, in order          │
//! │  available_values_for    ──► which values each picker offers            │
//! │  is_value_available      ──► which values to grey out                   │
//! │  resolve_variant         ──► Some(variant) once selection is complete   │
//! │  resolve_display_image   ──► which media to show meanwhile              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is total over well-formed input: missing or empty
//! variant lists produce empty/`None` results, never errors or panics.

use crate::category::CategoryConfig;
use crate::selection::SelectionState;
use crate::types::{Product, Variant};

// =============================================================================
// Option Listing
// =============================================================================

/// Collects the option names appearing across all variants, ordered by the
/// category's declared display priority.
///
/// Names the category does not declare sort after all declared ones, stable
/// in first-encounter order. A product with no variants yields an empty
/// list.
///
/// ## Example
/// ```rust
/// use vitrine_core::category::{CategoryConfig, OptionSpec};
/// use vitrine_core::money::Money;
/// use vitrine_core::resolver::list_option_names;
/// use vitrine_core::types::{OptionChoice, Product, Variant};
///
/// let product = Product {
///     category: "clothes".into(),
///     base_price: Money::from_cents(1999),
///     variants: vec![Variant {
///         choices: vec![
///             OptionChoice::new("Size", "M"),
///             OptionChoice::new("Color", "Red"),
///         ],
///         image: None,
///         price_adjustment: Money::zero(),
///         stock: 1,
///     }],
///     main_image: None,
///     additional_images: vec![],
///     videos: vec![],
/// };
/// let config = CategoryConfig::new([OptionSpec::swatch("Color"), OptionSpec::chip("Size")]);
///
/// // Color is declared first, so it leads regardless of variant order
/// assert_eq!(list_option_names(&product, &config), vec!["Color", "Size"]);
/// ```
pub fn list_option_names(product: &Product, config: &CategoryConfig) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for variant in &product.variants {
        for choice in &variant.choices {
            if !names.iter().any(|n| n == &choice.name) {
                names.push(choice.name.clone());
            }
        }
    }

    // Stable sort: undeclared names keep first-encounter order after all
    // declared ones.
    names.sort_by_key(|n| config.display_priority(n).unwrap_or(usize::MAX));
    names
}

// =============================================================================
// Availability
// =============================================================================

/// Values still selectable for `target`, constrained by every *other*
/// option already chosen.
///
/// A variant contributes its `target` value only if it also carries a
/// matching choice for each currently selected option other than `target`.
/// This models "show me which Sizes exist in the Color I already picked".
/// With an empty selection, this is simply every value ever associated
/// with `target`.
///
/// The result is deduplicated and ordered by the category's explicit
/// `value_order` for `target` when one is declared (values missing from
/// that list sort after it), else by a caseless lexicographic comparator.
pub fn available_values_for(
    product: &Product,
    selections: &SelectionState,
    target: &str,
    config: &CategoryConfig,
) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for variant in &product.variants {
        if !compatible_excluding(variant, selections, Some(target)) {
            continue;
        }
        if let Some(value) = variant.value_for(target) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
    }

    match config.value_order(target) {
        Some(order) => {
            // Declared values in declared order; stragglers after, caseless.
            values.sort_by(|a, b| {
                let pa = order.iter().position(|o| o == a);
                let pb = order.iter().position(|o| o == b);
                match (pa, pb) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => caseless_cmp(a, b),
                }
            });
        }
        None => values.sort_by(|a, b| caseless_cmp(a, b)),
    }

    values
}

/// True iff some variant carries (name, value) and is compatible with every
/// other current selection. Drives greying out combinations that would
/// leave zero matching variants.
pub fn is_value_available(
    product: &Product,
    selections: &SelectionState,
    name: &str,
    value: &str,
) -> bool {
    product.variants.iter().any(|variant| {
        variant.has_choice(name, value) && compatible_excluding(variant, selections, Some(name))
    })
}

// =============================================================================
// Exact Match
// =============================================================================

/// Finds the variant whose choice set equals the selection exactly.
///
/// Short-circuits to `None` unless the selection has exactly as many
/// entries as the product's option cardinality; an incomplete selection
/// never resolves. When catalog data contains duplicate choice sets (an
/// upstream data bug) the first variant in array order wins; that
/// tie-break is deliberate but should be prevented upstream.
pub fn resolve_variant<'a>(
    product: &'a Product,
    selections: &SelectionState,
) -> Option<&'a Variant> {
    if selections.len() != product.option_cardinality() {
        return None;
    }

    product.variants.iter().find(|variant| {
        variant.choices.len() == selections.len()
            && compatible_excluding(variant, selections, None)
    })
}

// =============================================================================
// Helpers
// =============================================================================

/// Whether `variant` carries a matching choice for every selected option,
/// ignoring `excluded` (the dimension being probed) when given.
fn compatible_excluding(
    variant: &Variant,
    selections: &SelectionState,
    excluded: Option<&str>,
) -> bool {
    selections
        .iter()
        .filter(|(name, _)| Some(*name) != excluded)
        .all(|(name, value)| variant.has_choice(name, value))
}

/// Caseless lexicographic comparison, with the exact strings as a
/// deterministic tie-break.
fn caseless_cmp(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::OptionSpec;
    use crate::money::Money;
    use crate::types::OptionChoice;

    fn variant(pairs: &[(&str, &str)], stock: i64, image: Option<&str>) -> Variant {
        Variant {
            choices: pairs
                .iter()
                .map(|(n, v)| OptionChoice::new(*n, *v))
                .collect(),
            image: image.map(String::from),
            price_adjustment: Money::zero(),
            stock,
        }
    }

    fn product(variants: Vec<Variant>) -> Product {
        Product {
            category: "clothes".into(),
            base_price: Money::from_cents(1999),
            variants,
            main_image: None,
            additional_images: vec![],
            videos: vec![],
        }
    }

    fn clothes() -> CategoryConfig {
        CategoryConfig::new([
            OptionSpec::swatch("Color"),
            OptionSpec::chip("Size").with_value_order(["XS", "S", "M", "L", "XL"]),
        ])
    }

    /// The worked storefront example: a T-shirt in Color × Size.
    fn t_shirt() -> Product {
        product(vec![
            variant(&[("Color", "Red"), ("Size", "S")], 5, Some("rs.png")),
            variant(&[("Color", "Red"), ("Size", "M")], 0, None),
            variant(&[("Color", "Blue"), ("Size", "S")], 3, None),
        ])
    }

    #[test]
    fn test_list_option_names_ordered_by_config() {
        let names = list_option_names(&t_shirt(), &clothes());
        assert_eq!(names, vec!["Color", "Size"]);
    }

    #[test]
    fn test_list_option_names_empty_product() {
        let names = list_option_names(&product(vec![]), &clothes());
        assert!(names.is_empty());
    }

    #[test]
    fn test_undeclared_names_sort_after_declared_stable() {
        let p = product(vec![
            variant(&[("Engraving", "Initials"), ("Color", "Red"), ("Finish", "Matte")], 1, None),
        ]);
        let names = list_option_names(&p, &clothes());
        // Declared Color first; Engraving and Finish keep encounter order
        assert_eq!(names, vec!["Color", "Engraving", "Finish"]);
    }

    #[test]
    fn test_available_values_empty_selection_returns_all() {
        let values = available_values_for(&t_shirt(), &SelectionState::new(), "Color", &clothes());
        assert_eq!(values, vec!["Blue", "Red"]); // caseless lexicographic
    }

    #[test]
    fn test_available_values_constrained_by_other_selections() {
        let p = t_shirt();
        let config = clothes();

        let red = SelectionState::from_pairs([("Color", "Red")]);
        assert_eq!(available_values_for(&p, &red, "Size", &config), vec!["S", "M"]);

        let blue = SelectionState::from_pairs([("Color", "Blue")]);
        assert_eq!(available_values_for(&p, &blue, "Size", &config), vec!["S"]);

        // No Green variant exists at all
        let green = SelectionState::from_pairs([("Color", "Green")]);
        assert!(available_values_for(&p, &green, "Size", &config).is_empty());
    }

    #[test]
    fn test_available_values_excludes_target_from_compatibility() {
        // With Size=S already picked, asking for Sizes must not constrain
        // by Size itself: both S and M survive the Color=Red constraint.
        let p = t_shirt();
        let s = SelectionState::from_pairs([("Color", "Red"), ("Size", "S")]);
        assert_eq!(
            available_values_for(&p, &s, "Size", &clothes()),
            vec!["S", "M"]
        );
    }

    #[test]
    fn test_value_order_applied() {
        let p = product(vec![
            variant(&[("Size", "XL")], 1, None),
            variant(&[("Size", "S")], 1, None),
            variant(&[("Size", "M")], 1, None),
        ]);
        let values = available_values_for(&p, &SelectionState::new(), "Size", &clothes());
        assert_eq!(values, vec!["S", "M", "XL"]); // size-chart order, not lexicographic
    }

    #[test]
    fn test_values_missing_from_value_order_sort_last() {
        let p = product(vec![
            variant(&[("Size", "One Size")], 1, None),
            variant(&[("Size", "M")], 1, None),
        ]);
        let values = available_values_for(&p, &SelectionState::new(), "Size", &clothes());
        assert_eq!(values, vec!["M", "One Size"]);
    }

    #[test]
    fn test_is_value_available() {
        let p = t_shirt();
        let red = SelectionState::from_pairs([("Color", "Red")]);

        assert!(is_value_available(&p, &red, "Size", "S"));
        assert!(is_value_available(&p, &red, "Size", "M"));
        assert!(!is_value_available(&p, &red, "Size", "L"));

        // Blue only comes in S
        let blue = SelectionState::from_pairs([("Color", "Blue")]);
        assert!(is_value_available(&p, &blue, "Size", "S"));
        assert!(!is_value_available(&p, &blue, "Size", "M"));

        // Probing the selected dimension itself ignores its own entry
        assert!(is_value_available(&p, &red, "Color", "Blue"));
    }

    #[test]
    fn test_resolve_variant_exact_match() {
        let p = t_shirt();
        let s = SelectionState::from_pairs([("Color", "Red"), ("Size", "S")]);
        let resolved = resolve_variant(&p, &s).expect("exact match");
        assert_eq!(resolved.stock, 5);
        assert_eq!(resolved.image.as_deref(), Some("rs.png"));
    }

    #[test]
    fn test_resolve_variant_incomplete_selection() {
        let p = t_shirt();
        let s = SelectionState::from_pairs([("Color", "Red")]);
        assert!(resolve_variant(&p, &s).is_none());
    }

    #[test]
    fn test_resolve_variant_nonexistent_combination() {
        let p = t_shirt();
        let s = SelectionState::from_pairs([("Color", "Blue"), ("Size", "M")]);
        assert!(resolve_variant(&p, &s).is_none());
    }

    #[test]
    fn test_resolve_variant_wrong_option_names() {
        // Right cardinality, wrong dimensions
        let p = t_shirt();
        let s = SelectionState::from_pairs([("Color", "Red"), ("Material", "Cotton")]);
        assert!(resolve_variant(&p, &s).is_none());
    }

    #[test]
    fn test_resolve_variant_zero_variants() {
        let p = product(vec![]);
        assert!(resolve_variant(&p, &SelectionState::new()).is_none());
        let s = SelectionState::from_pairs([("Color", "Red")]);
        assert!(resolve_variant(&p, &s).is_none());
    }

    #[test]
    fn test_resolve_variant_single_configuration_product() {
        // One choice-less variant: the empty selection is already complete.
        let p = product(vec![variant(&[], 4, None)]);
        assert_eq!(resolve_variant(&p, &SelectionState::new()).unwrap().stock, 4);

        let s = SelectionState::from_pairs([("Color", "Red")]);
        assert!(resolve_variant(&p, &s).is_none());
    }

    #[test]
    fn test_resolve_variant_duplicate_choice_sets_first_wins() {
        // Upstream data bug: two variants with identical choices.
        // Documented tie-break: first in array order.
        let p = product(vec![
            variant(&[("Color", "Red")], 7, None),
            variant(&[("Color", "Red")], 9, None),
        ]);
        let s = SelectionState::from_pairs([("Color", "Red")]);
        assert_eq!(resolve_variant(&p, &s).unwrap().stock, 7);
    }

    #[test]
    fn test_scenario_t_shirt_walkthrough() {
        // Full worked scenario: open view, pick Color, pick Size, resolve.
        let p = t_shirt();
        let config = clothes();

        assert_eq!(list_option_names(&p, &config), vec!["Color", "Size"]);

        let s = SelectionState::new().select("Color", "Red", &config);
        assert_eq!(s.get("Color"), Some("Red"));

        assert_eq!(available_values_for(&p, &s, "Size", &config), vec!["S", "M"]);

        let s = s.select("Size", "S", &config);
        let resolved = resolve_variant(&p, &s).expect("complete selection resolves");
        assert_eq!(resolved.stock, 5);
        assert_eq!(resolved.image.as_deref(), Some("rs.png"));
        assert_eq!(p.variant_price(resolved).cents(), 1999);
    }
}
