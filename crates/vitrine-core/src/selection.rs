//! # Selection State
//!
//! The in-progress map of user choices while configuring a variant.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product detail view opens                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SelectionState::new()           (empty: nothing chosen yet)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  user picks Color=Red ──► select("Color","Red") ──► {Color: Red}        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  user picks Size=M ──► select("Size","M") ──► {Color: Red, Size: M}     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  user re-picks Size=M ──► select("Size","M") ──► {Color: Red}           │
//! │       │                                          (toggle-off)           │
//! │       ▼                                                                 │
//! │  navigate away / product changes ──► state discarded                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition is a pure function returning a new state; the view owns
//! exactly one `SelectionState` and nothing else ever mutates it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::category::CategoryConfig;

// =============================================================================
// Selection State
// =============================================================================

/// Mapping from option name to the chosen value. A name absent from the map
/// means "not yet chosen".
///
/// Backed by a `BTreeMap` so iteration order is deterministic, which keeps
/// derived results (and tests) stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectionState(BTreeMap<String, String>);

impl SelectionState {
    /// An empty selection: the state a freshly opened detail view starts in.
    pub fn new() -> Self {
        SelectionState(BTreeMap::new())
    }

    /// Builds a selection from (name, value) pairs, e.g. when restoring a
    /// deep-linked configuration.
    pub fn from_pairs(
        pairs: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        SelectionState(
            pairs
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        )
    }

    /// Number of options chosen so far.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing has been chosen yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The chosen value for an option name, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterates over (name, value) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Applies a user pick and returns the resulting state.
    ///
    /// ## Semantics
    /// 1. **Toggle-off**: picking the already-chosen value removes the entry
    ///    instead of re-setting it.
    /// 2. Otherwise the entry is set to `value`.
    /// 3. **Cascading clear**: every option declared *after* `name` in the
    ///    category's precedence list is removed, whether or not it was
    ///    user-set. Changing an earlier option invalidates later choices
    ///    that may no longer combine with it. Undeclared names have no
    ///    relative order and never trigger or suffer a cascade.
    ///
    /// ## Example
    /// ```rust
    /// use vitrine_core::category::{CategoryConfig, OptionSpec};
    /// use vitrine_core::selection::SelectionState;
    ///
    /// let config = CategoryConfig::new([OptionSpec::swatch("Color"), OptionSpec::chip("Size")]);
    /// let s = SelectionState::from_pairs([("Color", "Red"), ("Size", "M")]);
    ///
    /// // Changing Color clears the later-declared Size
    /// let s = s.select("Color", "Blue", &config);
    /// assert_eq!(s.get("Color"), Some("Blue"));
    /// assert_eq!(s.get("Size"), None);
    /// ```
    #[must_use]
    pub fn select(&self, name: &str, value: &str, config: &CategoryConfig) -> SelectionState {
        let mut next = self.0.clone();

        if next.get(name).map(String::as_str) == Some(value) {
            next.remove(name);
        } else {
            next.insert(name.to_string(), value.to_string());
        }

        for later in config.declared_after(name) {
            next.remove(later);
        }

        SelectionState(next)
    }

    /// Removes a single option choice without touching any other entry.
    ///
    /// Used by "clear" affordances in the UI; unlike [`select`](Self::select)
    /// this never cascades.
    #[must_use]
    pub fn clear(&self, name: &str) -> SelectionState {
        let mut next = self.0.clone();
        next.remove(name);
        SelectionState(next)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
