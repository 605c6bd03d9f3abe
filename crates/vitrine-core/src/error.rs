//! # Error Types
//!
//! Domain-specific error types for vitrine-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vitrine-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog ingestion failures                      │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  The resolver itself has NO error path: "no matching variant yet"       │
//! │  and "no image yet" are normal intermediate states during progressive   │
//! │  selection and are expressed as None / empty results, never as errors.  │
//! │  Errors exist only at the ingestion boundary where raw catalog data     │
//! │  enters the core.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (option name, variant index, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog ingestion errors.
///
/// These errors represent catalog data that cannot be normalized into the
/// core's canonical representation. They surface data-quality problems to
/// the caller; the core never corrects bad data silently.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A variant's option cardinality disagrees with its siblings.
    ///
    /// ## When This Occurs
    /// All variants of a product are assumed structurally uniform: each one
    /// carries a choice for the same set of option names. A variant with a
    /// different number of choices means the upstream catalog is
    /// inconsistent, and exact matching against it is undefined.
    ///
    /// The caller decides what to do with a product that fails this check;
    /// the resolver does not defend against non-uniform data.
    #[error(
        "variant {index} has {found} option choices, expected {expected} like its siblings"
    )]
    VariantSchemaMismatch {
        expected: usize,
        found: usize,
        index: usize,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when raw catalog fields don't meet requirements.
/// Used for early validation before normalization runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::VariantSchemaMismatch {
            expected: 2,
            found: 1,
            index: 3,
        };
        assert_eq!(
            err.to_string(),
            "variant 3 has 1 option choices, expected 2 like its siblings"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "optionName".to_string(),
        };
        assert_eq!(err.to_string(), "optionName is required");

        let err = ValidationError::Negative {
            field: "stock".to_string(),
        };
        assert_eq!(err.to_string(), "stock must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "optionValue".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
