//! # Validation Module
//!
//! Field-level checks applied to raw catalog data before normalization.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Backend REST API                                              │
//! │  ├── Owns the catalog and its admin CRUD rules                          │
//! │  └── Not modeled in this workspace                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Ingestion (Rust)                                              │
//! │  ├── Type validation (serde deserialization)                            │
//! │  └── THIS MODULE: field checks before normalization                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Resolver                                                      │
//! │  └── Assumes normalized, validated data; never defends                  │
//! │                                                                         │
//! │  Bad catalog rows are rejected at the boundary so the pure logic       │
//! │  behind it stays branch-free.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_MEDIA_URL_LEN, MAX_OPTION_NAME_LEN, MAX_OPTION_VALUE_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an option name ("Color", "Size", ...).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 50 characters
///
/// ## Example
/// ```rust
/// use vitrine_core::validation::validate_option_name;
///
/// assert!(validate_option_name("Color").is_ok());
/// assert!(validate_option_name("").is_err());
/// assert!(validate_option_name(&"A".repeat(100)).is_err());
/// ```
pub fn validate_option_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "optionName".to_string(),
        });
    }

    if name.len() > MAX_OPTION_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "optionName".to_string(),
            max: MAX_OPTION_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates an option value ("Red", "XL", ...).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 100 characters
pub fn validate_option_value(value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: "optionValue".to_string(),
        });
    }

    if value.len() > MAX_OPTION_VALUE_LEN {
        return Err(ValidationError::TooLong {
            field: "optionValue".to_string(),
            max: MAX_OPTION_VALUE_LEN,
        });
    }

    Ok(())
}

/// Validates a media URL field that is present on a record.
///
/// ## Rules
/// - Must not be empty after trimming (absent is fine, empty-present is not)
/// - Must be at most 2048 characters
pub fn validate_media_url(url: &str) -> ValidationResult<()> {
    let url = url.trim();

    if url.is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    if url.len() > MAX_MEDIA_URL_LEN {
        return Err(ValidationError::TooLong {
            field: "image".to_string(),
            max: MAX_MEDIA_URL_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock count.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (sold-out variants still render, greyed out)
///
/// ## Example
/// ```rust
/// use vitrine_core::validation::validate_stock;
///
/// assert!(validate_stock(5).is_ok());
/// assert!(validate_stock(0).is_ok());
/// assert!(validate_stock(-1).is_err());
/// ```
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::Negative {
            field: "stock".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
