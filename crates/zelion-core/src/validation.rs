//! # Validation Module
//!
//! Input validation utilities for the Zelion storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  ├── Quantity steppers never send negative numbers                     │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront command (Rust)                                    │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: quantity input, search term, catalog records         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart / wishlist transitions                                  │
//! │  └── Total functions: unknown ids are no-ops, qty <= 0 removes         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use zelion_core::validation::{validate_quantity_input, validate_search_term};
//!
//! assert!(validate_quantity_input(0).is_ok());
//! assert!(validate_quantity_input(-1).is_err());
//!
//! assert_eq!(validate_search_term("  Junior ").unwrap(), "Junior");
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::{MAX_ITEM_QUANTITY, MAX_RATING, MAX_SEARCH_TERM_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Letters, numbers, hyphens and underscores only (`"bat-1"`)
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 64 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 64,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a free-text search term.
///
/// ## Rules
/// - Can be empty (no text filtering)
/// - Maximum [`MAX_SEARCH_TERM_LEN`] characters
///
/// ## Returns
/// The trimmed term.
pub fn validate_search_term(term: &str) -> ValidationResult<String> {
    let term = term.trim();

    if term.chars().count() > MAX_SEARCH_TERM_LEN {
        return Err(ValidationError::TooLong {
            field: "search term".to_string(),
            max: MAX_SEARCH_TERM_LEN,
        });
    }

    Ok(term.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity typed into the cart's quantity control.
///
/// ## Rules
/// - Zero is allowed (it removes the line)
/// - Negative values are refused before they reach the cart
/// - At most [`MAX_ITEM_QUANTITY`] (999)
///
/// ## User Workflow
/// ```text
/// Quantity stepper: [-] 1 [+]
///      │
///      ├── click [-] at 1 → 0 → forwarded, line removed
///      │
///      └── typed "-3"     → refused here, cart untouched
/// ```
pub fn validate_quantity_input(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates a catalog record.
///
/// ## Rules
/// - Valid id, non-empty name
/// - Price must be positive
/// - Original price, when present, must not be below the price
/// - Rating within 0 to 5
/// - Discount within 0 to 100
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;

    if product.name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if product.price <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if let Some(original) = product.original_price {
        if original < product.price {
            return Err(ValidationError::OutOfRange {
                field: "originalPrice".to_string(),
                min: product.price,
                max: i64::MAX,
            });
        }
    }

    if !(0.0..=MAX_RATING).contains(&product.rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: MAX_RATING as i64,
        });
    }

    if let Some(discount) = product.discount {
        if discount > 100 {
            return Err(ValidationError::OutOfRange {
                field: "discount".to_string(),
                min: 0,
                max: 100,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
