//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum item name length requirement
pub const MIN_ITEM_NAME_LENGTH: usize = 1;

/// Lowest accepted price (prices are whole currency units)
pub const MIN_PRICE: i32 = 0;

/// Lowest accepted stock quantity
pub const MIN_QUANTITY: i32 = 0;
