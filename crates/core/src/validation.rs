//! Business-rule validation for candidate products and categories.
//!
//! Rules form an explicit ordered chain evaluated top to bottom; only the
//! first violated rule is surfaced. The ordering (name, price, store,
//! discount) is a tested contract -- callers rely on which message wins
//! when several fields are bad at once.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Unicode-aware letters, digits, and whitespace only.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}\s]+$").expect("valid regex"));

/// Maximum allowed discount percentage.
pub const MAX_DISCOUNT_PERCENT: f64 = 70.0;

/// Fields of a product candidate subject to validation.
///
/// Borrowed view so both the create DTO and tests can validate without
/// cloning. `description` is deliberately absent: it is required at the
/// schema level but carries no character restriction.
#[derive(Debug, Clone, Copy)]
pub struct ProductCandidate<'a> {
    pub name: &'a str,
    pub price: f64,
    pub store: &'a str,
    pub discount: f64,
}

/// Validate a candidate product, returning the first violated rule.
pub fn validate_product(candidate: &ProductCandidate<'_>) -> Result<(), CoreError> {
    validate_name(candidate.name, "product name is required")?;

    if candidate.price <= 0.0 {
        return Err(CoreError::validation(
            "product price must be greater than zero",
        ));
    }

    validate_name(candidate.store, "store name is required")?;

    if candidate.discount < 0.0 || candidate.discount > MAX_DISCOUNT_PERCENT {
        return Err(CoreError::validation(
            "discount must be between 0 and 70 percent",
        ));
    }

    Ok(())
}

/// Validate a candidate category: name rules as for products, plus a
/// required free-text description.
pub fn validate_category(name: &str, description: &str) -> Result<(), CoreError> {
    validate_name(name, "category name is required")?;

    if description.is_empty() {
        return Err(CoreError::validation("category description is required"));
    }

    Ok(())
}

/// A name must be non-empty and contain only letters, digits, and
/// whitespace. `required_message` is surfaced for the empty case so the
/// caller can name the offending field.
fn validate_name(name: &str, required_message: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::validation(required_message));
    }

    if !NAME_RE.is_match(name) {
        return Err(CoreError::validation(
            "contains invalid characters (only alphanumeric and space allowed)",
        ));
    }

    Ok(())
}
