//! Centralized validation of user input.

/// Maximum accepted length of a medication query, in characters
pub const MAX_QUERY_LENGTH: usize = 256;

/// Input validation error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Input cannot be empty. Please enter a valid medication name.")]
    EmptyQuery,
    #[error("Medication name too long: exceeds {MAX_QUERY_LENGTH} characters")]
    QueryTooLong,
    #[error("Medication name contains control characters")]
    InvalidQuery,
    #[error("Invalid maximum price '{0}': expected a positive number")]
    InvalidPrice(String),
}

/// Validate a raw medication query, returning it trimmed.
///
/// # Errors
///
/// Returns `ValidationError::EmptyQuery` for blank input,
/// `ValidationError::QueryTooLong` past [`MAX_QUERY_LENGTH`], or
/// `ValidationError::InvalidQuery` if it contains control characters.
///
/// # Examples
///
/// ```
/// use medfinder::utils::validation::{validate_query, ValidationError};
///
/// assert_eq!(validate_query("  Panadol "), Ok("Panadol"));
/// assert_eq!(validate_query("   "), Err(ValidationError::EmptyQuery));
/// ```
pub fn validate_query(raw: &str) -> Result<&str, ValidationError> {
    let query = raw.trim();

    if query.is_empty() {
        return Err(ValidationError::EmptyQuery);
    }

    if query.chars().count() > MAX_QUERY_LENGTH {
        return Err(ValidationError::QueryTooLong);
    }

    if query.chars().any(char::is_control) {
        return Err(ValidationError::InvalidQuery);
    }

    Ok(query)
}

/// Parse an optional price ceiling, degrading bad input to "no ceiling".
///
/// Blank, unparsable, non-finite, zero, or negative input all yield `None`.
/// Use [`parse_price_ceiling_strict`] to reject bad input instead.
///
/// # Examples
///
/// ```
/// use medfinder::utils::validation::parse_price_ceiling;
///
/// assert_eq!(parse_price_ceiling("4.5"), Some(4.5));
/// assert_eq!(parse_price_ceiling("cheap"), None);
/// assert_eq!(parse_price_ceiling("0"), None);
/// ```
#[must_use]
pub fn parse_price_ceiling(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

/// Parse an optional price ceiling, rejecting bad input.
///
/// Blank input means "no ceiling" and yields `Ok(None)`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPrice` for anything that is not a
/// finite positive number.
pub fn parse_price_ceiling_strict(raw: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    parse_price_ceiling(trimmed)
        .map(Some)
        .ok_or_else(|| ValidationError::InvalidPrice(trimmed.to_string()))
}
