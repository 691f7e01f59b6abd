//! Shortcode generation and validation utilities.
//!
//! Provides random alphanumeric code generation and validation for custom
//! user-provided codes.

use crate::domain::RegistryError;
use rand::{Rng, distr::Alphanumeric};

/// Default length of generated shortcodes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Shortest accepted custom shortcode.
pub const MIN_CODE_LENGTH: usize = 3;

/// Longest accepted custom shortcode.
pub const MAX_CODE_LENGTH: usize = 20;

/// Reserved codes that cannot be used as short links.
///
/// `GET /health` and `/shorten` are matched by fixed routes before the
/// shortcode route, so links with these codes would never redirect.
const RESERVED_CODES: &[&str] = &["health", "shorten"];

/// Source of candidate shortcodes.
///
/// The registry only asks for candidates; uniqueness is checked against its
/// own index while the lock is held.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self, length: usize) -> String;
}

/// Draws codes uniformly from `[A-Za-z0-9]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: usize) -> String {
        generate_code(length)
    }
}

/// Generates a random alphanumeric shortcode of `length` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom shortcode.
///
/// # Rules
///
/// - Length: 3-20 characters
/// - Allowed characters: ASCII letters and digits
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`RegistryError::InvalidShortcode`] if any rule is violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_custom_code("promo1").is_ok());
///
/// assert!(validate_custom_code("ab").is_err());        // Too short
/// assert!(validate_custom_code("my-link").is_err());   // Hyphen
/// assert!(validate_custom_code("health").is_err());    // Reserved
/// ```
pub fn validate_custom_code(code: &str) -> Result<(), RegistryError> {
    let length = code.chars().count();
    if !(MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        return Err(RegistryError::invalid_shortcode(format!(
            "Custom shortcode must be between {MIN_CODE_LENGTH} and {MAX_CODE_LENGTH} characters"
        )));
    }

    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(RegistryError::invalid_shortcode(
            "Custom shortcode must contain only alphanumeric characters",
        ));
    }

    if is_reserved_code(code) {
        return Err(RegistryError::invalid_shortcode(format!(
            "Shortcode '{code}' is reserved"
        )));
    }

    Ok(())
}

/// Returns true if `code` collides with a fixed route segment.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(DEFAULT_CODE_LENGTH).len(), 6);
        assert_eq!(generate_code(12).len(), 12);
    }

    #[test]
    fn test_generate_code_alphanumeric_characters() {
        let code = generate_code(64);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code(12)).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_random_generator_delegates() {
        let code = RandomCodeGenerator.generate(8);
        assert_eq!(code.len(), 8);
    }

    #[test]
    fn test_validate_minimum_length() {
        assert!(validate_custom_code("abc").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_code("abcdefghij0123456789").is_ok());
    }

    #[test]
    fn test_validate_mixed_case_and_digits() {
        assert!(validate_custom_code("Promo2025").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_custom_code("ab").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidShortcode { .. }));
        assert!(err.to_string().contains("between 3 and 20"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_code("abcdefghij0123456789x").is_err());
    }

    #[test]
    fn test_validate_hyphen_rejected() {
        let err = validate_custom_code("my-link").unwrap_err();
        assert!(err.to_string().contains("alphanumeric"));
    }

    #[test]
    fn test_validate_non_ascii_rejected() {
        assert!(validate_custom_code("caf\u{e9}1").is_err());
    }

    #[test]
    fn test_validate_spaces_not_allowed() {
        assert!(validate_custom_code("my code").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_code("").is_err());
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }

    #[test]
    fn test_validate_api_allowed() {
        assert!(!is_reserved_code("api"));
        assert!(validate_custom_code("api").is_ok());
    }
}
