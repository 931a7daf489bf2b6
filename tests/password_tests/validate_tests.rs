//! Tests for request validation helpers

use passwdgen::password::{
    is_quit, validate_length, validate_selector, ALLOWED_SELECTORS, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
use passwdgen::PasswdGenError;

// =============================================================================
// Selector Tests
// =============================================================================

#[test]
fn test_validate_selector_accepts_allowed() {
    for c in "namsuq".chars() {
        assert!(validate_selector(ALLOWED_SELECTORS, c));
    }
}

#[test]
fn test_validate_selector_is_case_sensitive() {
    assert!(!validate_selector(ALLOWED_SELECTORS, 'N'));
    assert!(!validate_selector(ALLOWED_SELECTORS, 'Q'));
}

#[test]
fn test_validate_selector_rejects_unknown() {
    assert!(!validate_selector(ALLOWED_SELECTORS, 'x'));
    assert!(!validate_selector(ALLOWED_SELECTORS, '8'));
}

// =============================================================================
// Length Tests
// =============================================================================

#[test]
fn test_validate_length_bounds() {
    assert_eq!(validate_length("6", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH).unwrap(), 6);
    assert_eq!(validate_length("32", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH).unwrap(), 32);
    assert!(validate_length("5", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH).is_err());
    assert!(validate_length("33", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH).is_err());
}

#[test]
fn test_validate_length_leading_zeros() {
    assert_eq!(validate_length("0012", 6, 32).unwrap(), 12);
}

#[test]
fn test_validate_length_rejects_non_digits() {
    for text in ["", "-8", "+8", "8a", "1 2", "ten", "12.0"] {
        let err = validate_length(text, 6, 32).unwrap_err();
        assert!(matches!(err, PasswdGenError::InvalidLength(_)), "{:?}", text);
    }
}

#[test]
fn test_validate_length_overflow() {
    assert!(validate_length("99999999999999999999999999", 6, 32).is_err());
}

// =============================================================================
// Quit Tests
// =============================================================================

#[test]
fn test_is_quit() {
    assert!(is_quit('q'));
    assert!(is_quit('Q'));
    assert!(!is_quit('n'));
}
