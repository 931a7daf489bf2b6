//! Tests for client input parsing
//!
//! These tests verify:
//! - Type and length parsing, with and without a separating space
//! - Default length when omitted
//! - Help and quit handling
//! - Every validation failure maps to the right error

use passwdgen::input::{parse_input, Input};
use passwdgen::protocol::PasswordRequest;
use passwdgen::PasswdGenError;

// =============================================================================
// Helper Functions
// =============================================================================

fn expect_request(line: &str) -> PasswordRequest {
    match parse_input(line) {
        Ok(Input::Generate(request)) => request,
        other => panic!("Expected a request for {:?}, got {:?}", line, other),
    }
}

// =============================================================================
// Request Tests
// =============================================================================

#[test]
fn test_type_and_length() {
    let request = expect_request("n 12");
    assert_eq!(request.selector, 'n');
    assert_eq!(request.length, "12");
}

#[test]
fn test_every_type() {
    for selector in ['n', 'a', 'm', 's', 'u'] {
        let request = expect_request(&format!("{} 10", selector));
        assert_eq!(request.selector, selector);
    }
}

#[test]
fn test_type_glued_to_length() {
    let request = expect_request("s16");
    assert_eq!(request.selector, 's');
    assert_eq!(request.length, "16");
}

#[test]
fn test_default_length() {
    let request = expect_request("m");
    assert_eq!(request.length, "8");
}

#[test]
fn test_surrounding_whitespace() {
    let request = expect_request("   u    20   \n");
    assert_eq!(request.selector, 'u');
    assert_eq!(request.length, "20");
}

// =============================================================================
// Help / Quit Tests
// =============================================================================

#[test]
fn test_help() {
    assert_eq!(parse_input("h").unwrap(), Input::Help);
    assert_eq!(parse_input("H").unwrap(), Input::Help);
    assert_eq!(parse_input("h 12 extra").unwrap(), Input::Help);
}

#[test]
fn test_quit() {
    assert_eq!(parse_input("q").unwrap(), Input::Quit);
    assert_eq!(parse_input("q 10").unwrap(), Input::Quit);
}

#[test]
fn test_quit_with_bad_length_is_an_error() {
    let err = parse_input("q 100").unwrap_err();
    assert!(matches!(err, PasswdGenError::InvalidLength(_)));
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_blank_line() {
    assert!(matches!(parse_input("").unwrap_err(), PasswdGenError::InvalidInput));
    assert!(matches!(parse_input("  \n").unwrap_err(), PasswdGenError::InvalidInput));
}

#[test]
fn test_too_many_tokens() {
    let err = parse_input("n 12 13").unwrap_err();
    assert!(matches!(err, PasswdGenError::InvalidInput));

    let err = parse_input("nn 12").unwrap_err();
    assert!(matches!(err, PasswdGenError::InvalidInput));
}

#[test]
fn test_unknown_type() {
    let err = parse_input("x 12").unwrap_err();
    assert!(matches!(err, PasswdGenError::InvalidType('x')));
    assert_eq!(err.to_string(), "Bad request: the type inserted is not valid.");
}

#[test]
fn test_uppercase_type_rejected() {
    let err = parse_input("N 12").unwrap_err();
    assert!(matches!(err, PasswdGenError::InvalidType('N')));
}

#[test]
fn test_length_out_of_range() {
    for line in ["n 5", "n 33", "n 0", "a 100"] {
        let err = parse_input(line).unwrap_err();
        assert!(matches!(err, PasswdGenError::InvalidLength(_)), "{:?}", line);
    }
}

#[test]
fn test_length_not_numeric() {
    let err = parse_input("n abc").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Bad request: the length for the password is not valid."
    );
}

#[test]
fn test_input_errors_are_user_errors() {
    for line in ["", "x", "n 99", "n 1 2"] {
        assert!(parse_input(line).unwrap_err().is_user_error(), "{:?}", line);
    }
    assert!(!PasswdGenError::Rejected.is_user_error());
}

#[test]
fn test_zero_padded_length_too_long_for_wire() {
    let line = format!("n {}8", "0".repeat(1100));
    let err = parse_input(&line).unwrap_err();
    assert!(matches!(err, PasswdGenError::InvalidLength(_)));
    assert!(err.is_user_error());
}

#[test]
fn test_zero_padded_length_at_field_limit() {
    use passwdgen::protocol::{encode_request, BUFFER_SIZE};

    let line = format!("n {}8", "0".repeat(BUFFER_SIZE - 2));
    let request = expect_request(&line);
    assert_eq!(request.length.len(), BUFFER_SIZE - 1);
    assert!(encode_request(&request).is_ok());
}
