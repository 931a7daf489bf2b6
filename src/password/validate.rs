//! Request validation
//!
//! Checks applied to what the user types before anything is sent.

use crate::error::{PasswdGenError, Result};

/// True if `selector` is one of the characters in `allowed` (case-sensitive)
pub fn validate_selector(allowed: &str, selector: char) -> bool {
    allowed.contains(selector)
}

/// Parse a length made only of ASCII digits and check it lies in `[min, max]`
pub fn validate_length(text: &str, min: usize, max: usize) -> Result<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PasswdGenError::InvalidLength(text.to_string()));
    }

    // All digits, so the only parse failure left is overflow.
    let length: usize = text
        .parse()
        .map_err(|_| PasswdGenError::InvalidLength(text.to_string()))?;

    if length < min || length > max {
        return Err(PasswdGenError::InvalidLength(text.to_string()));
    }

    Ok(length)
}

/// True if `selector` asks the client to stop
pub fn is_quit(selector: char) -> bool {
    selector.eq_ignore_ascii_case(&'q')
}
