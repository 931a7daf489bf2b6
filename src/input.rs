//! Client input parsing
//!
//! Turns one line typed at the prompt into an action. The grammar is
//! `TYPE [LENGTH]`, where TYPE is a single character and may be glued to the
//! length (`n12` is the same as `n 12`).

use crate::error::{PasswdGenError, Result};
use crate::password::{
    is_quit, validate_length, validate_selector, ALLOWED_SELECTORS, DEFAULT_PASSWORD_LENGTH,
    MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::protocol::{PasswordRequest, BUFFER_SIZE};

/// What the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Show the help menu and prompt again
    Help,

    /// Leave the client
    Quit,

    /// Send this request to the server
    Generate(PasswordRequest),
}

/// Parse and validate one input line
pub fn parse_input(line: &str) -> Result<Input> {
    let mut chars = line.trim_start().chars();
    let Some(selector) = chars.next() else {
        return Err(PasswdGenError::InvalidInput);
    };

    // Help wins over anything typed after it.
    if selector.eq_ignore_ascii_case(&'h') {
        return Ok(Input::Help);
    }

    let tokens: Vec<&str> = chars.as_str().split_whitespace().collect();
    let length = match tokens.as_slice() {
        [] => DEFAULT_PASSWORD_LENGTH.to_string(),
        [length] => (*length).to_string(),
        _ => return Err(PasswdGenError::InvalidInput),
    };

    if !validate_selector(ALLOWED_SELECTORS, selector) {
        return Err(PasswdGenError::InvalidType(selector));
    }

    // Zero padding keeps the value in range but must still fit the wire field.
    if length.len() > BUFFER_SIZE - 1 {
        return Err(PasswdGenError::InvalidLength(length));
    }
    validate_length(&length, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH)?;

    if is_quit(selector) {
        return Ok(Input::Quit);
    }

    Ok(Input::Generate(PasswordRequest::new(selector, length)))
}
