//! Request definitions
//!
//! Represents password requests from clients.

use crate::password::PasswordType;

/// A password request as carried on the wire
///
/// The length stays as text: the client validates it before sending and the
/// server parses it again on receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    /// One-character password type selector
    pub selector: char,

    /// Requested length, as decimal text
    pub length: String,
}

impl PasswordRequest {
    /// Create a request from a raw selector and length text
    pub fn new(selector: char, length: impl Into<String>) -> Self {
        Self {
            selector,
            length: length.into(),
        }
    }

    /// Create a request for a known password type
    pub fn for_type(password_type: PasswordType, length: usize) -> Self {
        Self::new(password_type.selector(), length.to_string())
    }

    /// The password type named by the selector, if any
    pub fn password_type(&self) -> Option<PasswordType> {
        PasswordType::from_selector(self.selector)
    }
}
