//! Response definitions
//!
//! Represents responses to clients.

/// A response carrying the generated password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordResponse {
    /// The generated password, empty when the request was rejected
    pub password: String,
}

impl PasswordResponse {
    /// Create a response carrying a password
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Create an empty response signalling a rejected request
    pub fn rejected() -> Self {
        Self {
            password: String::new(),
        }
    }

    /// True if the server refused to generate a password
    pub fn is_rejected(&self) -> bool {
        self.password.is_empty()
    }
}
