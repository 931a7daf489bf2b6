//! Password Module
//!
//! Generation of random passwords from fixed alphabets.
//!
//! ## Password Types
//! ```text
//! ┌──────────┬─────────────┬────────────────────────────────────┐
//! │ Selector │ Type        │ Alphabet                           │
//! ├──────────┼─────────────┼────────────────────────────────────┤
//! │    n     │ Numeric     │ 0-9                                │
//! │    a     │ Alpha       │ a-z                                │
//! │    m     │ Mixed       │ coin flip per char: a-z or 0-9     │
//! │    s     │ Secure      │ a-z A-Z 0-9 !@#$%^&*()             │
//! │    u     │ Unambiguous │ Secure minus 0Oo 1lIi 2Zz 5Ss 8B   │
//! └──────────┴─────────────┴────────────────────────────────────┘
//! ```

mod kind;
mod generator;
mod validate;

pub use kind::PasswordType;
pub use generator::{generate_password, generate_password_with};
pub use validate::{is_quit, validate_length, validate_selector};

/// Shortest password a client may request
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Longest password a client may request (also the response buffer size - 1)
pub const MAX_PASSWORD_LENGTH: usize = 32;

/// Length used when the client omits one
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

/// Selectors the client accepts on its input line
pub const ALLOWED_SELECTORS: &str = "namsuq";
