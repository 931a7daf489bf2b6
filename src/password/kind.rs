//! Password type definitions
//!
//! Maps the one-character selectors onto alphabets.

use std::borrow::Cow;
use std::fmt;

/// Digits only
pub(crate) const NUMERIC_CHARSET: &[u8] = b"0123456789";

/// Lowercase ASCII letters
pub(crate) const ALPHA_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Letters of both cases, digits and symbols
pub(crate) const SECURE_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()";

/// Secure charset without characters that are easy to confuse
pub(crate) const UNAMBIGUOUS_CHARSET: &[u8] =
    b"abcdefghjkmnpqrtuvwxyACDEFGHJKLMNPQRTUVWXY34679!@#$%^&*()";

/// Kind of password to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordType {
    Numeric,
    Alpha,
    Mixed,
    Secure,
    Unambiguous,
}

impl PasswordType {
    /// All password types, in menu order
    pub const ALL: [PasswordType; 5] = [
        PasswordType::Numeric,
        PasswordType::Alpha,
        PasswordType::Mixed,
        PasswordType::Secure,
        PasswordType::Unambiguous,
    ];

    /// Look up a type by its selector character (case-insensitive)
    pub fn from_selector(selector: char) -> Option<Self> {
        match selector.to_ascii_lowercase() {
            'n' => Some(PasswordType::Numeric),
            'a' => Some(PasswordType::Alpha),
            'm' => Some(PasswordType::Mixed),
            's' => Some(PasswordType::Secure),
            'u' => Some(PasswordType::Unambiguous),
            _ => None,
        }
    }

    /// The lowercase selector character for this type
    pub fn selector(self) -> char {
        match self {
            PasswordType::Numeric => 'n',
            PasswordType::Alpha => 'a',
            PasswordType::Mixed => 'm',
            PasswordType::Secure => 's',
            PasswordType::Unambiguous => 'u',
        }
    }

    /// Every character a password of this type may contain
    ///
    /// Only `Mixed` allocates, since it draws from two alphabets.
    pub fn charset(self) -> Cow<'static, [u8]> {
        match self {
            PasswordType::Numeric => Cow::Borrowed(NUMERIC_CHARSET),
            PasswordType::Alpha => Cow::Borrowed(ALPHA_CHARSET),
            PasswordType::Mixed => Cow::Owned([ALPHA_CHARSET, NUMERIC_CHARSET].concat()),
            PasswordType::Secure => Cow::Borrowed(SECURE_CHARSET),
            PasswordType::Unambiguous => Cow::Borrowed(UNAMBIGUOUS_CHARSET),
        }
    }
}

impl fmt::Display for PasswordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PasswordType::Numeric => "numeric",
            PasswordType::Alpha => "alphabetic",
            PasswordType::Mixed => "mixed",
            PasswordType::Secure => "secure",
            PasswordType::Unambiguous => "unambiguous",
        };
        f.write_str(name)
    }
}
