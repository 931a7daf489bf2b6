//! Password generator
//!
//! Draws each character independently and uniformly from the type's
//! alphabet. `Mixed` first flips a fair coin between letters and digits, so
//! a digit is as likely as a letter even though there are fewer digits.

use rand::Rng;

use super::kind::{ALPHA_CHARSET, NUMERIC_CHARSET, SECURE_CHARSET, UNAMBIGUOUS_CHARSET};
use super::PasswordType;

/// Generate a password using the thread-local RNG
pub fn generate_password(password_type: PasswordType, length: usize) -> String {
    let mut rng = rand::thread_rng();
    generate_password_with(&mut rng, password_type, length)
}

/// Generate a password using the given RNG
pub fn generate_password_with<R: Rng + ?Sized>(
    rng: &mut R,
    password_type: PasswordType,
    length: usize,
) -> String {
    let mut password = String::with_capacity(length);

    for _ in 0..length {
        let byte = match password_type {
            PasswordType::Numeric => pick(rng, NUMERIC_CHARSET),
            PasswordType::Alpha => pick(rng, ALPHA_CHARSET),
            PasswordType::Mixed => {
                if rng.gen_bool(0.5) {
                    pick(rng, ALPHA_CHARSET)
                } else {
                    pick(rng, NUMERIC_CHARSET)
                }
            }
            PasswordType::Secure => pick(rng, SECURE_CHARSET),
            PasswordType::Unambiguous => pick(rng, UNAMBIGUOUS_CHARSET),
        };
        password.push(byte as char);
    }

    password
}

/// Uniform choice from a non-empty ASCII charset
fn pick<R: Rng + ?Sized>(rng: &mut R, charset: &[u8]) -> u8 {
    charset[rng.gen_range(0..charset.len())]
}
