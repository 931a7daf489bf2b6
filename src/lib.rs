//! # passwdgen
//!
//! A UDP password generator with:
//! - Five password alphabets (numeric, alphabetic, mixed, secure, unambiguous)
//! - Fixed-size request/response datagrams on port 8080
//! - A single-socket blocking server loop
//! - An interactive client that validates input before sending
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────┐   PasswordRequest (1025 B)   ┌──────────────────────┐
//! │        Client        │ ───────────────────────────▶ │        Server        │
//! │  input ▸ validate    │                              │  decode ▸ generate   │
//! │                      │ ◀─────────────────────────── │                      │
//! └──────────────────────┘   PasswordResponse (33 B)    └──────────┬───────────┘
//!                                                                  │
//!                                                                  ▼
//!                                                       ┌──────────────────────┐
//!                                                       │  Password Generator  │
//!                                                       └──────────────────────┘
//! ```
//!
//! Passwords travel in plaintext. There is no authentication, encryption
//! or retry.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod password;
pub mod protocol;
pub mod network;
pub mod input;
pub mod menu;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PasswdGenError, Result};
pub use config::Config;
pub use password::{generate_password, PasswordType};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of passwdgen
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
