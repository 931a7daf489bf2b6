//! Protocol Module
//!
//! Defines the wire protocol for client-server communication.
//!
//! Every message is one UDP datagram of fixed size. Text fields are ASCII,
//! NUL-terminated and NUL-padded to the end of the field.
//!
//! ### Request Format
//! ```text
//! ┌──────────┬──────────────────────────────────────────┐
//! │ Type (1) │          Length as text (1024)           │
//! └──────────┴──────────────────────────────────────────┘
//! ```
//!
//! ### Password Types
//! - `n`: numeric
//! - `a`: alphabetic
//! - `m`: mixed
//! - `s`: secure
//! - `u`: unambiguous secure
//!
//! ### Response Format
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  Password (33)                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! An empty password means the server rejected the request.

mod request;
mod response;
mod codec;

pub use request::PasswordRequest;
pub use response::PasswordResponse;
pub use codec::{
    decode_request, decode_response, encode_request, encode_response, recv_request,
    recv_response, send_request, send_response,
};

use crate::password::MAX_PASSWORD_LENGTH;

/// Size of the length text field in a request
pub const BUFFER_SIZE: usize = 1024;

/// Size of an encoded request: type byte + length field
pub const REQUEST_SIZE: usize = 1 + BUFFER_SIZE;

/// Size of an encoded response: password + terminating NUL
pub const RESPONSE_SIZE: usize = MAX_PASSWORD_LENGTH + 1;

/// UDP port the server listens on
pub const DEFAULT_PORT: u16 = 8080;
