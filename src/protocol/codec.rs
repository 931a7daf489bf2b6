//! Protocol codec
//!
//! Encoding and decoding functions for the wire protocol.
//!
//! ## Wire Format
//!
//! ### Request
//! ```text
//! ┌──────────┬──────────────────────────────┬──────────────┐
//! │ Type (1) │ Length text (n)              │ NUL padding  │
//! └──────────┴──────────────────────────────┴──────────────┘
//!   1 + 1024 bytes in total, n <= 1023
//! ```
//!
//! ### Response
//! ```text
//! ┌──────────────────────────────┬──────────────┐
//! │ Password (n)                 │ NUL padding  │
//! └──────────────────────────────┴──────────────┘
//!   33 bytes in total, n <= 32
//! ```

use std::net::{SocketAddr, UdpSocket};

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{PasswdGenError, Result};
use crate::password::MAX_PASSWORD_LENGTH;
use super::{PasswordRequest, PasswordResponse, BUFFER_SIZE, REQUEST_SIZE, RESPONSE_SIZE};

// =============================================================================
// Request Encoding/Decoding
// =============================================================================

/// Encode a request to its fixed-size datagram
pub fn encode_request(request: &PasswordRequest) -> Result<Bytes> {
    if !request.selector.is_ascii() {
        return Err(PasswdGenError::Protocol(format!(
            "Request type must be ASCII, got {:?}",
            request.selector
        )));
    }

    let length = request.length.as_bytes();
    check_text_field("Request length", length, BUFFER_SIZE - 1)?;

    let mut message = BytesMut::with_capacity(REQUEST_SIZE);
    message.put_u8(request.selector as u8);
    message.put_slice(length);
    message.put_bytes(0, BUFFER_SIZE - length.len());

    Ok(message.freeze())
}

/// Decode a request from a datagram
///
/// Short datagrams are accepted: the length field ends at the first NUL or
/// at the end of the datagram, whichever comes first.
pub fn decode_request(bytes: &[u8]) -> Result<PasswordRequest> {
    let Some((&selector, rest)) = bytes.split_first() else {
        return Err(PasswdGenError::Protocol("Empty request datagram".to_string()));
    };

    if !selector.is_ascii() {
        return Err(PasswdGenError::Protocol(format!(
            "Request type must be ASCII, got 0x{:02x}",
            selector
        )));
    }

    let field = &rest[..rest.len().min(BUFFER_SIZE)];
    let length = read_text_field("Request length", field)?;

    Ok(PasswordRequest {
        selector: selector as char,
        length,
    })
}

// =============================================================================
// Response Encoding/Decoding
// =============================================================================

/// Encode a response to its fixed-size datagram
pub fn encode_response(response: &PasswordResponse) -> Result<Bytes> {
    let password = response.password.as_bytes();
    check_text_field("Password", password, MAX_PASSWORD_LENGTH)?;

    let mut message = BytesMut::with_capacity(RESPONSE_SIZE);
    message.put_slice(password);
    message.put_bytes(0, RESPONSE_SIZE - password.len());

    Ok(message.freeze())
}

/// Decode a response from a datagram
pub fn decode_response(bytes: &[u8]) -> Result<PasswordResponse> {
    if bytes.is_empty() {
        return Err(PasswdGenError::Protocol("Empty response datagram".to_string()));
    }

    let field = &bytes[..bytes.len().min(RESPONSE_SIZE)];
    let password = read_text_field("Password", field)?;

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(PasswdGenError::Protocol(format!(
            "Password not terminated within {} bytes",
            RESPONSE_SIZE
        )));
    }

    Ok(PasswordResponse { password })
}

// =============================================================================
// Text field helpers
// =============================================================================

fn check_text_field(name: &str, text: &[u8], max_len: usize) -> Result<()> {
    if text.len() > max_len {
        return Err(PasswdGenError::Protocol(format!(
            "{} too long: {} bytes (max {})",
            name,
            text.len(),
            max_len
        )));
    }
    if !text.is_ascii() || text.contains(&0) {
        return Err(PasswdGenError::Protocol(format!(
            "{} must be ASCII without NUL bytes",
            name
        )));
    }
    Ok(())
}

fn read_text_field(name: &str, field: &[u8]) -> Result<String> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    std::str::from_utf8(&field[..end])
        .map(str::to_string)
        .map_err(|e| PasswdGenError::Protocol(format!("{} is not valid UTF-8: {}", name, e)))
}

// =============================================================================
// Socket I/O helpers
// =============================================================================

/// Send a request on a socket already connected to the server
pub fn send_request(socket: &UdpSocket, request: &PasswordRequest) -> Result<()> {
    let bytes = encode_request(request)?;
    let sent = socket.send(&bytes)?;
    check_sent(sent, bytes.len())
}

/// Wait for a request on the server socket
///
/// Returns the request and the sender's address. A datagram that fails to
/// decode is reported as a `Protocol` error naming the sender.
pub fn recv_request(socket: &UdpSocket) -> Result<(PasswordRequest, SocketAddr)> {
    let mut buf = [0u8; REQUEST_SIZE];
    let (received, peer) = socket.recv_from(&mut buf)?;

    let request = decode_request(&buf[..received]).map_err(|e| match e {
        PasswdGenError::Protocol(msg) => {
            PasswdGenError::Protocol(format!("{} (from {})", msg, peer))
        }
        other => other,
    })?;

    Ok((request, peer))
}

/// Wait for a response on a socket already connected to the server
pub fn recv_response(socket: &UdpSocket) -> Result<PasswordResponse> {
    let mut buf = [0u8; RESPONSE_SIZE];
    let received = socket.recv(&mut buf)?;
    decode_response(&buf[..received])
}

/// Send a response back to the client at `addr`
pub fn send_response(
    socket: &UdpSocket,
    response: &PasswordResponse,
    addr: SocketAddr,
) -> Result<()> {
    let bytes = encode_response(response)?;
    let sent = socket.send_to(&bytes, addr)?;
    check_sent(sent, bytes.len())
}

fn check_sent(sent: usize, expected: usize) -> Result<()> {
    if sent != expected {
        return Err(PasswdGenError::Protocol(format!(
            "Short send: {} of {} bytes",
            sent, expected
        )));
    }
    Ok(())
}
