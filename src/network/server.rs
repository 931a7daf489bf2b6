//! UDP Server
//!
//! Receives password requests and answers each one from the same socket.

use std::io;
use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::{PasswdGenError, Result};
use crate::password::{generate_password, PasswordType, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::protocol::{recv_request, send_response, PasswordRequest, PasswordResponse};

/// UDP password server
pub struct Server {
    /// Bound socket, with a read timeout of `poll_interval_ms`
    socket: UdpSocket,

    /// Address actually bound (differs from config when port 0 was asked)
    local_addr: SocketAddr,

    /// Set to stop the receive loop
    shutdown: Arc<AtomicBool>,
}

/// Cloneable handle that stops a running [`Server`]
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
}

impl ShutdownHandle {
    /// Ask the server to stop; takes effect within one poll interval
    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// True once shutdown has been requested through any handle or the server
    pub fn is_shutdown(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl Server {
    /// Bind the server socket described by `config`
    pub fn bind(config: &Config) -> Result<Self> {
        config.validate()?;

        let socket = UdpSocket::bind(&config.listen_addr)?;
        socket.set_read_timeout(Some(Duration::from_millis(config.poll_interval_ms)))?;
        let local_addr = socket.local_addr()?;

        info!("Server bound to {}", local_addr);

        Ok(Self {
            socket,
            local_addr,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The address the socket is bound to
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// A handle that can stop the server from another thread
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
        }
    }

    /// Signal the server to stop after the current receive
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Serve requests until shut down (blocking)
    ///
    /// Returns an error only when the socket itself fails.
    pub fn run(&self) -> Result<()> {
        while !self.shutdown.load(Ordering::Relaxed) {
            let (request, peer) = match recv_request(&self.socket) {
                Ok(pair) => pair,
                Err(PasswdGenError::Io(ref e)) if is_timeout_error(e) => continue,
                Err(PasswdGenError::Io(ref e)) if e.kind() == io::ErrorKind::ConnectionReset => {
                    // Windows reports an ICMP port-unreachable from an earlier
                    // send as a reset on the next receive.
                    debug!("Ignoring connection reset on server socket");
                    continue;
                }
                Err(PasswdGenError::Protocol(msg)) => {
                    warn!("Dropping malformed request: {}", msg);
                    continue;
                }
                Err(e) => {
                    error!("Error receiving request: {}", e);
                    return Err(e);
                }
            };

            info!("New connection from {}", peer);
            debug!("Received request from {}: {:?}", peer, request);

            let response = handle_request(&request);

            if let Err(e) = send_response(&self.socket, &response, peer) {
                warn!("Error sending response to {}: {}", peer, e);
            }
        }

        info!("Server stopped");
        Ok(())
    }
}

/// Build the response for one request
///
/// Unknown selectors fall back to a numeric password. A length outside the
/// allowed range yields a rejected (empty) response.
pub fn handle_request(request: &PasswordRequest) -> PasswordResponse {
    let password_type = request.password_type().unwrap_or_else(|| {
        warn!(
            "Unknown password type {:?}, falling back to numeric",
            request.selector
        );
        PasswordType::Numeric
    });

    let length = parse_leading_int(&request.length);
    if length < MIN_PASSWORD_LENGTH as i64 || length > MAX_PASSWORD_LENGTH as i64 {
        warn!(
            "Rejecting request: length {:?} outside {}..={}",
            request.length, MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        );
        return PasswordResponse::rejected();
    }

    debug!("Generating {} password of length {}", password_type, length);
    PasswordResponse::new(generate_password(password_type, length as usize))
}

/// Read an integer the way C `atoi` does: skip leading whitespace, accept an
/// optional sign, take leading digits, stop at the first other byte.
/// Returns 0 when no digits are present.
fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0B');
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let value = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    if negative {
        -value
    } else {
        value
    }
}

/// Returns `true` for OS timeout / would-block errors that should be retried.
fn is_timeout_error(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}
