//! UDP Client
//!
//! Sends one password request at a time to a resolved server address.

use std::net::{SocketAddr, ToSocketAddrs, UdpSocket};
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::error::{PasswdGenError, Result};
use crate::protocol::{recv_response, send_request, PasswordRequest};

/// Client for the password server
pub struct Client {
    /// Ephemeral socket connected to the server
    socket: UdpSocket,

    /// Resolved server address
    server_addr: SocketAddr,
}

impl Client {
    /// Resolve the configured server and prepare a connected socket
    ///
    /// Connecting the socket makes the OS discard datagrams from any other
    /// sender.
    pub fn connect(config: &Config) -> Result<Self> {
        config.validate()?;

        let server_addr = resolve(&config.server_host, config.server_port)?;
        let bind_addr = if server_addr.is_ipv4() {
            "0.0.0.0:0"
        } else {
            "[::]:0"
        };

        let socket = UdpSocket::bind(bind_addr)?;
        socket.connect(server_addr)?;
        if config.read_timeout_ms > 0 {
            socket.set_read_timeout(Some(Duration::from_millis(config.read_timeout_ms)))?;
        }

        debug!("Client socket {} -> {}", socket.local_addr()?, server_addr);

        Ok(Self {
            socket,
            server_addr,
        })
    }

    /// Send a request and wait for the generated password
    ///
    /// An empty password from the server is reported as
    /// [`PasswdGenError::Rejected`].
    pub fn request(&self, request: &PasswordRequest) -> Result<String> {
        send_request(&self.socket, request)?;
        debug!("Sent request {:?} to {}", request, self.server_addr);

        let response = recv_response(&self.socket)?;
        if response.is_rejected() {
            return Err(PasswdGenError::Rejected);
        }

        Ok(response.password)
    }

    /// The address requests are sent to
    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }
}

/// Resolve `host:port`, preferring an IPv4 address
fn resolve(host: &str, port: u16) -> Result<SocketAddr> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()
        .map_err(|e| PasswdGenError::Resolve(format!("{}: {}", host, e)))?
        .collect();

    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| PasswdGenError::Resolve(format!("{}: no addresses found", host)))
}
