//! Configuration for passwdgen
//!
//! Centralized configuration with sensible defaults.

use crate::error::{PasswdGenError, Result};
use crate::protocol::DEFAULT_PORT;

/// Main configuration shared by the server and the client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Server Configuration
    // -------------------------------------------------------------------------
    /// UDP address the server binds to
    pub listen_addr: String,

    /// How long a server receive blocks before re-checking the shutdown flag
    /// (milliseconds)
    pub poll_interval_ms: u64,

    // -------------------------------------------------------------------------
    // Client Configuration
    // -------------------------------------------------------------------------
    /// Host name or IP of the password server
    pub server_host: String,

    /// UDP port of the password server
    pub server_port: u16,

    /// How long the client waits for a response (milliseconds, 0 = forever)
    pub read_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("127.0.0.1:{}", DEFAULT_PORT),
            poll_interval_ms: 1000,
            server_host: "localhost".to_string(),
            server_port: DEFAULT_PORT,
            read_timeout_ms: 5000,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check values that the socket layer would otherwise reject late
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.trim().is_empty() {
            return Err(PasswdGenError::Config("listen address is empty".to_string()));
        }
        // A zero read timeout is refused by the OS socket API.
        if self.poll_interval_ms == 0 {
            return Err(PasswdGenError::Config(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        if self.server_host.trim().is_empty() {
            return Err(PasswdGenError::Config("server host is empty".to_string()));
        }
        if self.server_port == 0 {
            return Err(PasswdGenError::Config("server port must not be 0".to_string()));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the UDP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the server shutdown poll interval (in milliseconds)
    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    /// Set the host the client sends requests to
    pub fn server_host(mut self, host: impl Into<String>) -> Self {
        self.config.server_host = host.into();
        self
    }

    /// Set the port the client sends requests to
    pub fn server_port(mut self, port: u16) -> Self {
        self.config.server_port = port;
        self
    }

    /// Set the client read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
