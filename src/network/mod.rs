//! Network Module
//!
//! UDP server and client.
//!
//! ## Architecture
//! - One blocking socket on each side
//! - Server: receive, generate, reply, repeat
//! - Client: send one request, wait for one reply, no retry

mod server;
mod client;

pub use server::{handle_request, Server, ShutdownHandle};
pub use client::Client;
