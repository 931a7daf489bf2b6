//! passwdgen Server Binary
//!
//! Starts the UDP password server.

use clap::Parser;
use passwdgen::menu;
use passwdgen::network::Server;
use passwdgen::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// passwdgen Server
#[derive(Parser, Debug)]
#[command(name = "passwdgen-server")]
#[command(about = "UDP password generator server")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// How often the receive loop checks for shutdown (milliseconds)
    #[arg(short, long, default_value = "1000")]
    poll_interval_ms: u64,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,passwdgen=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("passwdgen Server v{}", passwdgen::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let config = Config::builder()
        .listen_addr(&args.listen)
        .poll_interval_ms(args.poll_interval_ms)
        .build();

    let server = match Server::bind(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Bind failed: {}", e);
            std::process::exit(1);
        }
    };

    menu::print_listening(&server.local_addr().to_string());

    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
