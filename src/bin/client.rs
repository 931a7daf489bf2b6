//! passwdgen Client Binary
//!
//! Interactive prompt that asks the server for passwords.

use std::io::{self, BufRead};

use clap::Parser;
use passwdgen::input::{parse_input, Input};
use passwdgen::menu;
use passwdgen::network::Client;
use passwdgen::protocol::DEFAULT_PORT;
use passwdgen::{Config, PasswdGenError};
use tracing_subscriber::{fmt, EnvFilter};

/// passwdgen Client
#[derive(Parser, Debug)]
#[command(name = "passwdgen-client")]
#[command(about = "Interactive client for the UDP password generator")]
#[command(version)]
struct Args {
    /// Server host name or IP
    #[arg(short = 'H', long, default_value = "localhost")]
    host: String,

    /// Server UDP port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// How long to wait for each response (milliseconds, 0 = forever)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,
}

fn main() {
    // Logs go to stderr so they never interleave with the prompt.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .server_host(&args.host)
        .server_port(args.port)
        .read_timeout_ms(args.timeout_ms)
        .build();

    let client = match Client::connect(&config) {
        Ok(c) => c,
        Err(e) => {
            menu::print_failure(&e.to_string());
            std::process::exit(1);
        }
    };

    tracing::debug!("Using server {}", client.server_addr());

    if let Err(e) = run(&client) {
        menu::print_failure(&e.to_string());
        std::process::exit(1);
    }
}

/// Prompt loop; returns on quit, end of input, or a network failure
fn run(client: &Client) -> passwdgen::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        menu::print_menu()?;

        let Some(line) = lines.next() else {
            // EOF behaves like `q`
            println!();
            return Ok(());
        };
        let line = line?;

        match parse_input(&line) {
            Ok(Input::Help) => menu::print_help(),
            Ok(Input::Quit) => return Ok(()),
            Ok(Input::Generate(request)) => match client.request(&request) {
                Ok(password) => menu::print_password(&password),
                Err(PasswdGenError::Rejected) => {
                    menu::print_error("The server rejected the request.")
                }
                Err(e) => return Err(e),
            },
            Err(e) if e.is_user_error() => menu::print_error(&e.to_string()),
            Err(e) => return Err(e),
        }
    }
}
