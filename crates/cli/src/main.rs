//! Online Store CLI - Demonstration run of the order and delivery model.
//!
//! # Usage
//!
//! ```bash
//! # Print the three sample orders and their delivery checks
//! online-store
//!
//! # Same, with debug diagnostics on stderr
//! RUST_LOG=debug online-store
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Diagnostic filter for stderr output (default: `warn`)
//!
//! Variables may also be placed in a `.env` file in the working directory.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::Parser;
use online_store_core::SystemClock;
use tracing_subscriber::EnvFilter;

mod demo;

#[derive(Parser)]
#[command(name = "online-store")]
#[command(author, version, about = "Online store order and delivery demo")]
struct Cli {}

/// Diagnostics go to stderr so stdout carries only the order output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    init_tracing();

    let _cli = Cli::parse();

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = demo::run(&SystemClock, &mut stdout) {
        tracing::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}
