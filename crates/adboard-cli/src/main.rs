//! # Adboard CLI
//!
//! A thin command-line client over the `adboard` library. Each subcommand maps to
//! one API operation and prints its result as pretty JSON on stdout, the same
//! document an HTTP front end would return as a response body.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/adboard-cli/src/cli/)                    │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Logging setup, dispatch, JSON output (commands.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/adboard/src/api.rs)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are reported on stderr as `Error: <message>` using the client-safe
//! message, and the process exits with status 1. Store failure details go to
//! the log (`-v` or `RUST_LOG`), never to the error line.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e.public_message());
        std::process::exit(1);
    }
}
