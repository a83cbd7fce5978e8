//! # CLI Behavior
//!
//! This is **one possible client** for adboard, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and logging setup.
//!
//! Query options mirror the raw request parameters one-to-one (`--q`, `--cat`,
//! `--limit`, ...) and are passed through as strings, so validation and defaults
//! behave exactly as they do for any other client.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring, dispatch and output

mod commands;
pub mod setup;

pub use commands::run;
