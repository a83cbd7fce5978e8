//! # Adboard
//!
//! Adboard is the query-and-enrichment engine behind a classified-ads board. It keeps
//! two small JSON collections (ads and users) and answers the questions a listing
//! site asks of them: filtered, sorted, paginated listings; single-ad detail with
//! the seller's card and their other ads; listings by location; ad creation; and a
//! minimal token sign-in.
//!
//! ## Architecture: UI-Agnostic Core
//!
//! This crate holds all of the behavior and none of the transport. Clients (the
//! bundled CLI, or an HTTP front end) parse their own input into the raw query
//! structs in [`api`] and map [`error::AdboardError`] back to their own surface via
//! `status_code()` and `public_message()`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (adboard-cli, HTTP adapter, ...)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Normalizes raw query values, applies defaults            │
//! │  - Resolves the caller for authenticated operations         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Filtering, ordering, pagination, enrichment              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/*.rs)                                 │
//! │  - Whole-collection reads, serialized atomic writes         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Records (`Ad`, `User`) and the redacted user views
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and context wiring
//! - [`error`]: Error types and their client-facing classification

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;

#[cfg(test)]
pub mod test_utils;
