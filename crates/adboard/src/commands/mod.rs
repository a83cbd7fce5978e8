//! # Command Layer
//!
//! This module contains the **core business logic** of adboard. Each operation lives
//! in its own submodule and implements plain Rust functions over domain types.
//!
//! ## The Read Pipeline
//!
//! ```text
//! DataStore ──► filter ──► paginate (sort, slice) ──► enrich ──► response
//!                                                       ▲
//!                 detail: view counter (write) ─────────┘
//! ```
//!
//! - [`filter`]: composable text / category / owner-state predicates.
//! - [`paginate`]: positional ordering and page slicing.
//! - [`enrich`]: seller state, redacted seller profile, other ads by the seller.
//!
//! ## Operations
//!
//! - [`list`]: filtered, ordered, paginated listing.
//! - [`detail`]: one ad, counting the view, optionally with related data.
//! - [`by_state`]: every ad whose owner lives in a given state.
//! - [`browse`]: unpaginated listing kept for older clients.
//! - [`create`]: validate and append a new ad.
//! - [`account`]: the caller's own profile and ads.
//! - [`signin`]: credential check and token issue.
//!
//! ## What Commands Do NOT Do
//!
//! - **Parse raw input**: query-string handling belongs to the API facade.
//! - **Any terminal or network I/O**: they return typed results and let the
//!   client decide how to render them.
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests run against
//! `InMemoryStore` fixtures (see `test_utils`).

pub mod account;
pub mod browse;
pub mod by_state;
pub mod create;
pub mod detail;
pub mod enrich;
pub mod filter;
pub mod list;
pub mod paginate;
pub mod signin;
