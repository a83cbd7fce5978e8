//! # Configuration
//!
//! Adboard configuration is managed by [`clapfig`], which handles layered loading
//! from a TOML file, environment variables, and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `ADBOARD__PAGE_SIZE`, `ADBOARD__PLACEHOLDER_OWNER`, etc.
//! 2. **Data directory config**: `<data dir>/adboard.toml`.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `9` | Default `limit` for listings |
//! | `placeholder_owner` | `1` | Owner of ads created without a signed-in caller |
//! | `token_prefix` | `token_` | Prefix of issued session tokens |

use confique::Config;
use serde::{Deserialize, Serialize};

/// Configuration for adboard, stored in `adboard.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AdboardConfig {
    /// Default page size for listings when no limit is given
    #[config(default = 9)]
    pub page_size: usize,

    /// User id that owns ads created without an authenticated caller
    #[config(default = 1)]
    pub placeholder_owner: u64,

    /// Prefix for issued session tokens
    #[config(default = "token_")]
    pub token_prefix: String,
}

impl Default for AdboardConfig {
    fn default() -> Self {
        Self {
            page_size: 9,
            placeholder_owner: 1,
            token_prefix: "token_".to_string(),
        }
    }
}

impl AdboardConfig {
    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }
}
