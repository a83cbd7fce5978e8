//! # Context Initialization
//!
//! Every client starts from [`initialize`], which settles where the collections
//! live, loads configuration from that same place and wires up the file store.
//!
//! ## Data Directory Resolution
//!
//! 1. An explicit path (the CLI `--data` flag).
//! 2. The `ADBOARD_DATA` environment variable.
//! 3. The OS-appropriate data directory (via the `directories` crate).
//!
//! The directory does not need to exist yet: missing collection files read as
//! empty, and the first write creates the directory.

use crate::api::AdboardApi;
use crate::config::AdboardConfig;
use crate::error::{AdboardError, Result};
use crate::store::{FileStore, FsBackend, RecordStore};
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use log::{debug, warn};
use std::path::PathBuf;

pub const DATA_ENV: &str = "ADBOARD_DATA";
pub const CONFIG_FILE: &str = "adboard.toml";

pub struct AdboardContext {
    pub api: AdboardApi<FileStore>,
    pub config: AdboardConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "adboard", "adboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AdboardError::Store("could not determine a data directory".to_string()))
}

/// Loads `adboard.toml` from the data directory, falling back to defaults when
/// the file is absent or unreadable.
pub fn load_config(data_dir: &std::path::Path) -> AdboardConfig {
    Clapfig::builder()
        .app_name("adboard")
        .file_name(CONFIG_FILE)
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_else(|e| {
            warn!("ignoring invalid {}: {}", CONFIG_FILE, e);
            AdboardConfig::default()
        })
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<AdboardContext> {
    let data_dir = resolve_data_dir(data_override)?;
    debug!("using data directory {}", data_dir.display());

    let config = load_config(&data_dir);
    let store = RecordStore::with_backend(FsBackend::new(data_dir.clone()));
    let api = AdboardApi::new(store, config.clone());

    Ok(AdboardContext {
        api,
        config,
        data_dir,
    })
}
