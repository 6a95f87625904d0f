//! Platform-specific directories.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{DirectError, DirectResult};

/// Directory holding `config.toml`.
///
/// - Windows: `%APPDATA%/direct`
/// - macOS: `~/Library/Application Support/direct`
/// - Linux: `~/.config/direct`
pub fn config_dir() -> DirectResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| DirectError::Config("could not determine config directory".into()))?;
    Ok(base.join(APP_NAME))
}

/// Directory for log files and other local state.
///
/// - Windows: `%APPDATA%/direct`
/// - macOS: `~/Library/Application Support/direct`
/// - Linux: `~/.local/share/direct`
pub fn data_dir() -> DirectResult<PathBuf> {
    let base = dirs::data_dir()
        .ok_or_else(|| DirectError::Config("could not determine data directory".into()))?;
    Ok(base.join(APP_NAME))
}
