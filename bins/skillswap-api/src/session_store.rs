//! Stored session token
//!
//! The token is kept as plain text under the user config directory so that
//! separate CLI invocations share one login. `SKILLSWAP_AUTH_TOKEN` in the
//! environment overrides the file.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;

fn token_path() -> Result<PathBuf> {
    let dir = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(dir.join("skillswap").join("token"))
}

/// The stored token, if any
pub fn load() -> Option<String> {
    if let Ok(token) = env::var("SKILLSWAP_AUTH_TOKEN") {
        if !token.is_empty() {
            return Some(token);
        }
    }

    let path = token_path().ok()?;
    let token = fs::read_to_string(path).ok()?;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Persist a token for later invocations
pub fn save(token: &str) -> Result<()> {
    let path = token_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, token).with_context(|| format!("Failed to write {}", path.display()))
}

/// Remove the stored token; missing file is not an error
pub fn clear() -> Result<()> {
    let path = token_path()?;
    match fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("Failed to remove {}", path.display())),
    }
}
