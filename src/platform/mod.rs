// Platform-specific locations for the client's settings file.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "remindmarks";

/// Returns the configuration directory.
///
/// - **Linux**: `$XDG_CONFIG_HOME/remindmarks` or `~/.config/remindmarks`
/// - **macOS**: `~/Library/Application Support/remindmarks`
/// - **Windows**: `%APPDATA%/remindmarks`
pub fn get_config_dir() -> PathBuf {
    config_root().join(APP_DIR)
}

#[cfg(target_os = "windows")]
fn config_root() -> PathBuf {
    env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(target_os = "macos")]
fn config_root() -> PathBuf {
    home().join("Library").join("Application Support")
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn config_root() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home().join(".config"),
    }
}

#[cfg(not(target_os = "windows"))]
fn home() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}
