// Video Converter settings location on macOS
// Config: ~/Library/Application Support/VideoConverter

use std::env;
use std::path::PathBuf;

/// `~/Library/Application Support/VideoConverter`
pub fn get_config_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join("VideoConverter")
}
