// Video Converter settings location on Linux
// Config: ~/.config/video-converter

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "video-converter";

/// Uses `$XDG_CONFIG_HOME/video-converter` if set, otherwise `~/.config/video-converter`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg).join(APP_DIR),
        _ => {
            let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
            PathBuf::from(home).join(".config").join(APP_DIR)
        }
    }
}
