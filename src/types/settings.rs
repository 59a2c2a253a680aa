use serde::{Deserialize, Serialize};

use super::video::{VideoFormat, VideoQuality};

/// Top-level settings persisted between launches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConverterSettings {
    pub conversion: ConversionDefaults,
    pub window: WindowSettings,
    pub logging: LoggingSettings,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            conversion: ConversionDefaults::default(),
            window: WindowSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

/// Picker selections restored on startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConversionDefaults {
    pub target_format: VideoFormat,
    pub target_quality: VideoQuality,
}

/// Initial window geometry, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 480.0,
            height: 360.0,
        }
    }
}

/// Logging configuration. `RUST_LOG` takes precedence when set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
