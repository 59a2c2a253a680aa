use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::SelectionError;

/// Container formats the converter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    Mp4,
    Mov,
    M4v,
}

impl VideoFormat {
    /// Every format, in picker order.
    pub const ALL: [VideoFormat; 3] = [VideoFormat::Mp4, VideoFormat::Mov, VideoFormat::M4v];

    /// File extension without the leading dot.
    pub fn raw_value(&self) -> &'static str {
        match self {
            VideoFormat::Mp4 => "mp4",
            VideoFormat::Mov => "mov",
            VideoFormat::M4v => "m4v",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VideoFormat::Mp4 => "MPEG-4",
            VideoFormat::Mov => "QuickTime",
            VideoFormat::M4v => "Apple MPEG-4",
        }
    }

    /// Picker row text, e.g. `.mp4 (MPEG-4)`.
    pub fn picker_label(&self) -> String {
        format!(".{} ({})", self.raw_value(), self.description())
    }
}

impl Default for VideoFormat {
    fn default() -> Self {
        VideoFormat::Mp4
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

impl FromStr for VideoFormat {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().trim_start_matches('.');
        VideoFormat::ALL
            .into_iter()
            .find(|format| format.raw_value().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SelectionError::UnknownFormat(s.to_string()))
    }
}

/// Export quality presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoQuality {
    Low,
    Medium,
    Highest,
}

impl VideoQuality {
    /// Every preset, in picker order.
    pub const ALL: [VideoQuality; 3] =
        [VideoQuality::Low, VideoQuality::Medium, VideoQuality::Highest];

    pub fn raw_value(&self) -> &'static str {
        match self {
            VideoQuality::Low => "Low",
            VideoQuality::Medium => "Medium",
            VideoQuality::Highest => "Highest",
        }
    }
}

impl Default for VideoQuality {
    fn default() -> Self {
        VideoQuality::Highest
    }
}

impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_value())
    }
}

impl FromStr for VideoQuality {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        VideoQuality::ALL
            .into_iter()
            .find(|quality| quality.raw_value().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SelectionError::UnknownQuality(s.to_string()))
    }
}
