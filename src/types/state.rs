use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::conversion::ConversionStatus;
use super::location::SourceLocation;
use super::video::{VideoFormat, VideoQuality};

/// Observable state shared between the window and the action handler.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterState {
    pub conversion_status: ConversionStatus,
    pub input_video: Option<SourceLocation>,
    pub target_format: VideoFormat,
    pub target_quality: VideoQuality,
}

/// Reference-counted handle the UI thread and the action handler both hold.
pub type SharedState = Arc<Mutex<ConverterState>>;

/// Locks `mutex`, taking the data back if a panicking holder poisoned it.
pub fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ConverterState {
    pub fn new(target_format: VideoFormat, target_quality: VideoQuality) -> Self {
        Self {
            target_format,
            target_quality,
            ..Self::default()
        }
    }

    pub fn into_shared(self) -> SharedState {
        Arc::new(Mutex::new(self))
    }

    /// Whether the Convert button is enabled.
    pub fn can_convert(&self) -> bool {
        self.input_video.is_some() && !self.conversion_status.is_in_progress()
    }
}
