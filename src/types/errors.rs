use std::fmt;

// === DropError ===

/// Errors raised while resolving a dropped item into a source location.
///
/// None of these reach the user: the drop gate logs them and drops the gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum DropError {
    /// The drop carried no item providers at all.
    NoProvider,
    /// The first provider cannot supply the accepted type identifier.
    UnsupportedType(String),
    /// The provider failed to load its data representation.
    LoadFailed(String),
    /// The loaded bytes are not a valid location reference.
    InvalidData(String),
}

impl fmt::Display for DropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropError::NoProvider => write!(f, "Drop carried no item providers"),
            DropError::UnsupportedType(type_id) => {
                write!(f, "Dropped item does not conform to type: {}", type_id)
            }
            DropError::LoadFailed(msg) => write!(f, "Failed to load dropped item: {}", msg),
            DropError::InvalidData(msg) => {
                write!(f, "Dropped item is not a valid location: {}", msg)
            }
        }
    }
}

impl std::error::Error for DropError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === SelectionError ===

/// Errors raised when a picker sends a value outside its closed set.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    /// The value is not one of the known target formats.
    UnknownFormat(String),
    /// The value is not one of the known quality presets.
    UnknownQuality(String),
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnknownFormat(value) => write!(f, "Unknown video format: {}", value),
            SelectionError::UnknownQuality(value) => {
                write!(f, "Unknown video quality: {}", value)
            }
        }
    }
}

impl std::error::Error for SelectionError {}
