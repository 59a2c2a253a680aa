//! Unit tests for the error enums' user-facing messages.

use std::error::Error;

use video_converter::types::errors::{DropError, SelectionError, SettingsError};

#[test]
fn test_drop_error_messages() {
    assert_eq!(DropError::NoProvider.to_string(), "Drop carried no item providers");
    assert_eq!(
        DropError::UnsupportedType("public.image".into()).to_string(),
        "Dropped item does not conform to type: public.image"
    );
    assert_eq!(
        DropError::LoadFailed("gone".into()).to_string(),
        "Failed to load dropped item: gone"
    );
    assert_eq!(
        DropError::InvalidData("empty payload".into()).to_string(),
        "Dropped item is not a valid location: empty payload"
    );
}

#[test]
fn test_settings_error_messages() {
    assert_eq!(
        SettingsError::IoError("denied".into()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".into()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".into()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("nope".into()).to_string(),
        "Invalid settings value: nope"
    );
}

#[test]
fn test_selection_error_messages() {
    assert_eq!(
        SelectionError::UnknownFormat("avi".into()).to_string(),
        "Unknown video format: avi"
    );
    assert_eq!(
        SelectionError::UnknownQuality("Ultra".into()).to_string(),
        "Unknown video quality: Ultra"
    );
}

#[test]
fn test_errors_box_as_std_error() {
    let errors: Vec<Box<dyn Error>> = vec![
        Box::new(DropError::NoProvider),
        Box::new(SettingsError::InvalidKey("x".into())),
        Box::new(SelectionError::UnknownFormat("y".into())),
    ];
    for e in errors {
        assert!(e.source().is_none());
        assert!(!e.to_string().is_empty());
    }
}
