//! Unit tests for IPC messages posted by the converter page.

use std::sync::Arc;

use rstest::rstest;
use tempfile::TempDir;
use video_converter::app::App;
use video_converter::services::action_handler::NO_ENGINE_MESSAGE;
use video_converter::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use video_converter::types::conversion::ConversionStatus;
use video_converter::types::location::SourceLocation;
use video_converter::types::video::{VideoFormat, VideoQuality};
use video_converter::ui::ipc::{handle_ipc, parse_ipc, IpcCommand};
use video_converter::ui::UiEvent;

fn app_in_temp(dir: &TempDir) -> App {
    let engine = SettingsEngine::new(Some(
        dir.path().join("settings.json").to_string_lossy().to_string(),
    ));
    App::new(engine, Arc::new(|| {}))
}

#[rstest]
#[case(r#"{"cmd":"ui_ready"}"#, IpcCommand::UiReady)]
#[case(r#"{"cmd":"convert"}"#, IpcCommand::Convert)]
#[case(r#"{"cmd":"select_format","value":"mov"}"#, IpcCommand::SelectFormat { value: "mov".into() })]
#[case(r#"{"cmd":"select_quality","value":"Low"}"#, IpcCommand::SelectQuality { value: "Low".into() })]
fn test_parse_known_commands(#[case] message: &str, #[case] expected: IpcCommand) {
    assert_eq!(parse_ipc(message), Some(expected));
}

#[rstest]
#[case("not json")]
#[case(r#"{"cmd":"navigate","url":"https://example.com"}"#)]
#[case(r#"{"cmd":"select_format"}"#)]
#[case(r#"{"value":"mov"}"#)]
fn test_malformed_messages_are_ignored(#[case] message: &str) {
    let dir = TempDir::new().unwrap();
    let mut app = app_in_temp(&dir);
    assert_eq!(parse_ipc(message), None);
    assert_eq!(handle_ipc(&mut app, message), None);
}

#[test]
fn test_ui_ready_requests_render() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in_temp(&dir);
    assert_eq!(handle_ipc(&mut app, r#"{"cmd":"ui_ready"}"#), Some(UiEvent::Render));
}

#[test]
fn test_picker_selection_updates_state_and_settings() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in_temp(&dir);

    handle_ipc(&mut app, r#"{"cmd":"select_format","value":"m4v"}"#);
    handle_ipc(&mut app, r#"{"cmd":"select_quality","value":"Medium"}"#);

    let state = app.snapshot();
    assert_eq!(state.target_format, VideoFormat::M4v);
    assert_eq!(state.target_quality, VideoQuality::Medium);
    let saved = &app.settings_engine.get_settings().conversion;
    assert_eq!(saved.target_format, VideoFormat::M4v);
    assert_eq!(saved.target_quality, VideoQuality::Medium);
}

#[test]
fn test_unknown_picker_value_keeps_selection_and_rerenders() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in_temp(&dir);
    let before = app.snapshot();

    let event = handle_ipc(&mut app, r#"{"cmd":"select_format","value":"avi"}"#);

    assert_eq!(event, Some(UiEvent::Render));
    assert_eq!(app.snapshot(), before);
}

#[test]
fn test_convert_is_ignored_without_input() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in_temp(&dir);
    let before = app.snapshot();

    assert_eq!(handle_ipc(&mut app, r#"{"cmd":"convert"}"#), Some(UiEvent::Render));
    assert_eq!(app.snapshot(), before);
}

#[test]
fn test_convert_with_input_reaches_handler() {
    let dir = TempDir::new().unwrap();
    let mut app = app_in_temp(&dir);
    app.set_input_video(SourceLocation::from_data_representation(b"file:///a.mov").unwrap());

    handle_ipc(&mut app, r#"{"cmd":"convert"}"#);

    assert_eq!(
        app.snapshot().conversion_status,
        ConversionStatus::Failed(NO_ENGINE_MESSAGE.to_string())
    );
}
