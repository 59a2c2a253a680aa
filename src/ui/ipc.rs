// ─── IPC from the converter page ───
//
// The page posts JSON messages tagged by `cmd`; each one maps to an App
// operation and, usually, a re-render.

use serde::Deserialize;

use super::UiEvent;
use crate::app::App;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcCommand {
    UiReady,
    SelectFormat { value: String },
    SelectQuality { value: String },
    Convert,
}

pub fn parse_ipc(message: &str) -> Option<IpcCommand> {
    match serde_json::from_str(message) {
        Ok(command) => Some(command),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring malformed IPC message");
            None
        }
    }
}

pub fn handle_ipc(app: &mut App, message: &str) -> Option<UiEvent> {
    match parse_ipc(message)? {
        IpcCommand::UiReady => Some(UiEvent::Render),

        IpcCommand::SelectFormat { value } => {
            if let Err(e) = app.select_format(&value) {
                tracing::warn!(error = %e, "format picker sent an unknown value");
            }
            // Re-render either way so the picker snaps back to the stored value.
            Some(UiEvent::Render)
        }

        IpcCommand::SelectQuality { value } => {
            if let Err(e) = app.select_quality(&value) {
                tracing::warn!(error = %e, "quality picker sent an unknown value");
            }
            Some(UiEvent::Render)
        }

        IpcCommand::Convert => {
            app.convert();
            Some(UiEvent::Render)
        }
    }
}
