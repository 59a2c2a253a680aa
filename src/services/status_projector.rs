//! Status Projector — turns the conversion status into the drop zone's prompt.
//!
//! The prompt depends on nothing but the status and the current input, so the
//! window can recompute it on every render.

use percent_encoding::percent_decode_str;

use crate::types::conversion::ConversionStatus;
use crate::types::location::{scheme_len, SourceLocation};

/// Shown while nothing has been dropped yet.
pub const DROP_PROMPT: &str = "Drop a video here!";

/// Shown once the engine reports success.
pub const SUCCESS_PROMPT: &str = "Successfully converted!";

pub struct StatusProjector;

impl StatusProjector {
    /// Prompt text for the given status and input.
    pub fn prompt(status: &ConversionStatus, input: Option<&SourceLocation>) -> String {
        match status {
            ConversionStatus::NotStarted => match input {
                None => DROP_PROMPT.to_string(),
                Some(location) => Self::display_path(location),
            },
            ConversionStatus::InProgress(fraction) => {
                format!("Converting... ({:.2}%)", fraction * 100.0)
            }
            ConversionStatus::Failed(message) => message.clone(),
            ConversionStatus::Completed => SUCCESS_PROMPT.to_string(),
        }
    }

    /// The location with its `scheme://` prefix removed and percent-escapes decoded.
    ///
    /// Falls back to the undecoded text when an escape is malformed or the decoded
    /// bytes are not UTF-8.
    pub fn display_path(location: &SourceLocation) -> String {
        let stripped = strip_scheme(location.as_str());
        decode_percent(stripped).unwrap_or_else(|| stripped.to_string())
    }
}

fn strip_scheme(text: &str) -> &str {
    match scheme_len(text) {
        Some(len) => text[len + 1..].strip_prefix("//").unwrap_or(text),
        None => text,
    }
}

/// Strict percent-decoding: every `%` must start a two-digit hex escape.
fn decode_percent(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let escape = bytes.get(i + 1..i + 3)?;
            if !escape.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(text)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}
