//! Source location of the video to convert.
//!
//! A location is kept as an absolute URL string (`file:///Users/me/My%20Clip.mov`),
//! which is also what a file-URL drag payload carries as its data representation.

use std::fmt;
use std::path::Path;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use super::errors::DropError;

/// Characters escaped when turning a filesystem path into a `file://` URL.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// An absolute URL pointing at the input video.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceLocation(String);

impl SourceLocation {
    /// Decodes the raw bytes a file-URL drag payload carries.
    ///
    /// Trailing NUL padding and surrounding whitespace are ignored. The rest must be
    /// UTF-8 text of the form `scheme:rest` with no embedded whitespace or controls.
    pub fn from_data_representation(data: &[u8]) -> Result<Self, DropError> {
        let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        let text = std::str::from_utf8(&data[..end])
            .map_err(|e| DropError::InvalidData(format!("not UTF-8: {}", e)))?
            .trim();

        if text.is_empty() {
            return Err(DropError::InvalidData("empty payload".to_string()));
        }
        if text.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DropError::InvalidData(format!(
                "unescaped whitespace in '{}'",
                text
            )));
        }
        if scheme_len(text).is_none() {
            return Err(DropError::InvalidData(format!("missing scheme in '{}'", text)));
        }

        Ok(Self(text.to_string()))
    }

    /// Builds a `file://` URL from an absolute filesystem path.
    pub fn from_path(path: &Path) -> Result<Self, DropError> {
        if !path.is_absolute() {
            return Err(DropError::InvalidData(format!(
                "path is not absolute: {}",
                path.display()
            )));
        }
        let raw = path
            .to_str()
            .ok_or_else(|| DropError::InvalidData("path is not valid UTF-8".to_string()))?;

        // Windows paths become file:///C:/dir/file.mov
        let normalized = raw.replace('\\', "/");
        let prefix = if normalized.starts_with('/') { "file://" } else { "file:///" };
        Ok(Self(format!(
            "{}{}",
            prefix,
            utf8_percent_encode(&normalized, PATH_SEGMENT)
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The URL scheme, e.g. `file`.
    pub fn scheme(&self) -> &str {
        scheme_len(&self.0).map_or("", |len| &self.0[..len])
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Length of a leading RFC 3986 scheme (without the colon), if present.
pub(crate) fn scheme_len(text: &str) -> Option<usize> {
    let colon = text.find(':')?;
    let scheme = &text[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(colon)
    } else {
        None
    }
}
