//! Drop zone styling derived from the hover flag.

use serde::{Serialize, Serializer};

/// Semantic colors the page resolves against its light/dark palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    SelectedContentBackground,
    SelectedTextBackground,
    Clear,
}

impl ColorToken {
    /// CSS value for an SVG element's `style.stroke`/`style.fill`.
    ///
    /// Not valid as a `stroke`/`fill` attribute: attributes do not resolve `var()`.
    pub fn css_value(&self) -> &'static str {
        match self {
            ColorToken::SelectedContentBackground => "var(--selected-content-bg)",
            ColorToken::SelectedTextBackground => "var(--selected-text-bg)",
            ColorToken::Clear => "transparent",
        }
    }
}

impl Serialize for ColorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css_value())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub line_width: f64,
    /// Dash lengths; empty means a solid line.
    pub dash: Vec<f64>,
}

/// How the rounded drop zone rectangle is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropZoneStyle {
    pub corner_radius: f64,
    pub stroke: StrokeStyle,
    pub stroke_color: ColorToken,
    pub fill_color: ColorToken,
}

const CORNER_RADIUS: f64 = 8.0;
const LINE_WIDTH: f64 = 3.0;
const IDLE_DASH: f64 = 15.0;

impl DropZoneStyle {
    /// Solid and filled while a drag hovers; dashed and empty otherwise.
    pub fn for_hover(hovering: bool) -> Self {
        if hovering {
            Self {
                corner_radius: CORNER_RADIUS,
                stroke: StrokeStyle {
                    line_width: LINE_WIDTH,
                    dash: Vec::new(),
                },
                stroke_color: ColorToken::SelectedContentBackground,
                fill_color: ColorToken::SelectedTextBackground,
            }
        } else {
            Self {
                corner_radius: CORNER_RADIUS,
                stroke: StrokeStyle {
                    line_width: LINE_WIDTH,
                    dash: vec![IDLE_DASH],
                },
                stroke_color: ColorToken::SelectedTextBackground,
                fill_color: ColorToken::Clear,
            }
        }
    }
}
