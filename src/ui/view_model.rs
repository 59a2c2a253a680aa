//! Everything the converter page renders, computed from the shared state.

use serde::Serialize;

use super::style::DropZoneStyle;
use crate::services::status_projector::StatusProjector;
use crate::types::state::ConverterState;
use crate::types::video::{VideoFormat, VideoQuality};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConverterViewModel {
    pub prompt: String,
    /// Progress bar fill in `0.0..=1.0`; `None` hides the bar.
    pub progress: Option<f64>,
    pub convert_enabled: bool,
    pub drop_zone: DropZoneStyle,
    pub formats: Vec<PickerOption>,
    pub qualities: Vec<PickerOption>,
}

impl ConverterViewModel {
    pub fn build(state: &ConverterState, hovering: bool) -> Self {
        let formats = VideoFormat::ALL
            .iter()
            .map(|format| PickerOption {
                value: format.raw_value().to_string(),
                label: format.picker_label(),
                selected: *format == state.target_format,
            })
            .collect();
        let qualities = VideoQuality::ALL
            .iter()
            .map(|quality| PickerOption {
                value: quality.raw_value().to_string(),
                label: quality.raw_value().to_string(),
                selected: *quality == state.target_quality,
            })
            .collect();

        Self {
            prompt: StatusProjector::prompt(&state.conversion_status, state.input_video.as_ref()),
            progress: state
                .conversion_status
                .progress()
                .map(|fraction| if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) }),
            convert_enabled: state.can_convert(),
            drop_zone: DropZoneStyle::for_hover(hovering),
            formats,
            qualities,
        }
    }

    /// Script that hands this view model to the page.
    pub fn render_script(&self) -> String {
        let json = serde_json::to_string(self).unwrap_or_default();
        format!("if(window.__vc_render)__vc_render({})", json)
    }
}
