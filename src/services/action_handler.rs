//! Action Handler — the window's only way to change what gets converted.
//!
//! The conversion engine itself lives behind [`ConversionEngine`]; the window never
//! drives status transitions on its own.

use std::sync::Arc;

use crate::types::conversion::ConversionStatus;
use crate::types::location::SourceLocation;
use crate::types::state::{lock_or_recover, SharedState};

/// Status reported when Convert is pressed with no engine attached.
pub const NO_ENGINE_MESSAGE: &str = "No conversion engine is attached";

/// Called after the state changed off the UI thread so the window re-renders.
pub type StateNotifier = Arc<dyn Fn() + Send + Sync>;

/// Trait defining what the window asks of the conversion side.
pub trait ConverterActionHandler: Send {
    /// Called on the UI thread after a drop resolved to a location.
    fn set_input_video(&mut self, at: SourceLocation);
    /// Called when the Convert button is pressed.
    fn convert_video(&mut self);
}

/// Something that actually converts video.
///
/// Implementations own every status transition after `start` and call `notify`
/// each time they write to `state`.
pub trait ConversionEngine: Send {
    fn start(&mut self, state: SharedState, notify: StateNotifier);
}

/// Default handler: records the input in the shared state and forwards
/// conversions to an attached engine.
pub struct StateActionHandler {
    state: SharedState,
    notify: StateNotifier,
    engine: Option<Box<dyn ConversionEngine>>,
}

impl StateActionHandler {
    pub fn new(state: SharedState, notify: StateNotifier) -> Self {
        Self {
            state,
            notify,
            engine: None,
        }
    }

    pub fn with_engine(mut self, engine: Box<dyn ConversionEngine>) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn has_engine(&self) -> bool {
        self.engine.is_some()
    }
}

impl ConverterActionHandler for StateActionHandler {
    fn set_input_video(&mut self, at: SourceLocation) {
        let mut state = lock_or_recover(&self.state);
        tracing::info!(input = %at, "input video set");
        state.input_video = Some(at);
        // A running conversion keeps its status; anything else starts over.
        if !state.conversion_status.is_in_progress() {
            state.conversion_status = ConversionStatus::NotStarted;
        }
    }

    fn convert_video(&mut self) {
        {
            let mut state = lock_or_recover(&self.state);
            if !state.can_convert() {
                tracing::debug!("convert requested while disabled");
                return;
            }
            if self.engine.is_none() {
                tracing::warn!("convert requested without a conversion engine");
                state.conversion_status = ConversionStatus::Failed(NO_ENGINE_MESSAGE.to_string());
                return;
            }
            tracing::info!(
                format = %state.target_format,
                quality = %state.target_quality,
                "starting conversion"
            );
        }
        if let Some(engine) = self.engine.as_mut() {
            engine.start(Arc::clone(&self.state), Arc::clone(&self.notify));
        }
    }
}
