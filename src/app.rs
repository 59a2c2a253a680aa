//! App Core for Video Converter.
//!
//! Holds the shared state, the settings engine and the action handler, and exposes
//! the operations the window performs on them.

use crate::services::action_handler::{ConverterActionHandler, StateActionHandler, StateNotifier};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::SelectionError;
use crate::types::location::SourceLocation;
use crate::types::state::{lock_or_recover, ConverterState, SharedState};
use crate::types::video::{VideoFormat, VideoQuality};
use crate::ui::view_model::ConverterViewModel;

/// Central application struct.
pub struct App {
    pub state: SharedState,
    pub settings_engine: SettingsEngine,
    action_handler: Box<dyn ConverterActionHandler>,
}

impl App {
    /// Creates an App whose initial picker selections come from the loaded settings,
    /// driven by the default [`StateActionHandler`].
    pub fn new(settings_engine: SettingsEngine, notify: StateNotifier) -> Self {
        let state = Self::initial_state(&settings_engine).into_shared();
        let handler = StateActionHandler::new(state.clone(), notify);
        Self {
            state,
            settings_engine,
            action_handler: Box::new(handler),
        }
    }

    /// Creates an App around an externally built handler sharing `state`.
    pub fn with_handler(
        state: SharedState,
        settings_engine: SettingsEngine,
        action_handler: Box<dyn ConverterActionHandler>,
    ) -> Self {
        Self {
            state,
            settings_engine,
            action_handler,
        }
    }

    fn initial_state(settings_engine: &SettingsEngine) -> ConverterState {
        let defaults = &settings_engine.get_settings().conversion;
        ConverterState::new(defaults.target_format, defaults.target_quality)
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ConverterState {
        lock_or_recover(&self.state).clone()
    }

    pub fn view_model(&self, hovering: bool) -> ConverterViewModel {
        ConverterViewModel::build(&lock_or_recover(&self.state), hovering)
    }

    pub fn select_format(&mut self, raw: &str) -> Result<VideoFormat, SelectionError> {
        let format: VideoFormat = raw.parse()?;
        let quality = {
            let mut state = lock_or_recover(&self.state);
            state.target_format = format;
            state.target_quality
        };
        self.remember_selection(format, quality);
        Ok(format)
    }

    pub fn select_quality(&mut self, raw: &str) -> Result<VideoQuality, SelectionError> {
        let quality: VideoQuality = raw.parse()?;
        let format = {
            let mut state = lock_or_recover(&self.state);
            state.target_quality = quality;
            state.target_format
        };
        self.remember_selection(format, quality);
        Ok(quality)
    }

    fn remember_selection(&mut self, format: VideoFormat, quality: VideoQuality) {
        if let Err(e) = self.settings_engine.remember_selection(format, quality) {
            tracing::warn!(error = %e, "could not persist picker selection");
        }
    }

    /// Forwards a resolved drop to the action handler. Must run on the UI thread.
    pub fn set_input_video(&mut self, at: SourceLocation) {
        self.action_handler.set_input_video(at);
    }

    /// Presses Convert. Ignored while the button is disabled.
    pub fn convert(&mut self) {
        if !lock_or_recover(&self.state).can_convert() {
            return;
        }
        self.action_handler.convert_video();
    }

    /// Shutdown sequence: flush settings.
    pub fn shutdown(&mut self) {
        if let Err(e) = self.settings_engine.save() {
            tracing::warn!(error = %e, "could not save settings on exit");
        }
    }
}
