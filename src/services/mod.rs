// Video Converter services
// Services provide the window's logic: prompt projection, drop handling, actions, settings and logging.

pub mod action_handler;
pub mod drop_gate;
pub mod logging;
pub mod settings_engine;
pub mod status_projector;
