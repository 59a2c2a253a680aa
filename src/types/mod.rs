// Video Converter shared type definitions
// Each submodule defines types used across the application.

pub mod conversion;
pub mod errors;
pub mod location;
pub mod settings;
pub mod state;
pub mod video;
