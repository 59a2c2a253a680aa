//! Video Converter — a small desktop front-end for converting video files.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod platform;
pub mod services;
pub mod types;
pub mod ui;
