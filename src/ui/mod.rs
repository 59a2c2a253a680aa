//! Video Converter UI layer.
//!
//! The window is a `tao` window hosting a `wry` WebView; the page itself is plain
//! HTML/CSS/JS. Rust computes a [`view_model::ConverterViewModel`] and pushes it to
//! the page, and the page reports picker changes and button presses over wry IPC.
//!
//! Everything except the window shell is toolkit-free and builds without `gui`.

use crate::types::location::SourceLocation;

pub mod ipc;
pub mod style;
pub mod view_model;

#[cfg(feature = "gui")]
pub mod converter_app;

/// Messages delivered to the UI thread's event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Push a fresh view model to the page.
    Render,
    /// A drop finished resolving off the UI thread.
    InputResolved(SourceLocation),
}
