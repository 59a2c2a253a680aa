//! Converter window using `wry` + `tao`.
//!
//! Architecture:
//! - The page is served from the `vc://` custom protocol and has no state of its own;
//!   it redraws from whatever `__vc_render(viewModel)` it is handed.
//! - IPC from JS → Rust via `window.ipc.postMessage()`, handled by [`super::ipc`].
//! - OS drag-and-drop goes through wry's drag-drop handler into the [`DropGate`].
//!   Drop resolution runs on a tokio runtime and comes back as
//!   [`UiEvent::InputResolved`] through the event loop proxy.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder, EventLoopProxy};
use tao::window::WindowBuilder;
use wry::{DragDropEvent, WebViewBuilder};

use super::ipc::handle_ipc;
use super::UiEvent;
use crate::app::App;
use crate::services::action_handler::StateNotifier;
use crate::services::drop_gate::{DropGate, DropSink, PathItemProvider};
use crate::services::logging;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::location::SourceLocation;
use crate::types::state::lock_or_recover;

struct WindowState {
    app: App,
    gate: DropGate,
}

impl WindowState {
    fn render_script(&self) -> String {
        self.app.view_model(self.gate.is_targeted()).render_script()
    }
}

/// Event loop proxy usable from tokio worker threads.
struct ProxySink {
    proxy: Mutex<EventLoopProxy<UiEvent>>,
}

impl ProxySink {
    fn send(&self, event: UiEvent) {
        // Fails only once the event loop has exited.
        let _ = lock_or_recover(&self.proxy).send_event(event);
    }
}

impl DropSink for ProxySink {
    fn deliver(&self, location: SourceLocation) {
        self.send(UiEvent::InputResolved(location));
    }
}

const PAGE_HTML: &str = include_str!("../../resources/ui/converter.html");
const PAGE_CSS: &str = include_str!("../../resources/ui/converter.css");
const PAGE_JS: &str = include_str!("../../resources/ui/converter.js");

fn page_html() -> String {
    let mut html = String::with_capacity(PAGE_HTML.len() + PAGE_CSS.len() + PAGE_JS.len() + 128);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><style>");
    html.push_str(PAGE_CSS);
    html.push_str("</style></head><body>");
    html.push_str(PAGE_HTML);
    html.push_str("<script>");
    html.push_str(PAGE_JS);
    html.push_str("</script></body></html>");
    html
}

// ─── Main entry point ───

pub fn run() {
    let mut settings_engine = SettingsEngine::new(None);
    let load_result = settings_engine.load();
    logging::init(&settings_engine.get_settings().logging.filter);
    if let Err(e) = load_result {
        tracing::warn!(error = %e, "settings unreadable, using defaults");
    }
    tracing::info!(config = settings_engine.get_config_path(), "starting Video Converter");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("drop-resolver")
        .enable_all()
        .build()
        .expect("Failed to start the drop resolution runtime");

    let event_loop: EventLoop<UiEvent> = EventLoopBuilder::with_user_event().build();
    let sink = Arc::new(ProxySink {
        proxy: Mutex::new(event_loop.create_proxy()),
    });

    let notify: StateNotifier = {
        let sink = Arc::clone(&sink);
        Arc::new(move || sink.send(UiEvent::Render))
    };

    let window_settings = settings_engine.get_settings().window.clone();
    let app = App::new(settings_engine, notify);
    let gate = DropGate::new(runtime.handle().clone(), sink.clone());
    let state = Arc::new(Mutex::new(WindowState { app, gate }));

    let window = WindowBuilder::new()
        .with_title("Video Converter")
        .with_inner_size(tao::dpi::LogicalSize::new(window_settings.width, window_settings.height))
        .with_min_inner_size(tao::dpi::LogicalSize::new(360.0, 280.0))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_sink = sink.clone();
    let dnd_state = state.clone();
    let dnd_sink = sink.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol("vc".into(), move |_wv_id, _request| {
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(page_html().into_bytes().into())
                .unwrap_or_default()
        })
        .with_url("vc://localhost/")
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            tracing::trace!(payload = %body.chars().take(200).collect::<String>(), "ipc");
            let mut s = lock_or_recover(&ipc_state);
            if let Some(event) = handle_ipc(&mut s.app, body) {
                ipc_sink.send(event);
            }
        })
        .with_drag_drop_handler(move |event| {
            let mut s = lock_or_recover(&dnd_state);
            match event {
                DragDropEvent::Enter { .. } => {
                    if s.gate.drag_entered() {
                        dnd_sink.send(UiEvent::Render);
                    }
                    true
                }
                DragDropEvent::Leave => {
                    if s.gate.drag_exited() {
                        dnd_sink.send(UiEvent::Render);
                    }
                    true
                }
                DragDropEvent::Drop { paths, .. } => {
                    let response = s.gate.perform_drop(PathItemProvider::boxed_all(paths));
                    dnd_sink.send(UiEvent::Render);
                    response.accepted
                }
                _ => true,
            }
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        // Keeps drop resolution alive for as long as the loop runs.
        let _runtime = &runtime;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                let mut s = lock_or_recover(&state);
                s.app.shutdown();
                tracing::info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => {
                let js = {
                    let mut s = lock_or_recover(&state);
                    if let UiEvent::InputResolved(location) = user_event {
                        s.app.set_input_video(location);
                    }
                    s.render_script()
                };
                if let Err(e) = webview.evaluate_script(&js) {
                    tracing::warn!(error = %e, "failed to push view model");
                }
            }

            _ => {}
        }
    });
}
