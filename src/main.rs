//! Video Converter — a small desktop front-end for converting video files.
//!
//! Entry point: opens the converter window.
//! When built without the `gui` feature, runs a console demo of the window's logic.

#[cfg(feature = "gui")]
fn main() {
    video_converter::ui::converter_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    video_converter::services::logging::init("info");

    println!();
    println!("Video Converter v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_prompts();
    demo_drop_and_convert();
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_prompts() {
    use video_converter::services::status_projector::StatusProjector;
    use video_converter::types::conversion::ConversionStatus;
    use video_converter::types::location::SourceLocation;
    section("Status prompts");

    let input = SourceLocation::from_data_representation(b"file:///Users/me/My%20Holiday.mov").ok();
    let statuses = [
        ConversionStatus::NotStarted,
        ConversionStatus::InProgress(0.4217),
        ConversionStatus::Failed("The operation could not be completed".to_string()),
        ConversionStatus::Completed,
    ];

    println!("  {:<14} {}", "(no input)", StatusProjector::prompt(&ConversionStatus::NotStarted, None));
    for status in &statuses {
        let stage = match status {
            ConversionStatus::NotStarted => "not started",
            ConversionStatus::InProgress(_) => "in progress",
            ConversionStatus::Failed(_) => "failed",
            ConversionStatus::Completed => "completed",
        };
        println!("  {:<14} {}", stage, StatusProjector::prompt(status, input.as_ref()));
    }
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_drop_and_convert() {
    use std::sync::Arc;

    use video_converter::app::App;
    use video_converter::services::drop_gate::{DropGate, PathItemProvider};
    use video_converter::services::settings_engine::SettingsEngine;
    use video_converter::types::location::SourceLocation;
    section("Drop, pick and convert");

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            println!("  could not start runtime: {}", e);
            return;
        }
    };

    let settings_path = std::env::temp_dir().join("video-converter-demo.json");
    let engine = SettingsEngine::new(Some(settings_path.to_string_lossy().to_string()));
    let mut app = App::new(engine, Arc::new(|| {}));

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<SourceLocation>();
    let mut gate = DropGate::new(runtime.handle().clone(), Arc::new(tx));

    gate.drag_entered();
    println!("  hovering: {}", serde_json::to_string(&app.view_model(gate.is_targeted()).drop_zone).unwrap_or_default());

    let dropped = std::env::current_exe().unwrap_or_else(|_| std::env::temp_dir());
    let response = gate.perform_drop(PathItemProvider::boxed_all(vec![dropped]));
    println!("  drop accepted: {}", response.accepted);

    if let Some(task) = response.resolution {
        let _ = runtime.block_on(task);
    }
    // Back on the "UI thread": apply whatever the gate delivered.
    while let Ok(location) = rx.try_recv() {
        app.set_input_video(location);
    }

    let _ = app.select_format("mov");
    let _ = app.select_quality("Medium");
    let vm = app.view_model(gate.is_targeted());
    println!("  prompt: {}", vm.prompt);
    println!("  convert enabled: {}", vm.convert_enabled);

    app.convert();
    println!("  after convert: {}", app.view_model(false).prompt);

    let _ = std::fs::remove_file(settings_path);
    println!();
}
