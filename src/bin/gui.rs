// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::{IconData, ViewportBuilder};
use vn_slang::{config::state::AppState, gui};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/icon.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let state = AppState::default();
    let (w, h) = (state.gui.window_w as f32, state.gui.window_h as f32);

    // Dictionary + model load happen before the window opens; either failing is fatal.
    let app = match gui::App::boot(state) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    let mut viewport = ViewportBuilder::default().with_inner_size([w, h]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, app) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
