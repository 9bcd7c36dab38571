// src/gui/components/status_bar.rs
use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        ui.label(app.status_text());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(format!("{} · refresh={}", app.state.options.store_path.display(), app.state.options.refresh));
        });
    });
}
