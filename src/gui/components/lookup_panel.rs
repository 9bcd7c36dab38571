// src/gui/components/lookup_panel.rs
//
// Central panel: the two labeled blocks for the selected term,
// or a not-found notice, or the error of the last request.

use eframe::egui::{self, Color32, RichText};
use crate::{gui::app::App, lookup::Lookup};

fn block(ui: &mut egui::Ui, title: &str, body: &str) {
    ui.label(RichText::new(title).strong().size(16.0));
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(body);
    });
    ui.add_space(10.0);
}

pub fn draw(ui: &mut egui::Ui, app: &App) {
    egui::ScrollArea::vertical()
        .id_salt("lookup_scroll")
        .show(ui, |ui| match &app.view {
            None => {
                ui.weak("Chọn một từ lóng ở bên trái, hoặc gõ rồi nhấn Enter.");
            }
            Some(Err(e)) => {
                ui.colored_label(Color32::LIGHT_RED, format!("Error: {e}"));
            }
            Some(Ok(Lookup::NotFound { query })) => {
                ui.label(format!("Không tìm thấy “{query}” trong từ điển. (Not found)"));
            }
            Some(Ok(Lookup::Found { term, explanation, translation })) => {
                ui.heading(term.as_str());
                ui.separator();
                block(ui, "📝 Nghĩa tiếng Việt", explanation);
                block(ui, "🌐 English Translation", translation.as_deref().unwrap_or("—"));
            }
        });
}
