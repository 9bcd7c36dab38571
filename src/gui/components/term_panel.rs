// src/gui/components/term_panel.rs
//
// Left panel: Refresh, the filter / free-text box, and the sorted term list.
// Clicks are collected during drawing and applied after, so the table
// only ever borrows `app` immutably.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::gui::{actions, app::App};

const PREVIEW_CHARS: usize = 60;

fn preview(text: &str) -> String {
    let mut out: String = text.chars().take(PREVIEW_CHARS).collect();
    if text.chars().nth(PREVIEW_CHARS).is_some() {
        out.push('…');
    }
    out
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut refresh_clicked = false;

    ui.horizontal(|ui| {
        ui.strong("Từ lóng");
        ui.label(format!("({})", app.dict.len()));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("⟳ Refresh").on_hover_text("Fetch both sources again and merge").clicked() {
                refresh_clicked = true;
            }
        });
    });

    ui.separator();

    let resp = ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.query)
            .hint_text("Chọn hoặc gõ từ lóng…")
            .desired_width(f32::INFINITY),
    );
    let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    ui.separator();

    let matches: Vec<&str> = app.dict.terms_matching(&app.state.gui.query);
    let selected = app.state.gui.selected.as_deref();
    let mut clicked: Option<String> = None;

    TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(130.0).resizable(true).clip(true).at_least(60.0))
        .column(Column::remainder().clip(true))
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Term"); });
            header.col(|ui| { ui.strong("Nghĩa"); });
        })
        .body(|body| {
            body.rows(20.0, matches.len(), |mut row| {
                let term = matches[row.index()];
                row.col(|ui| {
                    if ui.selectable_label(selected == Some(term), term).clicked() {
                        clicked = Some(s!(term));
                    }
                });
                row.col(|ui| {
                    let explanation = app.dict.get(term).unwrap_or_default();
                    ui.label(preview(explanation)).on_hover_text(explanation);
                });
            });
        });

    if refresh_clicked {
        actions::refresh(app);
    } else if let Some(term) = clicked {
        actions::select(app, &term);
    } else if submitted {
        let query = app.state.gui.query.clone();
        actions::select(app, &query);
    }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_marks_truncation_only_when_needed() {
        assert_eq!(preview("ngắn"), "ngắn");
        let long = "a".repeat(61);
        assert_eq!(preview(&long).chars().count(), 61);
        assert!(preview(&long).ends_with('…'));
    }
}
