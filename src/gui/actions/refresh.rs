// src/gui/actions/refresh.rs
use crate::{
    gui::{app::App, progress::GuiProgress},
    scrape,
};

pub fn refresh(app: &mut App) {
    logf!("Refresh: Begin store={}", app.state.options.store_path.display());

    let mut prog = GuiProgress::new(app.status.clone());

    // Blocks the UI thread until both sources are fetched
    match scrape::refresh(&app.state.options, Some(&mut prog)) {
        Ok((dict, summary)) => {
            logf!("Refresh: OK {} → {} entries", summary.previous, summary.total);
            app.dict = dict;

            // Explanations may have changed under the current selection.
            if let Some(term) = app.state.gui.selected.clone() {
                super::select(app, &term);
            }
            app.status(format!(
                "Refreshed: {} terms (was {})",
                summary.total, summary.previous
            ));
        }
        Err(e) => {
            loge!("Refresh: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
