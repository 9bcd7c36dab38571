// src/gui/actions/select.rs
use crate::{gui::app::App, lookup::{self, Lookup}};

/// Look up `query` and translate its explanation; the result is cached in
/// `app.view` until the selection changes.
pub fn select(app: &mut App, query: &str) {
    let query = query.trim();
    if query.is_empty() {
        return;
    }

    logf!("Lookup: {query:?}");
    app.status(format!("Translating “{query}”…"));

    match lookup::lookup(&app.dict, app.translator.as_ref(), query) {
        Ok(found @ Lookup::Found { .. }) => {
            if let Lookup::Found { term, .. } = &found {
                app.state.gui.selected = Some(term.clone());
            }
            app.status("Ready");
            app.view = Some(Ok(found));
        }
        Ok(miss) => {
            app.state.gui.selected = None;
            app.status("Not found");
            app.view = Some(Ok(miss));
        }
        Err(e) => {
            loge!("Lookup: {query:?} failed: {e}");
            app.state.gui.selected = Some(s!(query));
            app.status(format!("Error: {e}"));
            app.view = Some(Err(e.to_string()));
        }
    }
}
