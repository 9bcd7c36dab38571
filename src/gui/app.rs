// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::SlangDictionary,
    error,
    lookup::Lookup,
    scrape,
    translate::{HostedModel, Translate},
};

use super::components;

pub const TITLE: &str = "Vietnamese Slang Translator";

pub fn run(options: eframe::NativeOptions, app: App) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

/// What the central panel shows for the current selection.
/// Computed once per selection, never per frame.
pub type View = Result<Lookup, String>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub dict: SlangDictionary,

    // loaded once at startup, reused for every lookup
    pub translator: Box<dyn Translate>,

    pub view: Option<View>,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState, dict: SlangDictionary, translator: Box<dyn Translate>) -> Self {
        let status = if dict.is_empty() {
            s!("Dictionary is empty. Press Refresh to fetch the sources.")
        } else {
            format!("Loaded {} terms", dict.len())
        };
        logf!("Init: terms={}, store={}", dict.len(), state.options.store_path.display());

        Self {
            state,
            dict,
            translator,
            view: None,
            status: Arc::new(Mutex::new(status)),
        }
    }

    /// Startup: dictionary under the configured refresh policy, then the model.
    /// Either failing fails startup.
    pub fn boot(state: AppState) -> error::Result<Self> {
        crate::log::init(&state.options.log_path());
        let dict = scrape::load_or_refresh(&state.options, None)?;
        let model = HostedModel::load(&state.options.translator)?;
        Ok(Self::new(state, dict, Box::new(model)))
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading(TITLE);
            ui.label("Nhập hoặc chọn từ lóng tiếng Việt để xem nghĩa và bản dịch tiếng Anh.");
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::SidePanel::left("terms")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                components::term_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::lookup_panel::draw(ui, self);
        });
    }
}
