// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text typed into the filter / free-text lookup box
    pub query: String,

    /// Term currently shown in the central panel
    pub selected: Option<String>,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            query: s!(),
            selected: None,
            window_w: 900,
            window_h: 600,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
