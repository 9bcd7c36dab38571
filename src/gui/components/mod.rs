// src/gui/components/mod.rs
pub mod lookup_panel;
pub mod status_bar;
pub mod term_panel;
