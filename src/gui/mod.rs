// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod components;
pub mod progress;

pub use app::{run, App};
