// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod refresh;
mod select;

pub use refresh::refresh;
pub use select::select;
