// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod data;
pub mod gui;
pub mod lookup;
pub mod progress;
pub mod scrape;
pub mod store;
pub mod translate;

pub use data::{SlangDictionary, SlangEntry};
pub use error::{Error, Result};
