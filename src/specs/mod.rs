// src/specs/mod.rs
//! # Source “specs”
//!
//! One module per remote page. Each spec encodes *where the slang lives in the
//! page markup* and turns that markup into `(term, explanation)` pairs.
//!
//! ## What lives here
//! - **Pure markup → pairs extraction** (`Source::extract`), testable offline
//!   against saved fixtures.
//! - **Source-specific structure**: heading level, ordinal markers, which
//!   sibling holds the explanation.
//!
//! ## What does **not** live here
//! - Merging passes or precedence (`data::SlangDictionary::merge_pass`).
//! - Persistence (`store`), refresh policy (`scrape`), presentation.
//!
//! ## Conventions
//! - Terms go through `core::normalize_term`; empty terms never leave a spec.
//! - Duplicate terms inside one page are kept in document order; the
//!   dictionary built from them keeps the last one.
//! - A page without any heading of the expected shape is a parse error
//!   (the layout moved), not an empty result.
//!
//! ## Order
//! `SOURCES` is the fetch order, and fetch order is merge precedence:
//! later sources overwrite earlier ones on the same term.

use crate::{
    core::net,
    data::{SlangDictionary, SlangEntry},
    error::Result,
};

pub mod learnvn;
pub mod talkpal;

pub trait Source: Send + Sync + 'static {
    /// Short label for logs and progress lines.
    fn name(&self) -> &'static str;

    fn url(&self) -> &'static str;

    /// Raw page markup → pairs, in document order.
    fn extract(&self, doc: &str) -> Result<Vec<SlangEntry>>;

    /// Download the page. Overridden by offline fixtures in tests.
    fn fetch_doc(&self) -> Result<String> {
        net::http_get(self.url())
    }

    /// One extraction pass: fetch, extract, collapse duplicates (last wins).
    fn fetch(&self) -> Result<SlangDictionary> {
        let doc = self.fetch_doc()?;
        let entries = self.extract(&doc)?;
        let found = entries.len();
        let pass: SlangDictionary = entries.into_iter().collect();
        logf!(
            "Source: {} → {} pairs, {} unique terms",
            self.name(), found, pass.len()
        );
        Ok(pass)
    }
}

/// Fetch order. Later entries win on collision.
pub static SOURCES: &[&'static dyn Source] = &[
    &talkpal::SOURCE,
    &learnvn::SOURCE,
];

pub fn all_sources() -> &'static [&'static dyn Source] {
    SOURCES
}
