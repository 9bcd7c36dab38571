// src/core/html.rs
//
// Small DOM helpers over `scraper`. Sources only ever need:
// "all elements of one tag" and "the paragraph that follows this heading".
// Heading text is whitespace-collapsed; body text keeps its inner layout.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use super::sanitize::normalize_ws;

pub fn selector(source_name: &'static str, css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse {
        source_name,
        reason: format!("bad selector {css:?}: {e}"),
    })
}

pub fn select_all<'a>(doc: &'a Html, sel: &Selector) -> Vec<ElementRef<'a>> {
    doc.select(sel).collect()
}

/// Visible text of an element, whitespace collapsed and trimmed.
/// Entities are already decoded by the parser.
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    normalize_ws(&raw)
}

/// Body text of an element, only the ends trimmed.
pub fn raw_text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    s!(raw.trim())
}

/// `h1`..`h6` → 1..6.
pub fn heading_level(name: &str) -> Option<u8> {
    match name.to_ascii_lowercase().as_str() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

/// First following sibling element named `name`.
/// Lower-level subheadings are stepped over; a heading of the same or a
/// higher level ends the search, since a paragraph past it belongs to that
/// heading. A non-heading `el` stops at any heading.
pub fn next_sibling_named<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    let own = heading_level(el.value().name()).unwrap_or(6);
    for node in el.next_siblings() {
        let Some(sib) = ElementRef::wrap(node) else { continue };
        let tag = sib.value().name();
        if tag.eq_ignore_ascii_case(name) {
            return Some(sib);
        }
        if heading_level(tag).is_some_and(|lvl| lvl <= own) {
            return None;
        }
    }
    None
}
