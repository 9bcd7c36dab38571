// src/specs/talkpal.rs
//! Spec for the talkpal.ai "top 10 Gen Z slang" article.
//!
//! Layout: `<h2>N. Term</h2>` followed by a `<p>` explanation. Other `<h2>`s
//! (intro, conclusion) don't start with an ordinal and are ignored.
//! A subheading between the two is stepped over. A missing paragraph still
//! yields the term, with an empty explanation.

use scraper::Html;

use crate::{
    config::consts::TALKPAL_URL,
    core::{html, normalize_term},
    data::SlangEntry,
    error::{Error, Result},
};

use super::Source;

const NAME: &str = "talkpal";

// Lexical check on the heading text, so "11." or "7" both count.
const TOP_MARKERS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

pub struct Talkpal;

pub static SOURCE: Talkpal = Talkpal;

pub fn is_ranked_heading(text: &str) -> bool {
    TOP_MARKERS.iter().any(|m| text.starts_with(m))
}

/// "3. Term (gloss)" → "Term (gloss)". None without a ". " separator.
pub fn strip_ordinal(text: &str) -> Option<&str> {
    text.split_once(". ").map(|(_, rest)| rest)
}

impl Source for Talkpal {
    fn name(&self) -> &'static str { NAME }
    fn url(&self) -> &'static str { TALKPAL_URL }

    fn extract(&self, doc: &str) -> Result<Vec<SlangEntry>> {
        let page = Html::parse_document(doc);
        let h2 = html::selector(NAME, "h2")?;

        let ranked: Vec<_> = html::select_all(&page, &h2)
            .into_iter()
            .map(|h| (h, html::text_of(h)))
            .filter(|(_, text)| is_ranked_heading(text))
            .collect();

        if ranked.is_empty() {
            return Err(Error::Parse { source_name: NAME, reason: s!("no numbered <h2> headings found") });
        }

        let mut out = Vec::with_capacity(ranked.len());
        for (heading, text) in ranked {
            let Some(rest) = strip_ordinal(&text) else {
                logd!("{NAME}: skip heading {text:?} (no ordinal separator)");
                continue;
            };
            let term = normalize_term(rest);
            if term.is_empty() {
                logd!("{NAME}: skip heading {text:?} (empty term)");
                continue;
            }

            let explanation = html::next_sibling_named(heading, "p")
                .map(html::raw_text_of)
                .unwrap_or_default();

            out.push(SlangEntry::new(term, explanation));
        }
        Ok(out)
    }
}
