// src/specs/learnvn.rs
//! Spec for the learningvietnamese.edu.vn slang article.
//!
//! Layout: every slang term is an `<h3>` (often "N. Term – gloss"), and the
//! first `<p>` after it is the explanation (subheadings like `<h4>` in
//! between are stepped over).
//! Skipped: headings that normalize to nothing, headings with no paragraph
//! before the next `<h3>` or higher, and empty paragraphs.

use scraper::Html;

use crate::{
    config::consts::LEARNVN_URL,
    core::{html, normalize_term},
    data::SlangEntry,
    error::{Error, Result},
};

use super::Source;

const NAME: &str = "learningvietnamese";

pub struct LearnVn;

pub static SOURCE: LearnVn = LearnVn;

impl Source for LearnVn {
    fn name(&self) -> &'static str { NAME }
    fn url(&self) -> &'static str { LEARNVN_URL }

    fn extract(&self, doc: &str) -> Result<Vec<SlangEntry>> {
        let page = Html::parse_document(doc);
        let h3 = html::selector(NAME, "h3")?;
        let headings = html::select_all(&page, &h3);

        if headings.is_empty() {
            return Err(Error::Parse { source_name: NAME, reason: s!("no <h3> headings found") });
        }

        let mut out = Vec::with_capacity(headings.len());
        for heading in headings {
            let raw = html::text_of(heading);
            let term = normalize_term(&raw);
            if term.is_empty() {
                logd!("{NAME}: skip heading {raw:?} (empty term)");
                continue;
            }

            let Some(p) = html::next_sibling_named(heading, "p") else {
                logd!("{NAME}: skip {term:?} (no paragraph)");
                continue;
            };
            let explanation = html::raw_text_of(p);
            if explanation.is_empty() {
                continue;
            }

            out.push(SlangEntry::new(term, explanation));
        }
        Ok(out)
    }
}
