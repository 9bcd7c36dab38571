// tests/common/mod.rs
//
// Offline stand-ins for the two remote pages and the model.
#![allow(dead_code)]

use vn_slang::{
    data::SlangEntry,
    error::{Error, Result},
    specs::Source,
};

pub const LEARNVN_HTML: &str = include_str!("../fixtures/learnvn.html");
pub const TALKPAL_HTML: &str = include_str!("../fixtures/talkpal.html");

/// A source whose page is a fixed string; extraction is delegated to a real source.
pub struct FixtureSource<S: Source> {
    pub inner: &'static S,
    pub doc: &'static str,
}

impl<S: Source> Source for FixtureSource<S> {
    fn name(&self) -> &'static str { self.inner.name() }
    fn url(&self) -> &'static str { self.inner.url() }
    fn extract(&self, doc: &str) -> Result<Vec<SlangEntry>> { self.inner.extract(doc) }
    fn fetch_doc(&self) -> Result<String> { Ok(self.doc.to_string()) }
}

/// A source that yields fixed pairs without any markup.
pub struct PairsSource {
    pub name: &'static str,
    pub pairs: Vec<(&'static str, &'static str)>,
}

impl Source for PairsSource {
    fn name(&self) -> &'static str { self.name }
    fn url(&self) -> &'static str { "fixture://pairs" }
    fn extract(&self, _doc: &str) -> Result<Vec<SlangEntry>> {
        Ok(self.pairs.iter().map(|(t, e)| SlangEntry::new(*t, *e)).collect())
    }
    fn fetch_doc(&self) -> Result<String> { Ok(String::new()) }
}

/// A source whose fetch always fails like a dead network.
pub struct DownSource;

impl Source for DownSource {
    fn name(&self) -> &'static str { "down" }
    fn url(&self) -> &'static str { "https://example.invalid/" }
    fn extract(&self, _doc: &str) -> Result<Vec<SlangEntry>> { Ok(Vec::new()) }
    fn fetch_doc(&self) -> Result<String> {
        Err(Error::fetch(self.url(), "connection refused"))
    }
}

pub fn stub_translator(_: &str) -> Result<String> {
    Ok("STUB".to_string())
}

pub fn failing_translator(_: &str) -> Result<String> {
    Err(Error::Translate("model unavailable".to_string()))
}
