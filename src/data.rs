// src/data.rs
//
// The dictionary as a typed container. Keys are normalized terms, values are
// the native-language explanation as scraped. Merging is explicit:
// `merge_pass` overlays one extraction pass, and the pass always wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlangEntry {
    pub term: String,
    pub explanation: String,
}

impl SlangEntry {
    pub fn new(term: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self { term: term.into(), explanation: explanation.into() }
    }
}

/// Counts from a single `merge_pass`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub replaced: usize,
}

/// term → explanation. Serializes as a flat JSON object.
/// Iteration is sorted by term; that order carries no meaning beyond display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlangDictionary {
    entries: BTreeMap<String, String>,
}

impl SlangDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Stored key and explanation for `term`.
    pub fn get_entry(&self, term: &str) -> Option<(&str, &str)> {
        self.entries
            .get_key_value(term)
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    /// Insert or overwrite. Empty terms are refused (returns false).
    pub fn insert(&mut self, entry: SlangEntry) -> bool {
        if entry.term.is_empty() {
            return false;
        }
        self.entries.insert(entry.term, entry.explanation);
        true
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Terms containing `needle` (case-insensitive). Empty needle matches all.
    pub fn terms_matching(&self, needle: &str) -> Vec<&str> {
        let needle = needle.trim().to_lowercase();
        self.terms()
            .filter(|t| needle.is_empty() || t.contains(&needle))
            .collect()
    }

    /// Overlay `pass` onto `self`. Every key of `pass` ends up present with
    /// the value from `pass`; keys only in `self` are left alone.
    pub fn merge_pass(&mut self, pass: SlangDictionary) -> MergeStats {
        let mut stats = MergeStats::default();
        for (term, explanation) in pass.entries {
            match self.entries.insert(term, explanation) {
                Some(_) => stats.replaced += 1,
                None => stats.added += 1,
            }
        }
        stats
    }

    /// `base` overlaid by each pass in order: the last pass holding a key wins.
    pub fn merged<I>(base: SlangDictionary, passes: I) -> SlangDictionary
    where
        I: IntoIterator<Item = SlangDictionary>,
    {
        let mut out = base;
        for pass in passes {
            out.merge_pass(pass);
        }
        out
    }
}

/// Later entries overwrite earlier ones with the same term; empty terms are dropped.
impl FromIterator<SlangEntry> for SlangDictionary {
    fn from_iter<T: IntoIterator<Item = SlangEntry>>(iter: T) -> Self {
        let mut dict = SlangDictionary::new();
        for entry in iter {
            dict.insert(entry);
        }
        dict
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SlangDictionary {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter().map(|(k, v)| SlangEntry::new(k, v)).collect()
    }
}
