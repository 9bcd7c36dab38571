// src/lookup.rs
//
// Term → (explanation, translation). A miss is an outcome, not an error.

use crate::{
    core::normalize_term,
    data::SlangDictionary,
    error::Result,
    translate::Translate,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    Found {
        term: String,
        explanation: String,
        /// None when the caller asked for the explanation only.
        translation: Option<String>,
    },
    NotFound {
        query: String,
    },
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }
}

/// Find the dictionary key for what the user picked or typed:
/// the exact key first, then the query run through the term normalizer.
pub fn resolve<'a>(dict: &'a SlangDictionary, query: &str) -> Option<(&'a str, &'a str)> {
    if let Some(hit) = dict.get_entry(query) {
        return Some(hit);
    }
    let key = normalize_term(query);
    if key.is_empty() {
        return None;
    }
    dict.get_entry(&key)
}

/// Explanation only; never touches the model.
pub fn lookup_untranslated(dict: &SlangDictionary, query: &str) -> Lookup {
    match resolve(dict, query) {
        Some((term, explanation)) => {
            logd!("Lookup: hit {term:?}");
            Lookup::Found {
                term: s!(term),
                explanation: s!(explanation),
                translation: None,
            }
        }
        None => {
            logd!("Lookup: miss {query:?}");
            Lookup::NotFound { query: s!(query) }
        }
    }
}

/// Explanation plus its translation. Only a failing model call is an error.
pub fn lookup(dict: &SlangDictionary, translator: &dyn Translate, query: &str) -> Result<Lookup> {
    match lookup_untranslated(dict, query) {
        Lookup::Found { term, explanation, .. } => {
            let translation = translator.translate(&explanation)?;
            Ok(Lookup::Found { term, explanation, translation: Some(translation) })
        }
        miss => Ok(miss),
    }
}
