// src/core/sanitize.rs

use std::sync::LazyLock;

use regex::Regex;

// "1.2. Term" / ".3 Term"
static OUTLINE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[.\d]+(?:\.\d+)*\s*").expect("outline prefix regex"));

// "Term – English gloss", hyphen or en/em dash
static GLOSS_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\s+[-–—]\s+.*$").expect("gloss suffix regex"));

// "(aside)" anywhere, with its leading whitespace
static PAREN_ASIDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\s*\(.*?\)").expect("paren aside regex"));

/// Collapse whitespace runs (any Unicode whitespace, incl. NBSP) to one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

fn normalize_once(raw: &str) -> String {
    let s = OUTLINE_PREFIX.replace(raw, "");
    let s = GLOSS_SUFFIX.replace(&s, "");
    let s = PAREN_ASIDE.replace_all(&s, "");
    s.trim().to_lowercase()
}

/// Raw heading → dictionary key.
///
/// Strips outline numbering, a trailing dash gloss, and parenthesized asides,
/// then trims and lowercases. Repeats until nothing changes, so the result is
/// always a fixed point (`normalize_term(normalize_term(x)) == normalize_term(x)`).
///
/// An empty result means "no usable term"; callers drop it.
pub fn normalize_term(raw: &str) -> String {
    let mut cur = normalize_once(raw);
    loop {
        let next = normalize_once(&cur);
        if next == cur {
            return cur;
        }
        cur = next;
    }
}
