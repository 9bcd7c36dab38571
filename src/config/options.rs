// src/config/options.rs
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub store_path: PathBuf,
    pub refresh: RefreshPolicy,
    pub translator: TranslatorOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(STORE_DIR).join(DICT_FILE),
            refresh: RefreshPolicy::default(),
            translator: TranslatorOptions::default(),
        }
    }
}

impl AppOptions {
    /// The debug log sits next to the snapshot.
    pub fn log_path(&self) -> PathBuf {
        let dir = match self.store_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        dir.join(LOG_FILE)
    }
}

/// When startup re-scrapes the sources.
/// Lookups never refresh; an explicit refresh (CLI `update`, GUI button) always does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Use the snapshot as-is, even if absent (empty dictionary).
    Never,
    /// Scrape only when no snapshot exists yet.
    #[default]
    IfMissing,
    /// Scrape on every startup.
    Always,
}

impl RefreshPolicy {
    pub fn should_refresh(self, snapshot_exists: bool) -> bool {
        match self {
            RefreshPolicy::Never => false,
            RefreshPolicy::IfMissing => !snapshot_exists,
            RefreshPolicy::Always => true,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RefreshPolicy::Never => "never",
            RefreshPolicy::IfMissing => "if-missing",
            RefreshPolicy::Always => "always",
        }
    }
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefreshPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(RefreshPolicy::Never),
            "if-missing" | "missing" => Ok(RefreshPolicy::IfMissing),
            "always" => Ok(RefreshPolicy::Always),
            other => Err(format!("Unknown refresh policy: {other} (never | if-missing | always)")),
        }
    }
}

/// Where the hosted translation model lives. The model pair itself is fixed.
#[derive(Clone, PartialEq, Eq)]
pub struct TranslatorOptions {
    pub endpoint: String,
    pub model_id: String,
    pub token: Option<String>,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            endpoint: s!(INFERENCE_ENDPOINT),
            model_id: s!(MODEL_ID),
            token: std::env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty()),
        }
    }
}

impl TranslatorOptions {
    pub fn model_url(&self) -> String {
        join!(self.endpoint.trim_end_matches('/'), "/", &self.model_id)
    }
}

// Keep the token out of logs and panics.
impl fmt::Debug for TranslatorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorOptions")
            .field("endpoint", &self.endpoint)
            .field("model_id", &self.model_id)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_follows_store_path() {
        let mut opts = AppOptions::default();
        assert_eq!(opts.log_path(), PathBuf::from(STORE_DIR).join(LOG_FILE));

        opts.store_path = PathBuf::from("/tmp/dicts/slang.json");
        assert_eq!(opts.log_path(), PathBuf::from("/tmp/dicts").join(LOG_FILE));

        opts.store_path = PathBuf::from("slang.json");
        assert_eq!(opts.log_path(), PathBuf::from(".").join(LOG_FILE));
    }
}
