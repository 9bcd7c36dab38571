// src/scrape.rs
//
// Refresh pipeline: snapshot → passes (in source order) → merged → snapshot.
// Single pass, no retries: the first failing source aborts the refresh and
// the snapshot on disk is left untouched.

use std::path::{Path, PathBuf};

use crate::{
    config::options::{AppOptions, RefreshPolicy},
    data::SlangDictionary,
    error::Result,
    progress::Progress,
    specs::{self, Source},
    store,
};

/// What one refresh did, for CLI output and status lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshSummary {
    pub previous: usize,
    pub passes: Vec<(&'static str, usize)>,
    pub total: usize,
    pub path: PathBuf,
}

/// Load the snapshot at `path`, overlay one pass per source (later sources
/// win), write the result back and return it.
pub fn update(
    path: &Path,
    sources: &[&dyn Source],
    mut progress: Option<&mut dyn Progress>,
) -> Result<(SlangDictionary, RefreshSummary)> {
    let old = store::load(path)?;
    let previous = old.len();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(sources.len());
    }

    let mut passes = Vec::with_capacity(sources.len());
    let mut counts = Vec::with_capacity(sources.len());
    for src in sources {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Fetching {}…", src.name()));
        }

        let pass = match src.fetch() {
            Ok(pass) => pass,
            Err(e) => {
                loge!("Refresh: {} failed: {}", src.name(), e);
                if let Some(p) = progress.as_deref_mut() {
                    p.finish();
                }
                return Err(e);
            }
        };

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(src.name(), pass.len());
        }
        counts.push((src.name(), pass.len()));
        passes.push(pass);
    }

    let combined = SlangDictionary::merged(old, passes);
    let saved = store::save(path, &combined);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    let written = saved.inspect_err(|e| loge!("Refresh: save failed: {}", e))?;

    logf!(
        "Refresh: {} → {} entries ({:?})",
        previous, combined.len(), counts
    );

    let summary = RefreshSummary {
        previous,
        passes: counts,
        total: combined.len(),
        path: written,
    };
    Ok((combined, summary))
}

/// Startup load under an explicit policy.
pub fn load_with_policy(
    path: &Path,
    policy: RefreshPolicy,
    sources: &[&dyn Source],
    progress: Option<&mut dyn Progress>,
) -> Result<SlangDictionary> {
    let have_snapshot = store::exists(path);
    if policy.should_refresh(have_snapshot) {
        logf!("Startup: refresh (policy={}, snapshot={})", policy, have_snapshot);
        update(path, sources, progress).map(|(dict, _)| dict)
    } else {
        logf!("Startup: using snapshot (policy={}, snapshot={})", policy, have_snapshot);
        store::load(path)
    }
}

/// Startup load against the real sources.
pub fn load_or_refresh(
    options: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<SlangDictionary> {
    load_with_policy(&options.store_path, options.refresh, specs::all_sources(), progress)
}

/// Explicit refresh against the real sources.
pub fn refresh(
    options: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<(SlangDictionary, RefreshSummary)> {
    update(&options.store_path, specs::all_sources(), progress)
}
