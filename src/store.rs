// src/store.rs
//
// Persisted snapshot: a flat JSON object, UTF-8, non-ASCII kept literal,
// 4-space indentation so diffs between refreshes stay readable.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::JSON_INDENT;
use crate::data::SlangDictionary;
use crate::error::{Error, Result};

pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Read the snapshot at `path`. A missing file is an empty dictionary;
/// an unreadable or undecodable one is an error.
pub fn load(path: &Path) -> Result<SlangDictionary> {
    if !path.exists() {
        logd!("Store: No snapshot at {}, starting empty", path.display());
        return Ok(SlangDictionary::new());
    }

    let text = fs::read_to_string(path).map_err(|e| Error::store(path, e))?;
    let dict: SlangDictionary = serde_json::from_str(&text).map_err(|e| Error::store(path, e))?;

    logf!("Store: Loaded {} entries from {}", dict.len(), path.display());
    Ok(dict)
}

pub fn to_json(dict: &SlangDictionary) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(JSON_INDENT));
    dict.serialize(&mut ser)?;
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Overwrite the snapshot at `path` (temp file + rename). Returns the path written.
pub fn save(path: &Path, dict: &SlangDictionary) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::store(parent, e))?;
        }
    }

    let content = to_json(dict)?;
    let tmp = path.with_extension("json.tmp");
    {
        let mut file = File::create(&tmp).map_err(|e| Error::store(&tmp, e))?;
        file.write_all(content.as_bytes()).map_err(|e| Error::store(&tmp, e))?;
        file.sync_all().map_err(|e| Error::store(&tmp, e))?;
    }
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        Error::store(path, e)
    })?;

    logf!("Store: Saved {} entries → {}", dict.len(), path.display());
    Ok(path.to_path_buf())
}
