// src/store.rs

//! Local data files. The downloaded CSVs under `data/` are the only
//! persistence this tool has; this module finds the newest file per
//! category (same `<label>-<year>.csv` rule the resolver uses) and loads
//! it into a prepared [`Frame`].

use std::{
    collections::hash_map::DefaultHasher,
    error::Error,
    fs,
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
};

use crate::config::consts::{DATA_SEP, FILE_EXT};
use crate::frame::{self, Frame};
use crate::specs::catalog::split_stem;

/// One loaded category file.
pub struct Table {
    pub category: String,
    pub path: PathBuf,
    pub year: u32,
    pub frame: Frame,
    /// Content hash of the file body; the model cache keys on it.
    pub key: u64,
}

/// Newest `<category>-<year>.csv` in `dir`, if any.
pub fn latest_local(dir: &Path, category: &str) -> Option<(PathBuf, u32)> {
    let mut best: Option<(PathBuf, u32)> = None;

    let entries = fs::read_dir(dir).ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() { continue; }
        if path.extension().and_then(|s| s.to_str()) != Some(FILE_EXT) { continue; }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else { continue };
        let Some((label, year)) = split_stem(stem) else { continue };
        if label != category { continue; }

        match &best {
            Some((_, y)) if *y >= year => {}
            _ => best = Some((path, year)),
        }
    }
    best
}

/// Load and prepare the newest local file for `category`.
/// `Ok(None)` when nothing has been downloaded yet.
pub fn load_table(dir: &Path, category: &str) -> Result<Option<Table>, Box<dyn Error>> {
    let Some((path, year)) = latest_local(dir, category) else {
        return Ok(None);
    };

    // Downloads are byte-verbatim; decode tolerantly here.
    let bytes = fs::read(&path)?;
    let key = content_key(&bytes);
    let text = String::from_utf8_lossy(&bytes);
    let frame = frame::prepare(Frame::from_csv(&text, DATA_SEP));

    Ok(Some(Table { category: s!(category), path, year, frame, key }))
}

/// Load whatever exists for the given categories. Per-file problems are
/// logged and skipped — partial data is the normal state here.
pub fn load_all(dir: &Path, categories: &[&str]) -> Vec<Table> {
    let mut out = Vec::new();
    for cat in categories {
        match load_table(dir, cat) {
            Ok(Some(t)) => {
                logf!("Store: loaded {} ({} rows) from {}", cat, t.frame.nrows(), t.path.display());
                out.push(t);
            }
            Ok(None) => logd!("Store: no local file for {}", cat),
            Err(e) => loge!("Store: loading {} failed: {}", cat, e),
        }
    }
    out
}

pub fn content_key(bytes: &[u8]) -> u64 {
    let mut h = DefaultHasher::new();
    bytes.hash(&mut h);
    h.finish()
}
