// src/fetch.rs

//! Fetch orchestration: GET the catalog page, resolve the newest file per
//! category, download each winner. One pass, synchronous — four small
//! files don't warrant a worker pool.
//!
//! The catalog GET is the only fatal failure. Everything after it is
//! per-category: a failed download or write is recorded and the loop
//! moves on, so one bad link never costs the other files.

use std::{
    error::Error,
    path::{Path, PathBuf},
};

use crate::{
    config::consts::{CATALOG_URL, FILE_EXT},
    config::options::FetchOptions,
    core::net,
    file,
    progress::Progress,
    specs::catalog::{self, Winner},
};

/// What happened to one category.
#[derive(Debug)]
pub enum FetchStatus {
    Downloaded { year: u32, path: PathBuf, bytes: usize },
    Failed { year: u32, url: String, error: String },
    /// The page offered no qualifying link.
    NotFound,
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub category: String,
    pub status: FetchStatus,
}

#[derive(Debug, Default)]
pub struct FetchReport {
    pub outcomes: Vec<FetchOutcome>,
}

impl FetchReport {
    pub fn downloaded(&self) -> usize {
        self.outcomes.iter()
            .filter(|o| matches!(o.status, FetchStatus::Downloaded { .. }))
            .count()
    }
    pub fn failed(&self) -> usize {
        self.outcomes.iter()
            .filter(|o| matches!(o.status, FetchStatus::Failed { .. }))
            .count()
    }
    pub fn not_found(&self) -> usize {
        self.outcomes.iter()
            .filter(|o| matches!(o.status, FetchStatus::NotFound))
            .count()
    }
    pub fn summary(&self) -> String {
        format!(
            "{} downloaded, {} failed, {} without a recent file",
            self.downloaded(), self.failed(), self.not_found()
        )
    }
}

/// Full fetch: catalog page → resolve → download winners into
/// `options.out_dir`.
pub fn run(
    options: &FetchOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<FetchReport, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching catalog page…");
    }
    logf!("Fetch: GET {}", CATALOG_URL);
    let doc = net::http_get(CATALOG_URL)?;

    let cats: Vec<&str> = options.categories.iter().map(String::as_str).collect();
    let winners = catalog::resolve(&doc, &cats);
    logf!(
        "Fetch: resolved {} of {} categories",
        winners.iter().filter(|(_, w)| w.is_some()).count(),
        winners.len()
    );

    Ok(download_all(&winners, &options.out_dir, net::http_get_bytes, progress))
}

/// Download each winner into `dir` as `<category>-<year>.csv`, overwriting
/// whatever was there. `get` is injected so the loop is testable without a
/// network.
pub fn download_all<F>(
    winners: &[(String, Option<Winner>)],
    dir: &Path,
    mut get: F,
    mut progress: Option<&mut dyn Progress>,
) -> FetchReport
where
    F: FnMut(&str) -> Result<Vec<u8>, Box<dyn Error>>,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(winners.iter().filter(|(_, w)| w.is_some()).count());
    }

    let mut outcomes = Vec::with_capacity(winners.len());

    for (category, winner) in winners {
        let status = match winner {
            None => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("No recent file found for {category}"));
                }
                logf!("Fetch: no recent file for {category}");
                FetchStatus::NotFound
            }
            Some(w) => {
                let name = format!("{}-{}.{}", category, w.year, FILE_EXT);
                let written = get(&w.url).and_then(|bytes| {
                    let path = file::write_download(dir, &name, &bytes)?;
                    Ok((path, bytes.len()))
                });
                match written {
                    Ok((path, bytes)) => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_done(category, &name);
                        }
                        logf!("Fetch: {} ← {} ({} bytes)", name, w.url, bytes);
                        FetchStatus::Downloaded { year: w.year, path, bytes }
                    }
                    Err(e) => {
                        if let Some(p) = progress.as_deref_mut() {
                            p.item_failed(category, &e.to_string());
                        }
                        loge!("Fetch: {} failed: {}", category, e);
                        FetchStatus::Failed {
                            year: w.year,
                            url: w.url.clone(),
                            error: e.to_string(),
                        }
                    }
                }
            }
        };
        outcomes.push(FetchOutcome { category: category.clone(), status });
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    FetchReport { outcomes }
}
