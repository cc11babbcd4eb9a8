// src/specs/catalog.rs
//! Scraping *spec* for the dataset catalog page.
//!
//! Purpose:
//! - Parse the **remote HTML** of the BAAC dataset page on data.gouv.fr and
//!   pick, per category, the resource link with the most recent year.
//! - A link qualifies only when its file name is
//!   `<label>-<year>.csv` with `<label>` one of the recognized categories
//!   and `<year>` entirely ASCII digits. Anything else is page noise.
//!
//! Responsibilities:
//! - HTML walking via `core::html::anchor_hrefs`.
//! - The replacement rule: strictly greater year wins, so on a tie the
//!   earliest link in document order keeps its claim.
//!
//! Non-Responsibilities (by design):
//! - **No networking.** Callers pass the document in; this stays testable
//!   offline against fixture HTML.
//! - **No downloads, no filesystem.**

use crate::config::consts::{FILE_EXT, STEM_SEP};
use crate::core::html;

/// Winning link for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Winner {
    pub url: String,
    pub year: u32,
}

/// Scan `doc` and return, per category in the given order, the qualifying
/// link with the maximal year — `None` where the page offers nothing.
pub fn resolve(doc: &str, categories: &[&str]) -> Vec<(String, Option<Winner>)> {
    let mut winners: Vec<(String, Option<Winner>)> =
        categories.iter().map(|c| (s!(*c), None)).collect();

    for href in html::anchor_hrefs(doc) {
        let Some((label, year)) = qualify(&href, categories) else { continue };

        // Linear find; four categories.
        if let Some((_, slot)) = winners.iter_mut().find(|(c, _)| c == label) {
            let replace = match slot {
                Some(w) => year > w.year,
                None => true,
            };
            if replace {
                *slot = Some(Winner { url: href.clone(), year });
            }
        }
    }

    winners
}

/// Does this href point at a dataset file we recognize?
/// Returns the matched category label and the parsed year.
pub fn qualify<'a>(href: &str, categories: &[&'a str]) -> Option<(&'a str, u32)> {
    let name = file_name(href);

    let dot = name.rfind('.')?;
    if &name[dot + 1..] != FILE_EXT {
        return None;
    }

    let (label, year) = split_stem(&name[..dot])?;
    categories.iter().find(|&&c| c == label).map(|&c| (c, year))
}

/// `usagers-2022` → `("usagers", 2022)`.
/// Exactly two separator-delimited parts; the second all digits.
pub fn split_stem(stem: &str) -> Option<(&str, u32)> {
    let mut parts = stem.split(STEM_SEP);
    let label = parts.next()?;
    let digits = parts.next()?;
    if parts.next().is_some() {
        return None; // three or more parts
    }
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = digits.parse::<u32>().ok()?;
    Some((label, year))
}

/* ---------- helpers ---------- */

fn file_name(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}
