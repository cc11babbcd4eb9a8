// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications** for the
//! open-data portal. Each spec focuses on a single page and encodes *where
//! the ground truth lives in the HTML* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of remote pages (currently just the dataset
//!   catalog page).
//! - **Selection rules**: which of the many links on the page qualify as
//!   dataset files, and which one wins per category (newest year).
//! - **Tolerant extraction** via `core::html` (case-insensitive tags,
//!   quote/entity handling) — no regexes, no DOM.
//!
//! ## What does **not** live here
//! - **Networking** — callers fetch the document and pass it in, so every
//!   spec is testable offline against fixture HTML.
//! - **Downloads/persistence** — `fetch` decides what to do with winners.
//! - **GUI concerns** — the dashboard reads files, never pages.
//!
//! ## Typical call chain
//! ```text
//! CLI / GUI → fetch::run → net::http_get(catalog)
//!                        → specs::catalog::resolve(doc, categories)
//!                        → fetch::download_all(winners, …)
//! ```
//!
//! ## Conventions & invariants
//! - Links that don't conform to the expected file-name shape are *skipped
//!   silently*; a malformed href is page noise, not an error.
//! - At most one winner per category; replacement only on a strictly
//!   greater year, so the earliest link wins a tie.
//! - Resolution is pure and idempotent over the same document.

pub mod catalog;
