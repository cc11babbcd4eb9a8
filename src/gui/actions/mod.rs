// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,fetch}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod fetch;   // src/gui/actions/fetch.rs

pub use copy::copy;
pub use export::export;
pub use fetch::fetch;

use crate::{frame::Frame, gui::app::App};

#[inline]
pub(super) fn active_frame(app: &App) -> Option<&Frame> {
    app.active_table().map(|t| &t.frame)
}
