// src/gui/pages/mod.rs
//
// One module per dashboard view. A page is a stateless static; everything
// it shows comes from the loaded tables and everything it remembers lives
// in `app.state.gui`, so switching tabs never loses view settings.

use eframe::egui;

use crate::config::options::ViewKind;
use crate::gui::app::App;

pub mod data;
pub mod map_points;
pub mod map_clusters;
pub mod histogram;
pub mod predict;

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> ViewKind;

    /// Draw the page body below the action bar.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}

/// Shared notice for views that need a table the user hasn't fetched yet.
pub(crate) fn no_data_notice(ui: &mut egui::Ui, category: &str) {
    ui.add_space(8.0);
    ui.label(format!(
        "No local data for {category}. Hit FETCH to download the latest files."
    ));
}
