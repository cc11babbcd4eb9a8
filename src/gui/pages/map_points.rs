// src/gui/pages/map_points.rs
//
// Scatter rendering: every prepared coordinate as a translucent dot.

use eframe::egui;

use crate::{
    config::options::ViewKind,
    gui::{
        app::App,
        components::map_canvas::{self, MapMode},
    },
};

use super::Page;

pub struct MapPointsPage;
pub static PAGE: MapPointsPage = MapPointsPage;

impl Page for MapPointsPage {
    fn title(&self) -> &'static str { "Map: points" }
    fn kind(&self) -> ViewKind { ViewKind::MapPoints }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        draw_map(ui, app, MapMode::Points);
    }
}

/// Guard + canvas call shared by both map pages. Only tables with
/// coordinate columns get a map; the rest get a notice.
pub(super) fn draw_map(ui: &mut egui::Ui, app: &mut App, mode: MapMode) {
    let Some(table) = app.active_table() else {
        super::no_data_notice(ui, &app.active_category);
        return;
    };
    let has_coords = table.frame.col("lat").is_some() && table.frame.col("lon").is_some();
    if !has_coords {
        ui.add_space(8.0);
        ui.label(format!(
            "Location data is not available for {}.",
            app.active_category
        ));
        return;
    }

    app.ensure_points();
    let Some(cache) = app.points.as_ref() else { return };

    ui.label(format!("{} located accidents", cache.pts.len()));
    map_canvas::draw(ui, &mut app.state.gui, &cache.pts, mode);
}
