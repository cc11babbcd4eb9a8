// src/gui/pages/map_clusters.rs
//
// Cluster rendering: the same cloud as the points map, bucketed into
// screen cells with per-bucket counts. Shares the camera with the
// points view, so flipping between the two keeps the place.

use eframe::egui;

use crate::{
    config::options::ViewKind,
    gui::{app::App, components::map_canvas::MapMode},
};

use super::{map_points::draw_map, Page};

pub struct MapClustersPage;
pub static PAGE: MapClustersPage = MapClustersPage;

impl Page for MapClustersPage {
    fn title(&self) -> &'static str { "Map: clusters" }
    fn kind(&self) -> ViewKind { ViewKind::MapClusters }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        draw_map(ui, app, MapMode::Clusters);
    }
}
