// src/gui/components/map_canvas.rs
//
// Flat lat/lon canvas shared by both map views. Equirectangular
// projection around the camera center: one degree of latitude maps to
// 2^zoom pixels, longitude shrinks by cos(center lat). Drag pans, the
// wheel zooms, a faint graticule gives orientation. The camera lives in
// GuiState so both views look at the same place.

use std::collections::HashMap;

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Stroke, Vec2};

use crate::config::state::GuiState;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MapMode {
    /// Every coordinate as a small translucent dot.
    Points,
    /// Screen-space buckets with per-bucket counts.
    Clusters,
}

const ZOOM_MIN: f32 = 2.0;
const ZOOM_MAX: f32 = 14.0;
/// Cluster cell size on screen, in px.
const CELL_PX: f32 = 48.0;

pub fn draw(ui: &mut egui::Ui, gui: &mut GuiState, pts: &[(f64, f64)], mode: MapMode) {
    // First frame with data: center on the cloud's mean coordinate.
    if !gui.map_set && !pts.is_empty() {
        let n = pts.len() as f64;
        gui.map_lat = pts.iter().map(|p| p.0).sum::<f64>() / n;
        gui.map_lon = pts.iter().map(|p| p.1).sum::<f64>() / n;
        gui.map_zoom = 6.0;
        gui.map_set = true;
        logd!("Map: camera centered at ({:.3}, {:.3})", gui.map_lat, gui.map_lon);
    }

    let size = ui.available_size();
    let size = Vec2::new(size.x.max(64.0), size.y.max(64.0));
    let (rect, resp) = ui.allocate_exact_size(size, Sense::click_and_drag());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, Color32::from_gray(24));

    // camera input first so this frame already uses the new view
    if resp.dragged() {
        let ppd = (2.0f64).powf(gui.map_zoom as f64);
        let lat_scale = gui.map_lat.to_radians().cos().max(0.05);
        let d = resp.drag_delta();
        gui.map_lat = (gui.map_lat + d.y as f64 / ppd).clamp(-85.0, 85.0);
        gui.map_lon -= d.x as f64 / (ppd * lat_scale);
    }
    if resp.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            gui.map_zoom = (gui.map_zoom + scroll * 0.01).clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    let ppd = (2.0f64).powf(gui.map_zoom as f64);
    let lat_scale = gui.map_lat.to_radians().cos().max(0.05);
    let c = rect.center();

    let project = |lat: f64, lon: f64| -> Pos2 {
        let x = c.x as f64 + (lon - gui.map_lon) * ppd * lat_scale;
        let y = c.y as f64 - (lat - gui.map_lat) * ppd;
        Pos2::new(x as f32, y as f32)
    };

    // faint graticule
    {
        let stroke = Stroke::new(1.0, Color32::from_gray(44));
        let step = graticule_step(ppd);
        let half_h = rect.height() as f64 / 2.0 / ppd;
        let half_w = rect.width() as f64 / 2.0 / (ppd * lat_scale);

        let mut lat = ((gui.map_lat - half_h) / step).floor() * step;
        while lat <= gui.map_lat + half_h {
            let y = project(lat, gui.map_lon).y;
            painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
            lat += step;
        }
        let mut lon = ((gui.map_lon - half_w) / step).floor() * step;
        while lon <= gui.map_lon + half_w {
            let x = project(gui.map_lat, lon).x;
            painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
            lon += step;
        }
    }

    match mode {
        MapMode::Points => {
            let dot = Color32::from_rgba_unmultiplied(200, 30, 0, 160);
            for &(lat, lon) in pts {
                let p = project(lat, lon);
                if rect.contains(p) {
                    painter.circle_filled(p, 2.0, dot);
                }
            }
        }
        MapMode::Clusters => {
            // bucket on-screen points into a coarse grid
            let mut cells: HashMap<(i32, i32), (usize, f32, f32)> = HashMap::new();
            for &(lat, lon) in pts {
                let p = project(lat, lon);
                if !rect.contains(p) {
                    continue;
                }
                let kx = ((p.x - rect.left()) / CELL_PX) as i32;
                let ky = ((p.y - rect.top()) / CELL_PX) as i32;
                let e = cells.entry((kx, ky)).or_insert((0, 0.0, 0.0));
                e.0 += 1;
                e.1 += p.x;
                e.2 += p.y;
            }

            for (count, sx, sy) in cells.values() {
                let center = Pos2::new(sx / *count as f32, sy / *count as f32);
                if *count == 1 {
                    painter.circle_filled(center, 2.5, Color32::from_rgba_unmultiplied(200, 30, 0, 200));
                    continue;
                }
                let (fill, r) = cluster_style(*count);
                painter.circle_filled(center, r, fill);
                painter.circle_stroke(center, r, Stroke::new(1.0, fill.gamma_multiply(0.6)));
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    count.to_string(),
                    FontId::proportional(12.0),
                    Color32::BLACK,
                );
            }
        }
    }

    // cursor readout
    if let Some(hover) = resp.hover_pos() {
        let lat = gui.map_lat - (hover.y - c.y) as f64 / ppd;
        let lon = gui.map_lon + (hover.x - c.x) as f64 / (ppd * lat_scale);
        painter.text(
            rect.left_bottom() + Vec2::new(6.0, -6.0),
            Align2::LEFT_BOTTOM,
            format!("{:.3}, {:.3}  z{:.1}", lat, lon, gui.map_zoom),
            FontId::monospace(11.0),
            Color32::from_gray(140),
        );
    }
}

/// Marker-cluster tiers: green under 10, yellow under 100, orange beyond.
fn cluster_style(count: usize) -> (Color32, f32) {
    let fill = if count < 10 {
        Color32::from_rgba_unmultiplied(110, 204, 57, 220)
    } else if count < 100 {
        Color32::from_rgba_unmultiplied(240, 194, 12, 220)
    } else {
        Color32::from_rgba_unmultiplied(241, 128, 23, 220)
    };
    let r = 12.0 + (count as f32).log10() * 4.0;
    (fill, r)
}

/// Keep graticule lines a readable distance apart as the zoom changes.
fn graticule_step(ppd: f64) -> f64 {
    if ppd >= 512.0 {
        0.25
    } else if ppd >= 128.0 {
        1.0
    } else if ppd >= 32.0 {
        2.0
    } else {
        10.0
    }
}
