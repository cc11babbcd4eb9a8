// src/gui/pages/data.rs
//
// Raw preview, describe summary and null counts for the active table —
// the "look at what you downloaded" view.

use eframe::egui;

use crate::{
    config::consts::PREVIEW_ROWS,
    config::options::{DataSection, ViewKind},
    frame::Frame,
    gui::{app::App, app::StatsCache, components::data_table},
};

use super::Page;

pub struct DataPage;
pub static PAGE: DataPage = DataPage;

impl Page for DataPage {
    fn title(&self) -> &'static str { "Data" }
    fn kind(&self) -> ViewKind { ViewKind::Data }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            let sec = &mut app.state.gui.data_section;
            ui.radio_value(sec, DataSection::Preview, "Preview");
            ui.radio_value(sec, DataSection::Describe, "Describe");
            ui.radio_value(sec, DataSection::Nulls, "Null counts");
        });

        ui.add_space(4.0);

        app.ensure_stats();
        let (Some(table), Some(stats)) = (app.active_table(), app.stats.as_ref()) else {
            super::no_data_notice(ui, &app.active_category);
            return;
        };

        match app.state.gui.data_section {
            DataSection::Preview => draw_preview(ui, &table.frame, stats),
            DataSection::Describe => draw_describe(ui, stats),
            DataSection::Nulls => draw_nulls(ui, stats),
        }
    }
}

/* ---------- sections ---------- */

fn draw_preview(ui: &mut egui::Ui, f: &Frame, stats: &StatsCache) {
    let n = f.nrows().min(PREVIEW_ROWS);
    ui.label(format!("First {} of {} rows", n, f.nrows()));
    data_table::draw(ui, "data_preview", &f.headers, &f.rows[..n], &stats.numeric);
}

fn draw_describe(ui: &mut egui::Ui, stats: &StatsCache) {
    if stats.describe.is_empty() {
        ui.label("No numeric columns in this table.");
        return;
    }

    let headers: Vec<String> =
        ["column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"]
            .iter()
            .map(|h| s!(*h))
            .collect();
    let rows: Vec<Vec<String>> = stats
        .describe
        .iter()
        .map(|(name, s)| {
            vec![
                name.clone(),
                s.count.to_string(),
                fmt(s.mean),
                fmt(s.std),
                fmt(s.min),
                fmt(s.q25),
                fmt(s.q50),
                fmt(s.q75),
                fmt(s.max),
            ]
        })
        .collect();
    let numeric = [false, true, true, true, true, true, true, true, true];

    data_table::draw(ui, "data_describe", &headers, &rows, &numeric);
}

fn draw_nulls(ui: &mut egui::Ui, stats: &StatsCache) {
    let headers = [s!("column"), s!("nulls")];
    let rows: Vec<Vec<String>> = stats
        .nulls
        .iter()
        .map(|(name, count)| vec![name.clone(), count.to_string()])
        .collect();
    let numeric = [false, true];

    data_table::draw(ui, "data_nulls", &headers, &rows, &numeric);
}

/// Compact cell text for summary values.
fn fmt(v: f64) -> String {
    if v.is_nan() {
        s!("NaN")
    } else if v == 0.0 {
        s!("0")
    } else if v.abs() >= 1e6 || v.abs() < 1e-3 {
        format!("{v:.4e}")
    } else {
        format!("{v:.4}")
    }
}
