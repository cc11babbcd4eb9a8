// src/gui/pages/histogram.rs
//
// Distribution of any numeric column of the active table, with an
// optional day/month filter when the table carries those columns.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Vec2};

use crate::{
    config::consts::HIST_BINS,
    config::options::ViewKind,
    frame::{self, Histogram},
    gui::app::App,
};

use super::Page;

pub struct HistogramPage;
pub static PAGE: HistogramPage = HistogramPage;

impl Page for HistogramPage {
    fn title(&self) -> &'static str { "Histograms" }
    fn kind(&self) -> ViewKind { ViewKind::Histograms }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        app.ensure_stats();

        // Owned copies up front; the combo below needs `app` mutable.
        let (numeric_names, can_filter) = match (app.active_table(), app.stats.as_ref()) {
            (Some(t), Some(st)) => {
                let names: Vec<String> = t
                    .frame
                    .headers
                    .iter()
                    .enumerate()
                    .filter(|(ci, _)| st.numeric.get(*ci).copied().unwrap_or(false))
                    .map(|(_, h)| h.clone())
                    .collect();
                let filter = t.frame.col("jour").is_some() && t.frame.col("mois").is_some();
                (names, filter)
            }
            _ => {
                super::no_data_notice(ui, &app.active_category);
                return;
            }
        };
        if numeric_names.is_empty() {
            ui.add_space(8.0);
            ui.label("No numeric columns to plot.");
            return;
        }

        // Default pick: the day column when present, else the first numeric.
        let current_ok = app
            .state
            .gui
            .hist_column
            .as_ref()
            .map(|c| numeric_names.iter().any(|n| n == c))
            .unwrap_or(false);
        if !current_ok {
            let pick = numeric_names
                .iter()
                .find(|n| n.as_str() == "jour")
                .unwrap_or(&numeric_names[0])
                .clone();
            app.state.gui.hist_column = Some(pick);
        }

        let mut selected = app.state.gui.hist_column.clone().unwrap_or_default();

        ui.horizontal(|ui| {
            ui.label("Column:");
            egui::ComboBox::from_id_salt("hist_column")
                .selected_text(selected.clone())
                .show_ui(ui, |ui| {
                    for name in &numeric_names {
                        ui.selectable_value(&mut selected, name.clone(), name);
                    }
                });

            if can_filter {
                ui.checkbox(&mut app.state.gui.hist_filter, "Filter by date");
                if app.state.gui.hist_filter {
                    ui.add(egui::Slider::new(&mut app.state.gui.hist_day, 1..=31).text("day"));
                    ui.add(egui::Slider::new(&mut app.state.gui.hist_month, 1..=12).text("month"));
                }
            }
        });

        if app.state.gui.hist_column.as_deref() != Some(selected.as_str()) {
            logf!("UI: Histogram column → {}", selected);
            app.state.gui.hist_column = Some(selected.clone());
        }

        // Collect the values under the current filter.
        let Some(table) = app.active_table() else { return };
        let f = &table.frame;
        let Some(ci) = f.col(&selected) else { return };
        let gui = &app.state.gui;

        let day_cols = match (f.col("jour"), f.col("mois")) {
            (Some(d), Some(m)) if gui.hist_filter && can_filter => Some((d, m)),
            _ => None,
        };

        let mut values = Vec::new();
        for row in &f.rows {
            if let Some((dci, mci)) = day_cols {
                let d = row.get(dci).and_then(|c| frame::parse_number(c));
                let m = row.get(mci).and_then(|c| frame::parse_number(c));
                if d != Some(gui.hist_day as f64) || m != Some(gui.hist_month as f64) {
                    continue;
                }
            }
            if let Some(v) = row.get(ci).and_then(|c| frame::parse_number(c)) {
                values.push(v);
            }
        }

        ui.label(format!("{} of {} rows", values.len(), f.nrows()));

        match frame::histogram(&values, HIST_BINS) {
            Some(h) => draw_bars(ui, &h),
            None => {
                ui.add_space(8.0);
                ui.label("No values to plot.");
            }
        }
    }
}

/* ---------- painting ---------- */

fn draw_bars(ui: &mut egui::Ui, hist: &Histogram) {
    let size = ui.available_size();
    let size = Vec2::new(size.x.max(64.0), size.y.max(96.0));
    let (rect, resp) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    painter.rect_filled(rect, 0.0, Color32::from_gray(24));

    let max = hist.max_count();
    if max == 0 {
        return;
    }

    let nb = hist.counts.len();
    let pad = 24.0; // bottom label strip
    let plot = Rect::from_min_max(rect.min, Pos2::new(rect.max.x, rect.max.y - pad));
    let bw = plot.width() / nb as f32;
    let fill = Color32::from_rgb(135, 206, 235); // skyblue

    let hover_x = resp.hover_pos().map(|p| p.x);
    let mut hovered: Option<usize> = None;

    for (i, &count) in hist.counts.iter().enumerate() {
        let x0 = plot.left() + bw * i as f32;
        let h = plot.height() * (count as f32 / max as f32);
        let bar = Rect::from_min_max(
            Pos2::new(x0 + 1.0, plot.bottom() - h),
            Pos2::new(x0 + bw - 1.0, plot.bottom()),
        );
        let is_hover = hover_x.map(|x| x >= x0 && x < x0 + bw).unwrap_or(false);
        let c = if is_hover { Color32::from_rgb(180, 225, 245) } else { fill };
        painter.rect_filled(bar, 1.0, c);
        if is_hover {
            hovered = Some(i);
        }
    }

    let label_c = Color32::from_gray(140);
    painter.text(
        Pos2::new(plot.left() + 2.0, rect.bottom() - 2.0),
        Align2::LEFT_BOTTOM,
        format!("{:.2}", hist.lo),
        FontId::monospace(11.0),
        label_c,
    );
    painter.text(
        Pos2::new(plot.right() - 2.0, rect.bottom() - 2.0),
        Align2::RIGHT_BOTTOM,
        format!("{:.2}", hist.hi),
        FontId::monospace(11.0),
        label_c,
    );

    if let Some(i) = hovered {
        let (lo, hi) = hist.bin_range(i);
        painter.text(
            Pos2::new(plot.center().x, rect.bottom() - 2.0),
            Align2::CENTER_BOTTOM,
            format!("[{:.2}, {:.2}): {}", lo, hi, hist.counts[i]),
            FontId::monospace(11.0),
            Color32::from_gray(200),
        );
    }
}
