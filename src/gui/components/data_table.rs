// src/gui/components/data_table.rs
//
// Draws a read-only striped table. Purely a view over borrowed
// headers/rows; callers decide what goes in (raw preview, describe
// summary, null counts).

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

/// `numeric` flags columns that get center alignment and narrow widths.
pub fn draw(
    ui: &mut egui::Ui,
    salt: &str,
    headers: &[String],
    rows: &[Vec<String>],
    numeric: &[bool],
) {
    let cols = headers.len();
    if cols == 0 {
        ui.label("Empty table");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content), and tune size
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;           // slightly slimmer bar
        s.bar_inner_margin = 7.0;     // minimal gap to content (avoid overlap)
        s.bar_outer_margin = 0.0;     // flush to the outside edge
        s.handle_min_length = 48.0;   // keep handle usable even in small windows
        s.foreground_color = true;    // slightly darker handle
        // Make the scroll bars blend better with the window
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let is_numeric = |ci: usize| numeric.get(ci).copied().unwrap_or(false);

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt((salt, "hscroll"))
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                // Reset egui_extras table state when the column count changes
                .id_salt((salt, cols));

            for ci in 0..cols {
                let w = if is_numeric(ci) { 70.0 } else { 140.0 };
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in headers.iter().enumerate() {
                        header.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let label = RichText::new(h).strong();
                                if is_numeric(ci) {
                                    ui.centered_and_justified(|ui| { ui.label(label); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.label(label);
                                    });
                                }
                            });
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let ri = row.index();
                        for ci in 0..cols {
                            let cell = rows.get(ri).and_then(|r| r.get(ci));
                            row.col(|ui| {
                                ui.scope(|ui| {
                                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                    if let Some(cell) = cell {
                                        if is_numeric(ci) {
                                            ui.centered_and_justified(|ui| { ui.label(cell); });
                                        } else {
                                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                                ui.label(cell);
                                            });
                                        }
                                    }
                                });
                            });
                        }
                    });
                });
        });
}
