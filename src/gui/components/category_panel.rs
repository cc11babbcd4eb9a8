// src/gui/components/category_panel.rs
//
// Renders the left category list. Each label carries the year of the
// newest local file, or a dash when nothing has been downloaded yet.
// Clicking makes that table the active one for every view.

use eframe::egui;
use crate::config::consts::CATEGORIES;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Categories");

    ui.separator();

    // Match the scroll bar aesthetics used in the main table
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.bar_inner_margin = 0.0;
        s.bar_outer_margin = -6.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        // Make the background lighter to blend with the window
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    egui::ScrollArea::vertical()
        .id_salt("category_panel_scroll")
        .show(ui, |ui| {
            // Ensure the scroll area uses the full panel width so the bar hugs the edge
            let w = ui.available_width();
            ui.set_min_width(w);
            ui.set_width(w);

            let mut clicked: Option<&'static str> = None;

            for &cat in CATEGORIES.iter() {
                let is_active = app.active_category == cat;
                let label = match app.tables.get(cat) {
                    Some(t) => format!("{} ({})", cat, t.year),
                    None => format!("{} —", cat),
                };
                if ui.selectable_label(is_active, label).clicked() && !is_active {
                    clicked = Some(cat);
                }
            }

            if let Some(cat) = clicked {
                app.set_active_category(cat);
                let rows = app.active_table().map(|t| t.frame.nrows()).unwrap_or(0);
                app.status(format!("Active: {} ({} rows)", cat, rows));
            }
        });
}
