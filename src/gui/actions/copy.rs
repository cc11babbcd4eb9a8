// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let txt = {
        let Some(frame) = super::active_frame(app) else {
            app.status("Nothing to copy (no local data)");
            logd!("Copy: Clicked, but there's no loaded table");
            return;
        };
        if frame.rows.is_empty() {
            app.status("Nothing to copy");
            logd!("Copy: Clicked, but the table is empty");
            return;
        }

        let export = &app.state.options.export;
        logf!(
            "Copy: category={}, rows={}, cols={}",
            app.active_category,
            frame.nrows(),
            frame.ncols()
        );
        csv::to_export_string(&frame.headers, &frame.rows, export.include_headers, export.delim())
    };

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
