// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let status_msg = {
        let Some(frame) = super::active_frame(app) else {
            logd!("Export: Clicked, but there's no loaded table");
            app.status("Nothing to export (no local data)");
            return;
        };
        if frame.rows.is_empty() {
            logd!("Export: Clicked, but the table is empty");
            app.status("Nothing to export");
            return;
        }

        let export = &app.state.options.export;
        logf!(
            "Export: Begin category={}, rows={}, cols={}",
            app.active_category,
            frame.nrows(),
            frame.ncols()
        );

        match file::write_export_single(export, &frame.headers, &frame.rows) {
            Ok(path) => {
                logf!("Export: OK → {}", path.display());
                format!("Exported {}", path.display())
            }
            Err(e) => {
                loge!("Export: Error: {}", e);
                format!("Export error: {e}")
            }
        }
    };

    // set status only after the frame borrow is gone
    app.status(status_msg);
}
