// src/gui/components/tabs.rs
//
// Renders the top view tabs and performs the switch itself. Every view
// keeps its own state in app.state.gui, so switching is just an index
// change — nothing to rebuild, nothing to lose.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                let prev = pages[cur].kind();
                app.set_current_index(idx);
                logf!("UI: View switch {:?} → {:?}", prev, page.kind());
            }
        }
    });
}
