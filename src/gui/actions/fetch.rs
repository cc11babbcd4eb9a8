// src/gui/actions/fetch.rs
use crate::{
    fetch,
    gui::app::App,
    gui::progress::GuiProgress,
};

pub fn fetch(app: &mut App) {
    logf!("Fetch: Begin categories={:?}", app.state.options.fetch.categories);

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the download happens ←
    let res = fetch::run(&app.state.options.fetch, Some(&mut prog));

    match res {
        Ok(report) => {
            logf!("Fetch: OK {}", report.summary());
            // Fresh files on disk: reload, which also drops the model and
            // point caches keyed on the old content.
            app.reload_tables();
            app.status(report.summary());
        }
        Err(e) => {
            loge!("Fetch: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
