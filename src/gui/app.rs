// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{
    config::consts::{CATEGORIES, DEFAULT_CATEGORY},
    config::state::AppState,
    frame::{self, parse_number},
    model::{self, TrainedModel},
    store::{self, Table},
};

use super::{
    pages::Page,
    progress::GuiProgress,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "BAAC Scope",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

/// Parsed (lat, lon) cloud for the active table. Both map views feed from
/// this; it is rebuilt when the category or its file content changes.
pub struct PointsCache {
    pub category: String,
    pub key: u64,
    pub pts: Vec<(f64, f64)>,
}

/// Column statistics for the active table. describe() sorts every numeric
/// column, which is too much to redo every frame.
pub struct StatsCache {
    pub category: String,
    pub key: u64,
    pub numeric: Vec<bool>,
    pub describe: Vec<(String, frame::Summary)>,
    pub nulls: Vec<(String, usize)>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded category tables, keyed by label
    pub tables: HashMap<String, Table>,
    pub active_category: String,

    // derived caches; all key on the source table's content
    pub model: Option<TrainedModel>,
    pub points: Option<PointsCache>,
    pub stats: Option<StatsCache>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status/progress (progress sinks write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        let mut status = s!("Idle");

        // whatever earlier runs left in the data directory
        let mut tables = HashMap::new();
        for t in store::load_all(&state.options.fetch.out_dir, &CATEGORIES) {
            tables.insert(t.category.clone(), t);
        }
        if !tables.is_empty() {
            status = s!("Loaded local data");
        }

        // Active table: the usual starting category, else the first one
        // that actually loaded.
        let active_category = if tables.contains_key(DEFAULT_CATEGORY) {
            s!(DEFAULT_CATEGORY)
        } else {
            CATEGORIES
                .iter()
                .find(|c| tables.contains_key(**c))
                .map(|c| s!(*c))
                .unwrap_or_else(|| s!(DEFAULT_CATEGORY))
        };

        state.options.export.set_stem(&active_category);
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        logf!(
            "Init: {} of {} categories loaded, active={}",
            tables.len(), CATEGORIES.len(), active_category
        );

        Self {
            state,
            tables,
            active_category,
            model: None,
            points: None,
            stats: None,
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(status)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    #[inline]
    pub fn active_table(&self) -> Option<&Table> {
        self.tables.get(&self.active_category)
    }

    /// Switch the active table. The export stem follows along unless the
    /// user has edited the path field; per-column view state resets.
    pub fn set_active_category(&mut self, category: &str) {
        if self.active_category == category {
            return;
        }
        self.active_category = s!(category);
        self.state.gui.hist_column = None;
        self.state.gui.last_prediction = None;
        if !self.out_path_dirty {
            self.state.options.export.set_stem(category);
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
        }
        logf!("UI: active category → {}", category);
    }

    /// Re-scan the data directory after a fetch. The model and the point
    /// cloud key on file content that may just have changed, so both go.
    pub fn reload_tables(&mut self) {
        self.tables.clear();
        for t in store::load_all(&self.state.options.fetch.out_dir, &CATEGORIES) {
            self.tables.insert(t.category.clone(), t);
        }
        self.model = None;
        self.points = None;
        self.stats = None;
        self.state.gui.map_set = false; // recenter on the fresh data
        if !self.tables.contains_key(&self.active_category) {
            if let Some(c) = CATEGORIES.iter().find(|c| self.tables.contains_key(**c)) {
                self.set_active_category(c);
            }
        }
    }

    /// Rebuild the (lat, lon) cloud if the cached one is for different
    /// content. A table without coordinate columns caches as empty.
    pub fn ensure_points(&mut self) {
        let Some(table) = self.tables.get(&self.active_category) else {
            self.points = None;
            return;
        };
        let fresh = self
            .points
            .as_ref()
            .map(|c| c.category == table.category && c.key == table.key)
            .unwrap_or(false);
        if fresh {
            return;
        }

        let mut pts = Vec::new();
        if let (Some(lat), Some(lon)) = (table.frame.col("lat"), table.frame.col("lon")) {
            for row in &table.frame.rows {
                let la = row.get(lat).and_then(|c| parse_number(c));
                let lo = row.get(lon).and_then(|c| parse_number(c));
                if let (Some(la), Some(lo)) = (la, lo) {
                    pts.push((la, lo));
                }
            }
        }
        logd!("Map: point cache rebuilt for {} ({} points)", table.category, pts.len());
        self.points = Some(PointsCache {
            category: table.category.clone(),
            key: table.key,
            pts,
        });
    }

    /// Recompute column statistics if the cached ones are for different
    /// content.
    pub fn ensure_stats(&mut self) {
        let Some(table) = self.tables.get(&self.active_category) else {
            self.stats = None;
            return;
        };
        let fresh = self
            .stats
            .as_ref()
            .map(|c| c.category == table.category && c.key == table.key)
            .unwrap_or(false);
        if fresh {
            return;
        }

        let f = &table.frame;
        let numeric = (0..f.ncols()).map(|ci| f.is_numeric_column(ci)).collect();
        logd!("Stats: recomputed for {}", table.category);
        self.stats = Some(StatsCache {
            category: table.category.clone(),
            key: table.key,
            numeric,
            describe: frame::describe(f),
            nulls: frame::null_counts(f),
        });
    }

    /// Predict a crash location, training first when the cached model
    /// doesn't match the active table's content key.
    pub fn predict(&mut self, day: u32, month: u32, hour: f32) -> Result<(f64, f64), Box<dyn Error>> {
        let Some(table) = self.tables.get(&self.active_category) else {
            return Err(format!("No local data for {}", self.active_category).into());
        };

        let stale = self.model.as_ref().map(|m| m.key != table.key).unwrap_or(true);
        if stale {
            logf!("Model: training for {} (key {:016x})", table.category, table.key);
            let mut rng = StdRng::from_entropy();
            let mut prog = GuiProgress::new(self.status.clone());
            let trained = model::train(&table.frame, table.key, &mut rng, Some(&mut prog))?;
            self.model = Some(trained);
        }

        match self.model.as_ref() {
            Some(m) => Ok(m.predict(day as f64, month as f64, hour as f64)),
            None => Err("Model unavailable".into()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        eframe::egui::SidePanel::left("categories")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::category_panel::draw(ui, self);
            });

        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::tabs::draw(ui, self);

            ui.separator();

            crate::gui::components::action_bar::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
