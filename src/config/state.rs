// src/config/state.rs
use super::options::{ AppOptions, DataSection };

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Data page → which sub-section is shown
    pub data_section: DataSection,

    /// Histograms page
    pub hist_column: Option<String>,
    pub hist_filter: bool,
    pub hist_day: u32,
    pub hist_month: u32,

    /// Predict page
    pub predict_day: u32,
    pub predict_month: u32,
    pub predict_hour: f32,
    pub last_prediction: Option<(f64, f64)>,

    /// Map camera, shared by both map views.
    /// `map_set` flips once the camera has been centered on data.
    pub map_lat: f64,
    pub map_lon: f64,
    pub map_zoom: f32,
    pub map_set: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            data_section: DataSection::Preview,
            hist_column: None,
            hist_filter: false,
            hist_day: 1,
            hist_month: 1,
            predict_day: 15,
            predict_month: 6,
            predict_hour: 12.0,
            last_prediction: None,
            // Metropolitan France until real data arrives
            map_lat: 46.6,
            map_lon: 2.5,
            map_zoom: 6.0,
            map_set: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
