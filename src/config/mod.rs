// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod state;

pub use options::{ AppOptions, DataSection, ExportFormat, ExportOptions, FetchOptions, ViewKind };
pub use state::{ AppState, GuiState };
