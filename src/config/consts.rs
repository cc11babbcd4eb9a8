// src/config/consts.rs

// Net config
pub const CATALOG_URL: &str = "https://www.data.gouv.fr/fr/datasets/bases-de-donnees-annuelles-des-accidents-corporels-de-la-circulation-routiere-annees-de-2005-a-2022/";
pub const USER_AGENT: &str = concat!("baac_scope/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Catalog
// Labels as they appear in the published file names, misspelling included.
pub const CATEGORIES: [&str; 4] = ["usagers", "vehicules", "lieux", "carcteristiques"];
pub const FILE_EXT: &str = "csv";
pub const STEM_SEP: char = '-';

// Local data
pub const DATA_DIR: &str = "data";
pub const DATA_SEP: char = ';';

// Export
pub const DEFAULT_OUT_DIR: &str = "out";

// Dashboard
pub const DEFAULT_CATEGORY: &str = "carcteristiques";
pub const PREVIEW_ROWS: usize = 100;
pub const HIST_BINS: usize = 20;

// Model
pub const MODEL_FEATURES: [&str; 3] = ["jour", "mois", "hrmn"];
pub const MODEL_TARGETS: [&str; 2] = ["lat", "lon"];
pub const MODEL_HIDDEN: [usize; 2] = [128, 64];
pub const MODEL_DROPOUT: f64 = 0.1;
pub const MODEL_EPOCHS: usize = 20;
pub const MODEL_BATCH: usize = 32;
pub const MODEL_VALIDATION_SPLIT: f64 = 0.2;
pub const MODEL_LEARNING_RATE: f64 = 1e-3;
pub const MODEL_MIN_ROWS: usize = 32;
