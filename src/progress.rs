// src/progress.rs
/// Lightweight progress reporting used by long-running operations
/// (fetch, model training). Frontends (GUI/CLI) implement this to
/// surface status to users.
pub trait Progress {
    /// Called at the start with the number of downloads ahead (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One category finished downloading. `detail` is the file name.
    fn item_done(&mut self, _category: &str, _detail: &str) {}

    /// One category failed. `detail` says why. Never aborts the rest.
    fn item_failed(&mut self, _category: &str, _detail: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
