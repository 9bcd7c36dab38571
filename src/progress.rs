// src/progress.rs
/// Lightweight progress reporting used by the refresh pipeline.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One source fetched and extracted.
    fn item_done(&mut self, _source: &str, _entries: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
