// src/progress.rs
/// Progress reporting for a scrape run. Frontends (GUI/CLI) implement this to
/// surface status to users; the engine never blocks on it.
pub trait Progress {
    /// Called once the cards are located, with how many will be read.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Card `index` produced a record.
    fn item_done(&mut self, _index: usize) {}

    /// Card `index` was skipped (no name, or reading it failed).
    fn item_failed(&mut self, _index: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints each step to stderr. Used by the CLI.
pub struct StderrProgress {
    total: usize,
    done: usize,
    failed: usize,
}

impl StderrProgress {
    pub fn new() -> Self {
        Self { total: 0, done: 0, failed: 0 }
    }
}

impl Default for StderrProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Reading {total} result cards…");
    }

    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn item_done(&mut self, index: usize) {
        self.done += 1;
        eprintln!("  [{}/{}] ok", index + 1, self.total);
    }

    fn item_failed(&mut self, index: usize) {
        self.failed += 1;
        eprintln!("  [{}/{}] skipped", index + 1, self.total);
    }

    fn finish(&mut self) {
        if self.total > 0 {
            eprintln!("{} extracted, {} skipped", self.done, self.failed);
        }
    }
}
