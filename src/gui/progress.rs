// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use eframe::egui;
use crate::progress::Progress;

/// Worker-side progress: writes the status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Reading {total} result cards…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, index: usize) {
        self.done += 1;
        self.set_status(format!("Read card {} ({}/{})", index + 1, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, index: usize) {
        self.failed += 1;
        self.set_status(format!("Skipped card {} ({}/{})", index + 1, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        // the final status is set by the UI once the summary arrives
        self.ctx.request_repaint();
    }
}
