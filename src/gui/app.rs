// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    extract::DoctorRecord,
    filter::FilterCriteria,
    log::{Level, RunLog},
    runner::RunSummary,
    store,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Doctolib Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::for_gui())))),
    )?;
    Ok(())
}

/// What the worker hands back when a run ends, with the criteria it ran under.
pub type RunResult = (FilterCriteria, Result<RunSummary, String>);

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output dir text field (mapped into ExportOptions on export)
    pub out_dir_text: String,

    // results of the last run, or the cached ones at startup
    pub records: Vec<DoctorRecord>,
    // criteria `records` were filtered with (names the export file)
    pub records_filter: FilterCriteria,

    // shared with the worker
    pub log: Arc<RunLog>,
    pub status: Arc<Mutex<String>>,

    // Some while a run is in flight
    pub pending: Option<Receiver<RunResult>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let log = match RunLog::to_file(&store::log_path(), Level::Debug, false) {
            Ok(log) => log,
            Err(e) => {
                eprintln!("Log file unavailable ({e}); logging to stderr");
                RunLog::stderr(Level::Info)
            }
        };

        let mut status = s!("Idle");
        let records = match store::load_records() {
            Ok(v) if !v.is_empty() => {
                logf!(log, "Cache: Loaded {} record(s) from last run", v.len());
                status = format!("Loaded {} doctors from last run", v.len());
                v
            }
            Ok(_) => Vec::new(),
            Err(e) => {
                loge!(log, "Cache: Unreadable ({}), ignoring", e);
                Vec::new()
            }
        };

        let out_dir_text = state.options.export.out_dir.to_string_lossy().into_owned();

        Self {
            state,
            out_dir_text,
            records,
            records_filter: FilterCriteria::default(),
            log: Arc::new(log),
            status: Arc::new(Mutex::new(status)),
            pending: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn running(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll(self);

        egui::SidePanel::left("search")
            .resizable(false)
            .show(ctx, |ui| {
                super::components::search_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::action_bar::draw(ui, self);

            ui.separator();

            super::components::results_table::draw(ui, self);
        });
    }
}
