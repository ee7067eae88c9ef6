// src/gui/actions/run.rs
use std::{path::PathBuf, sync::mpsc, thread};

use eframe::egui;

use crate::{
    config::options::Source,
    gui::{app::App, progress::GuiProgress},
    runner::{self, Outcome},
    store,
};

/// Start a run on a worker thread. One run at a time.
pub fn run(app: &mut App, ctx: &egui::Context) {
    if app.running() {
        return;
    }

    let mut opts = app.state.options.clone();
    let gui = &app.state.gui;
    opts.source = if gui.use_snapshot {
        let path = gui.snapshot_path_text.trim();
        if path.is_empty() {
            app.status("Pick a saved results page first");
            return;
        }
        Source::Snapshot(PathBuf::from(path))
    } else {
        if opts.search.speciality.trim().is_empty() || opts.search.location.trim().is_empty() {
            app.status("Speciality and location are required");
            return;
        }
        Source::Live
    };

    logf!(
        app.log,
        "Run: Begin speciality=`{}` location=`{}` filter={:?}",
        opts.search.speciality,
        opts.search.location,
        opts.filter
    );
    app.status("Starting…");

    let filter = opts.filter;
    let (tx, rx) = mpsc::channel();
    let log = app.log.clone();
    let mut progress = GuiProgress::new(app.status.clone(), ctx.clone());
    let ctx = ctx.clone();

    let spawned = thread::Builder::new()
        .name(s!("scrape"))
        .spawn(move || {
            let result = runner::run(&opts, &log, &mut progress).map_err(|e| e.to_string());
            let _ = tx.send((filter, result));
            ctx.request_repaint();
        });

    match spawned {
        Ok(_) => app.pending = Some(rx),
        Err(e) => {
            loge!(app.log, "Run: Could not start worker: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}

/// Pick up a finished run, if any. Called every frame.
pub fn poll(app: &mut App) {
    let Some(rx) = &app.pending else { return };
    let (filter, result) = match rx.try_recv() {
        Ok(done) => done,
        Err(mpsc::TryRecvError::Empty) => return,
        Err(mpsc::TryRecvError::Disconnected) => {
            (app.state.options.filter, Err(s!("worker stopped unexpectedly")))
        }
    };
    app.pending = None;

    match result {
        Ok(summary) => {
            logf!(
                app.log,
                "Run: OK outcome={:?} cards={} extracted={} accepted={}",
                summary.outcome,
                summary.cards_found,
                summary.extracted,
                summary.records.len()
            );
            match summary.outcome {
                Outcome::NoResults => app.status("No results found"),
                Outcome::NoRecords => app.status(format!(
                    "No doctor matched the criteria ({} read)",
                    summary.extracted
                )),
                Outcome::Done => {
                    if let Err(e) = store::save_records(&summary.records) {
                        loge!(app.log, "Cache: Save failed: {}", e);
                    }
                    app.status(format!(
                        "{} doctors ({} cards read, {} skipped)",
                        summary.records.len(),
                        summary.cards_found.min(app.state.options.search.limit),
                        summary.skipped
                    ));
                }
            }
            app.records = summary.records;
            app.records_filter = filter;
        }
        Err(e) => {
            loge!(app.log, "Run: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
