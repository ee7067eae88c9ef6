// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, csv::records_to_string};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.records.is_empty() {
        app.status("Nothing to copy");
        logd!(app.log, "Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = super::export_options(app);
    let txt = records_to_string(&app.records, export.columns, export.format.delim());
    logf!(app.log, "Copy: rows={}, format={:?}, columns={:?}", app.records.len(), export.format, export.columns);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
