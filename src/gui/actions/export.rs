// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    if app.records.is_empty() {
        logd!(app.log, "Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    let export = super::export_options(app);
    let criteria = app.records_filter;
    logf!(
        app.log,
        "Export: Begin rows={}, dir={}, format={:?}",
        app.records.len(),
        export.out_dir.display(),
        export.format
    );

    let msg = match file::export_records(&app.records, &export, &criteria) {
        Ok(path) => {
            logf!(app.log, "Export: OK {}", path.display());
            app.state.options.export.out_dir = export.out_dir;
            format!("Exported {} doctors to {}", app.records.len(), path.display())
        }
        Err(e) => {
            loge!(app.log, "Export: Failed: {}", e);
            format!("Export failed: {e}")
        }
    };
    app.status(msg);
}
