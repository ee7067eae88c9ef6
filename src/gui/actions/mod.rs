// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,run,poll}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod run;     // src/gui/actions/run.rs

pub use copy::copy;
pub use export::export;
pub use run::{poll, run};

use crate::{config::options::ExportOptions, gui::app::App};

/// Export options with the output field applied.
pub(super) fn export_options(app: &App) -> ExportOptions {
    let mut export = app.state.options.export.clone();
    export.out_dir = crate::file::normalize_dir_path(&app.out_dir_text);
    export
}
