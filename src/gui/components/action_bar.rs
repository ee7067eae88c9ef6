// src/gui/components/action_bar.rs

use eframe::egui;
use crate::{
    config::options::{Columns, ExportFormat},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;
        let before = (export.format, export.columns);

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.separator();

            let mut with_video = export.columns == Columns::Full;
            if ui.checkbox(&mut with_video, "videoAvailable column").changed() {
                export.columns = if with_video { Columns::Full } else { Columns::WithoutVideo };
            }
        });

        if (export.format, export.columns) != before {
            logf!(app.log, "UI: Export format → {:?}, columns → {:?}", export.format, export.columns);
        }
    }

    ui.horizontal(|ui| {
        ui.label("Output dir:");
        ui.add(egui::TextEdit::singleline(&mut app.out_dir_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(220.0));

        let idle = !app.running();
        if ui.add_enabled(idle, egui::Button::new("Copy")).clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if ui.add_enabled(idle, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });

    ui.label(app.status_text());
}
