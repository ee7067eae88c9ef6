// src/gui/components/results_table.rs
//
// Read-only view of `app.records`. One row per doctor, page order.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.records.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No results yet").weak());
        });
        return;
    }

    let show_availability = app.state.gui.show_availability;
    ui.checkbox(&mut app.state.gui.show_availability, "Show availability");

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(200.0).at_least(80.0).clip(true))   // name
        .column(Column::initial(160.0).at_least(60.0).clip(true))   // specialty
        .column(Column::initial(240.0).at_least(80.0).clip(true))   // address
        .column(Column::initial(160.0).at_least(60.0).clip(true));  // sector
    if show_availability {
        table = table.column(Column::initial(200.0).at_least(60.0).clip(true));
    }
    table = table.column(Column::remainder().at_least(50.0));        // video

    table
        .header(ROW_H, |mut header| {
            let mut title = |t: &str| {
                header.col(|ui| { ui.strong(t); });
            };
            title("Name");
            title("Specialty");
            title("Address");
            title("Sector");
            if show_availability { title("Availability"); }
            title("Video");
        })
        .body(|body| {
            body.rows(ROW_H, app.records.len(), |mut row| {
                let Some(rec) = app.records.get(row.index()) else { return };
                let mut cell = |t: &str| {
                    row.col(|ui| { ui.label(t).on_hover_text(t); });
                };
                cell(&rec.name);
                cell(&rec.specialty);
                cell(&rec.address);
                cell(&rec.sector);
                if show_availability { cell(&rec.availability); }
                cell(if rec.video_available { "yes" } else { "" });
            });
        });
}
