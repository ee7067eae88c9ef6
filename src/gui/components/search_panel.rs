// src/gui/components/search_panel.rs
//
// Left panel: the run configuration (search terms, filters, source) and the
// Run button. Writes straight into `app.state.options`.

use eframe::egui;
use crate::{
    config::options::{BrowserKind, SectorFilter},
    gui::app::App,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.running();
    ui.heading("Search");

    ui.add_enabled_ui(!running, |ui| {
        let search = &mut app.state.options.search;
        egui::Grid::new("search_terms").num_columns(2).show(ui, |ui| {
            ui.label("Speciality:");
            ui.text_edit_singleline(&mut search.speciality);
            ui.end_row();

            ui.label("Location:");
            ui.text_edit_singleline(&mut search.location);
            ui.end_row();

            ui.label("Max cards:");
            ui.add(egui::DragValue::new(&mut search.limit).range(1..=200));
            ui.end_row();
        });

        ui.separator();
        ui.label("Filters");

        let filter = &mut app.state.options.filter;
        let before = *filter;
        egui::ComboBox::from_id_salt("sector_filter")
            .selected_text(filter.sector.label())
            .show_ui(ui, |ui| {
                for sector in SectorFilter::ALL {
                    ui.selectable_value(&mut filter.sector, sector, sector.label());
                }
            });
        ui.checkbox(&mut filter.video_only, "Video consultation only");
        if *filter != before {
            logd!(app.log, "UI: filter → {:?}", filter);
        }

        ui.separator();
        ui.label("Source");

        let gui = &mut app.state.gui;
        ui.horizontal(|ui| {
            ui.selectable_value(&mut gui.use_snapshot, false, "Browser");
            ui.selectable_value(&mut gui.use_snapshot, true, "Saved page");
        });

        if gui.use_snapshot {
            ui.horizontal(|ui| {
                ui.label("HTML file:");
                ui.add(egui::TextEdit::singleline(&mut gui.snapshot_path_text)
                    .font(egui::TextStyle::Monospace));
            });
        } else {
            let browser = &mut app.state.options.browser;
            let before = browser.kind;
            ui.horizontal(|ui| {
                ui.selectable_value(&mut browser.kind, BrowserKind::Chrome, BrowserKind::Chrome.label());
                ui.selectable_value(&mut browser.kind, BrowserKind::Firefox, BrowserKind::Firefox.label());
            });
            if browser.kind != before && browser.webdriver_url == before.default_webdriver_url() {
                browser.webdriver_url = s!(browser.kind.default_webdriver_url());
            }
            ui.horizontal(|ui| {
                ui.label("WebDriver:");
                ui.add(egui::TextEdit::singleline(&mut browser.webdriver_url)
                    .font(egui::TextStyle::Monospace));
            });
            ui.checkbox(&mut browser.headless, "Headless")
                .on_hover_text(format!("Needs {} running", browser.kind.driver_binary()));
        }
    });

    ui.separator();

    let label = if running { "Running…" } else { "Run" };
    if ui.add_enabled(!running, egui::Button::new(label)).clicked() {
        let ctx = ui.ctx().clone();
        crate::gui::actions::run(app, &ctx);
    }
}
