// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Source mode toggle in the search panel
    pub use_snapshot: bool,
    pub snapshot_path_text: String,

    /// Results table: show the raw availability text column
    pub show_availability: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            use_snapshot: false,
            snapshot_path_text: s!(),
            show_availability: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// GUI runs keep results in memory and export on demand.
    pub fn for_gui() -> Self {
        let mut state = Self::default();
        state.options.export.auto_export = false;
        state
    }
}
