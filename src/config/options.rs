// src/config/options.rs
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::consts::*;
pub use crate::filter::{FilterCriteria, SectorFilter};

/// Everything a run needs, collected once before it starts.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: Source,
    pub search: SearchOptions,
    pub filter: FilterCriteria,
    pub browser: BrowserOptions,
    pub export: ExportOptions,
}

/// Where the results page comes from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Source {
    /// Drive a real browser through the site's search form.
    #[default]
    Live,
    /// Read a results page saved to disk.
    Snapshot(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    pub base_url: String,
    pub speciality: String,
    pub location: String,
    /// Only the first `limit` cards are read.
    pub limit: usize,
    pub pace: Pace,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            speciality: s!(),
            location: s!(),
            limit: MAX_CARDS,
            pace: Pace::default(),
        }
    }
}

/// Pauses that let the live page settle between form steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pace {
    pub after_load: Duration,
    pub after_typing: Duration,
    pub after_submit: Duration,
}

impl Default for Pace {
    fn default() -> Self {
        Self {
            after_load: SETTLE_AFTER_LOAD,
            after_typing: SETTLE_AFTER_TYPING,
            after_submit: SETTLE_AFTER_SUBMIT,
        }
    }
}

impl Pace {
    pub fn none() -> Self {
        Self { after_load: Duration::ZERO, after_typing: Duration::ZERO, after_submit: Duration::ZERO }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BrowserKind {
    #[default]
    Chrome,
    Firefox,
}

impl BrowserKind {
    pub fn label(self) -> &'static str {
        match self { BrowserKind::Chrome => "Chrome", BrowserKind::Firefox => "Firefox" }
    }
    pub fn driver_binary(self) -> &'static str {
        match self { BrowserKind::Chrome => "chromedriver", BrowserKind::Firefox => "geckodriver" }
    }
    pub fn default_webdriver_url(self) -> &'static str {
        match self { BrowserKind::Chrome => CHROMEDRIVER_URL, BrowserKind::Firefox => GECKODRIVER_URL }
    }
}

impl FromStr for BrowserKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome" | "chromium" => Ok(BrowserKind::Chrome),
            "firefox" => Ok(BrowserKind::Firefox),
            other => Err(format!("Unknown browser: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrowserOptions {
    pub kind: BrowserKind,
    pub webdriver_url: String,
    pub headless: bool,
    pub user_agent: String,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        let kind = BrowserKind::default();
        Self {
            kind,
            webdriver_url: s!(kind.default_webdriver_url()),
            headless: false,
            user_agent: s!(USER_AGENT),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

/// Which columns a file carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Columns {
    /// `name,specialty,address,sector,availability,videoAvailable`
    #[default]
    Full,
    /// Same without `videoAvailable`.
    WithoutVideo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub columns: Columns,
    /// Directory; the file name is derived from the filter criteria.
    pub out_dir: PathBuf,
    /// Write the file at the end of a run (CLI). The GUI exports on demand.
    pub auto_export: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            columns: Columns::Full,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            auto_export: true,
        }
    }
}
