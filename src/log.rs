// src/log.rs
//! Per-run logger.
//!
//! One `RunLog` is built by the frontend at the start of a run and handed by
//! reference to every component that wants to report something. Nothing in
//! here is global: two runs get two logs.
//!
//! Lines look like `[00:00:01.250][WARN] msg`, the timestamp being the time
//! elapsed since the log was created.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

pub struct RunLog {
    start: Instant,
    min: Level,
    echo: bool,
    file: Option<Mutex<File>>,
    captured: Option<Mutex<Vec<String>>>,
}

impl RunLog {
    /// Append to `path` (parent dirs are created). `echo` mirrors lines to stderr.
    pub fn to_file(path: &Path, min: Level, echo: bool) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            start: Instant::now(),
            min,
            echo,
            file: Some(Mutex::new(file)),
            captured: None,
        })
    }

    pub fn stderr(min: Level) -> Self {
        Self { start: Instant::now(), min, echo: true, file: None, captured: None }
    }

    /// Drops everything.
    pub fn silent() -> Self {
        Self { start: Instant::now(), min: Level::Error, echo: false, file: None, captured: None }
    }

    /// Keeps lines in memory; see [`RunLog::lines`].
    pub fn capture(min: Level) -> Self {
        Self {
            start: Instant::now(),
            min,
            echo: false,
            file: None,
            captured: Some(Mutex::new(Vec::new())),
        }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min && (self.echo || self.file.is_some() || self.captured.is_some())
    }

    pub fn write(&self, level: Level, msg: &str) {
        if !self.enabled(level) {
            return;
        }
        let elapsed = fmt_elapsed(self.start.elapsed().as_millis());
        let line = format!("[{elapsed}][{}] {msg}", level.as_str());

        if self.echo {
            eprintln!("{line}");
        }
        if let Some(file) = &self.file {
            if let Ok(mut f) = file.lock() {
                let _ = writeln!(f, "{line}");
            }
        }
        if let Some(captured) = &self.captured {
            if let Ok(mut lines) = captured.lock() {
                lines.push(line);
            }
        }
    }

    /// Captured lines (empty unless built with [`RunLog::capture`]).
    pub fn lines(&self) -> Vec<String> {
        self.captured
            .as_ref()
            .and_then(|c| c.lock().ok().map(|l| l.clone()))
            .unwrap_or_default()
    }

    /// True if any captured line at `level` contains `needle`.
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        let tag = join!("[", level.as_str(), "]");
        self.lines().iter().any(|l| l.contains(&tag) && l.contains(needle))
    }
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($log:expr, $($arg:tt)*) => {
        $log.write($crate::log::Level::Debug, &format!($($arg)*))
    };
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($log:expr, $($arg:tt)*) => {
        $log.write($crate::log::Level::Info, &format!($($arg)*))
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($log:expr, $($arg:tt)*) => {
        $log.write($crate::log::Level::Warn, &format!($($arg)*))
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($log:expr, $($arg:tt)*) => {
        $log.write($crate::log::Level::Error, &format!($($arg)*))
    };
}
