// src/store.rs
//! Last-run cache under `.store/`, so the GUI opens on the previous results.
use std::{fs, io::{self, Write}, path::{Path, PathBuf}};

use crate::config::consts::{LAST_RUN_FILE, LOG_FILE, STORE_DIR};
use crate::config::options::Columns;
use crate::csv::{parse_records, write_records};
use crate::extract::DoctorRecord;

pub fn store_dir() -> PathBuf {
    PathBuf::from(STORE_DIR)
}

pub fn log_path() -> PathBuf {
    store_dir().join(LOG_FILE)
}

pub fn last_run_path() -> PathBuf {
    store_dir().join(LAST_RUN_FILE)
}

/// Overwrite the cache with `records` (always full columns, comma-separated).
pub fn save_records(records: &[DoctorRecord]) -> io::Result<()> {
    save_records_at(&last_run_path(), records)
}

pub fn save_records_at(path: &Path, records: &[DoctorRecord]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    write_records(&mut writer, records, Columns::Full, ',')?;
    writer.flush()
}

/// Cached records; empty if there is no cache yet.
pub fn load_records() -> io::Result<Vec<DoctorRecord>> {
    load_records_at(&last_run_path())
}

pub fn load_records_at(path: &Path) -> io::Result<Vec<DoctorRecord>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(parse_records(&text, ',')),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}
