// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_STEM;
use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::write_records;
use crate::extract::DoctorRecord;
use crate::filter::FilterCriteria;

/// `doctors[_<sector>][_visio].<ext>`
pub fn file_name_for(criteria: &FilterCriteria, format: ExportFormat) -> String {
    let mut stem = s!(DEFAULT_STEM);
    if let Some(slug) = criteria.sector.slug() {
        stem.push('_');
        stem.push_str(slug);
    }
    if criteria.video_only {
        stem.push_str("_visio");
    }
    format!("{stem}.{}", format.ext())
}

/// Write `records` to `<out_dir>/<file_name_for(criteria)>`, header first.
/// Returns the final path written to.
pub fn export_records(
    records: &[DoctorRecord],
    export: &ExportOptions,
    criteria: &FilterCriteria,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = normalize_dir_path(&export.out_dir.to_string_lossy());
    ensure_directory(&dir)?;
    let path = dir.join(file_name_for(criteria, export.format));
    write_records_to(&path, records, export)?;
    Ok(path)
}

/// Create/truncate `path` and write the records. Parent dirs are created.
pub fn write_records_to(
    path: &Path,
    records: &[DoctorRecord],
    export: &ExportOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_records(&mut out, records, export.columns, export.format.delim())?;
    out.flush()?;
    Ok(())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn normalize_dir_path(p: &str) -> PathBuf {
    if p.trim().is_empty() {
        return PathBuf::from(crate::config::consts::DEFAULT_OUT_DIR);
    }
    PathBuf::from(normalize_separators(p))
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
