// tests/export.rs
//
// Persistence: file naming, header variants, last-run cache round trip.
//
mod common;

use std::fs;

use common::tmp_dir;
use medic_scrape::config::options::{Columns, ExportFormat, ExportOptions};
use medic_scrape::csv::{parse_records, records_to_string};
use medic_scrape::extract::DoctorRecord;
use medic_scrape::file::export_records;
use medic_scrape::filter::{FilterCriteria, SectorFilter};
use medic_scrape::store::{load_records_at, save_records_at};

fn doctor(name: &str, address: &str, video: bool) -> DoctorRecord {
    DoctorRecord {
        name: name.into(),
        specialty: "Médecin généraliste".into(),
        address: address.into(),
        sector: "Secteur 1".into(),
        availability: "Prochaine disponibilité: jeudi".into(),
        video_available: video,
    }
}

#[test]
fn export_creates_missing_dir_and_names_file() {
    let root = tmp_dir("export_dir");
    let export = ExportOptions { out_dir: root.join("nested/out"), ..ExportOptions::default() };
    let criteria = FilterCriteria { sector: SectorFilter::Sector2, video_only: true };

    let path = export_records(&[doctor("Dr. A", "1 rue B", true)], &export, &criteria).unwrap();

    assert_eq!(path, root.join("nested/out").join("doctors_secteur2_visio.csv"));
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("name,specialty,address,sector,availability,videoAvailable\n"));
    assert!(text.ends_with(",true\n"));
}

#[test]
fn export_over_a_file_path_fails() {
    let root = tmp_dir("export_blocked");
    let blocker = root.join("taken");
    fs::write(&blocker, "x").unwrap();
    let export = ExportOptions { out_dir: blocker, ..ExportOptions::default() };

    assert!(export_records(&[doctor("Dr. A", "", false)], &export, &FilterCriteria::default()).is_err());
}

#[test]
fn header_only_when_no_video_column() {
    let txt = records_to_string(&[doctor("Dr. A", "", false)], Columns::WithoutVideo, ',');
    let first = txt.lines().next().unwrap();
    assert_eq!(first, "name,specialty,address,sector,availability");
    assert_eq!(txt.lines().nth(1).unwrap().split(',').count(), 5);
}

#[test]
fn quoting_survives_parse() {
    let records = vec![doctor("Dr. \"Doc\" A", "3, place X", false), doctor("Dr. B", "", true)];
    let txt = records_to_string(&records, Columns::Full, ',');
    assert_eq!(parse_records(&txt, ','), records);

    let tsv = records_to_string(&records, Columns::Full, ExportFormat::Tsv.delim());
    assert_eq!(parse_records(&tsv, '\t'), records);
}

#[test]
fn cache_round_trip_and_missing_cache() {
    let dir = tmp_dir("cache");
    let path = dir.join(".store").join("doctors.csv");

    assert!(load_records_at(&path).unwrap().is_empty());

    let records = vec![doctor("Dr. A", "1 rue B 75001", true), doctor("Dr. C", "", false)];
    save_records_at(&path, &records).unwrap();
    assert_eq!(load_records_at(&path).unwrap(), records);
}
