// src/extract/mod.rs
//! Card → record extraction: field classifier, video heuristic, assembler.

pub mod fields;
pub mod record;
pub mod video;

pub use fields::{FieldLabel, FieldMap, TextFragment, classify};
pub use record::{DoctorRecord, HEADERS, assemble};
pub use video::{IconInfo, detect_video};
