// src/filter.rs
//! Post-extraction filtering. Pure, stable: accepted records keep their order.

use std::fmt;
use std::str::FromStr;

use crate::core::sanitize::fold;
use crate::extract::DoctorRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum SectorFilter {
    #[default]
    Any,
    Sector1,
    Sector2,
    NonContracted,
}

impl SectorFilter {
    pub const ALL: [SectorFilter; 4] =
        [SectorFilter::Any, SectorFilter::Sector1, SectorFilter::Sector2, SectorFilter::NonContracted];

    /// Case-folded substrings, any of which marks a matching sector text.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            SectorFilter::Any => &[],
            SectorFilter::Sector1 => &["secteur 1", "secteur1"],
            SectorFilter::Sector2 => &["secteur 2", "secteur2"],
            SectorFilter::NonContracted => &["non conventionné", "non-conventionné"],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectorFilter::Any => "Tous secteurs",
            SectorFilter::Sector1 => "Secteur 1",
            SectorFilter::Sector2 => "Secteur 2",
            SectorFilter::NonContracted => "Non conventionné",
        }
    }

    /// File-name fragment; `None` for `Any`.
    pub fn slug(self) -> Option<&'static str> {
        match self {
            SectorFilter::Any => None,
            SectorFilter::Sector1 => Some("secteur1"),
            SectorFilter::Sector2 => Some("secteur2"),
            SectorFilter::NonContracted => Some("non_conventionne"),
        }
    }

    pub fn matches(self, sector: &str) -> bool {
        if self == SectorFilter::Any {
            return true;
        }
        let folded = fold(sector);
        self.markers().iter().any(|m| folded.contains(m))
    }
}

impl fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SectorFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "any" | "all" | "tous" => Ok(SectorFilter::Any),
            "1" | "s1" | "secteur1" | "secteur 1" => Ok(SectorFilter::Sector1),
            "2" | "s2" | "secteur2" | "secteur 2" => Ok(SectorFilter::Sector2),
            "nc" | "non-conventionne" | "non-conventionné" | "non conventionné" | "non_conventionne" => {
                Ok(SectorFilter::NonContracted)
            }
            other => Err(format!("Unknown sector filter: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct FilterCriteria {
    pub sector: SectorFilter,
    pub video_only: bool,
}

impl FilterCriteria {
    pub fn accepts(&self, record: &DoctorRecord) -> bool {
        record.is_valid()
            && self.sector.matches(&record.sector)
            && (!self.video_only || record.video_available)
    }

    pub fn is_pass_through(&self) -> bool {
        self.sector == SectorFilter::Any && !self.video_only
    }
}

/// Records accepted by `criteria`, in their original order.
pub fn filter(records: Vec<DoctorRecord>, criteria: &FilterCriteria) -> Vec<DoctorRecord> {
    records.into_iter().filter(|r| criteria.accepts(r)).collect()
}
