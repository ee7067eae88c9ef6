// src/extract/record.rs
//! One result card → one [`DoctorRecord`].

use thiserror::Error;

use super::fields::{self, FieldLabel, FieldMap, TextFragment};
use super::video;
use crate::locator::{LocatorChain, MalformedQuery};
use crate::log::RunLog;
use crate::session::{Scope, Session, SessionError};
use crate::specs::results_page::{ADDRESS_HINTS, FRAGMENTS, NAME, SPECIALTY_HINTS};

pub const HEADERS: [&str; 6] = ["name", "specialty", "address", "sector", "availability", "videoAvailable"];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DoctorRecord {
    pub name: String,
    pub specialty: String,
    pub address: String,
    pub sector: String,
    pub availability: String,
    pub video_available: bool,
}

impl DoctorRecord {
    /// Only records with a name are kept anywhere.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Merge classifier output into a record. `None` if the name is empty.
    pub fn from_parts(
        name: &str,
        specialty: Option<String>,
        mut fields: FieldMap,
        video_available: bool,
    ) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let mut take = |label| fields.remove(&label).unwrap_or_default();
        Some(Self {
            name: s!(name),
            specialty: specialty.unwrap_or_default(),
            address: take(FieldLabel::Address),
            sector: take(FieldLabel::Sector),
            availability: take(FieldLabel::Availability),
            video_available,
        })
    }

    /// Cells in [`HEADERS`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.specialty.clone(),
            self.address.clone(),
            self.sector.clone(),
            self.availability.clone(),
            self.video_available.to_string(),
        ]
    }

    /// Inverse of [`DoctorRecord::to_row`]; tolerates the narrower 5-column shape.
    pub fn from_row(row: &[String]) -> Option<Self> {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        let rec = Self {
            name: cell(0),
            specialty: cell(1),
            address: cell(2),
            sector: cell(3),
            availability: cell(4),
            video_available: row.get(5).is_some_and(|v| v.trim().eq_ignore_ascii_case("true")),
        };
        rec.is_valid().then_some(rec)
    }
}

/// Faults while reading one card.
#[derive(Debug, Error)]
pub enum CardError {
    #[error(transparent)]
    Malformed(#[from] MalformedQuery),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Assemble one card. `Ok(None)` when the card yields no name or when reading
/// the name failed; a broken card never aborts the batch. An unreadable
/// fragment or hint is skipped and the rest of the record is kept. Only a
/// malformed selector table escapes as an error.
pub fn assemble<S: Session>(
    session: &S,
    card: &S::Node,
    log: &RunLog,
) -> Result<Option<DoctorRecord>, MalformedQuery> {
    match read_card(session, card, log) {
        Ok(Some(rec)) => Ok(Some(rec)),
        Ok(None) => {
            logw!(log, "card: no name found, skipped");
            Ok(None)
        }
        Err(CardError::Malformed(e)) => Err(e),
        Err(CardError::Session(e)) => {
            loge!(log, "card: extraction failed: {}", e);
            Ok(None)
        }
    }
}

fn read_card<S: Session>(
    session: &S,
    card: &S::Node,
    log: &RunLog,
) -> Result<Option<DoctorRecord>, CardError> {
    let scope = Scope::Within(card);

    let name = read_name(session, card, log)?;
    if name.is_empty() {
        return Ok(None);
    }

    let paragraphs = read_fragments(session, &FRAGMENTS, scope, log)?;
    let mut fields = fields::classify(&paragraphs);

    if !fields.contains_key(&FieldLabel::Address) {
        let hints = read_fragments(session, &ADDRESS_HINTS, scope, log)?;
        if let Some(addr) = fields::first_address_hint(&hints) {
            fields.insert(FieldLabel::Address, addr);
        }
    }

    let specialty_hints = read_fragments(session, &SPECIALTY_HINTS, scope, log)?;
    let specialty = fields::first_specialty(&specialty_hints);

    let video_available = video::detect_video(session, card, log)?;

    Ok(DoctorRecord::from_parts(&name, specialty, fields, video_available))
}

/// Name: walk the strategies in order, first element with non-empty text wins.
/// One chain row per lookup so an empty heading falls through to the next row.
fn read_name<S: Session>(
    session: &S,
    card: &S::Node,
    log: &RunLog,
) -> Result<String, CardError> {
    for strategy in NAME.strategies {
        let single = LocatorChain {
            strategies: std::slice::from_ref(strategy),
            ..NAME
        };
        let found = single.locate(session, Scope::Within(card), &RunLog::silent())?;
        if let Some(first) = found.nodes.first() {
            let text = session.text(first)?;
            let text = text.trim();
            if !text.is_empty() {
                logd!(log, "name: `{}` via `{}`", text, strategy.name);
                return Ok(s!(text));
            }
        }
    }
    logw!(log, "{}: no strategy yielded text ({} tried)", NAME.name, NAME.strategies.len());
    Ok(s!())
}

fn read_fragments<S: Session>(
    session: &S,
    chain: &LocatorChain,
    scope: Scope<'_, S::Node>,
    log: &RunLog,
) -> Result<Vec<TextFragment>, MalformedQuery> {
    let found = chain.locate(session, scope, log)?;
    let mut out = Vec::with_capacity(found.nodes.len());
    for node in &found.nodes {
        match read_fragment(session, node) {
            Ok(fragment) => out.push(fragment),
            Err(e) => logd!(log, "{}: fragment skipped: {}", chain.name, e),
        }
    }
    Ok(out)
}

pub fn read_fragment<S: Session>(
    session: &S,
    node: &S::Node,
) -> Result<TextFragment, SessionError> {
    Ok(TextFragment {
        text: session.text(node)?,
        tag: session.tag_name(node)?,
        aria_label: session.attr(node, "aria-label")?,
        title: session.attr(node, "title")?,
        class: session.attr(node, "class")?,
        visible: session.is_displayed(node)?,
    })
}
