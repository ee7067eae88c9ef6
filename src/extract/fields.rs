// src/extract/fields.rs
//! Heuristic field classifier.
//!
//! A card shows its address, sector and next availability as unlabeled
//! paragraphs. Each paragraph is matched against a priority-ordered rule table
//! (first matching rule wins, one label per fragment). Rules only look at text,
//! so everything here runs without a DOM.
//!
//! Same-label matches overwrite: when two paragraphs both look like a sector,
//! the later one is kept. Postal codes are the exception and append to a
//! street address.

use std::collections::BTreeMap;

use crate::core::sanitize::{contains_any_folded, strip_spaces};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldLabel {
    Name,
    Specialty,
    Address,
    Sector,
    Availability,
    Unclassified,
}

/// Visible text of one leaf inside a card plus the attributes that came with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFragment {
    pub text: String,
    pub tag: String,
    pub aria_label: Option<String>,
    pub title: Option<String>,
    pub class: Option<String>,
    pub visible: bool,
}

impl TextFragment {
    /// A visible `<p>` with no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: s!("p"),
            aria_label: None,
            title: None,
            class: None,
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Trimmed text, or `None` when there is nothing to classify.
    fn usable_text(&self) -> Option<&str> {
        let t = self.text.trim();
        (self.visible && !t.is_empty()).then_some(t)
    }
}

pub type FieldMap = BTreeMap<FieldLabel, String>;

/* ---------------- Rule table ---------------- */

const SECTOR_WORDS: &[&str] = &["secteur", "€", "conventionné"];
const AVAILABILITY_WORDS: &[&str] = &["disponibilité", "disponible", "prochaine"];
const STREET_TOKENS: &[&str] = &["rue", "avenue", "boulevard", "place", "chemin", "allée"];
const SPECIALTY_MARKER: &str = "Médecin";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Merge {
    Overwrite,
    /// Space-join onto an existing value, else set.
    Append,
}

struct Rule {
    label: FieldLabel,
    matches: fn(&str) -> bool,
    merge: Merge,
}

static RULES: &[Rule] = &[
    Rule { label: FieldLabel::Sector, matches: is_sector, merge: Merge::Overwrite },
    Rule { label: FieldLabel::Availability, matches: is_availability, merge: Merge::Overwrite },
    Rule { label: FieldLabel::Address, matches: has_street_token, merge: Merge::Overwrite },
    Rule { label: FieldLabel::Address, matches: is_postal_code, merge: Merge::Append },
];

fn is_sector(text: &str) -> bool {
    contains_any_folded(text, SECTOR_WORDS)
}

fn is_availability(text: &str) -> bool {
    contains_any_folded(text, AVAILABILITY_WORDS)
}

fn has_street_token(text: &str) -> bool {
    contains_any_folded(text, STREET_TOKENS)
}

/// Five ASCII digits once spaces are removed ("75001", "75 001").
pub fn is_postal_code(text: &str) -> bool {
    let compact = strip_spaces(text);
    compact.len() == 5 && compact.bytes().all(|b| b.is_ascii_digit())
}

fn rule_for(text: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| (r.matches)(text))
}

/// Label the first matching rule would give `text`.
pub fn label_of(text: &str) -> FieldLabel {
    rule_for(text.trim()).map(|r| r.label).unwrap_or(FieldLabel::Unclassified)
}

/* ---------------- Passes ---------------- */

/// Main pass over a card's paragraphs, in DOM order.
pub fn classify(fragments: &[TextFragment]) -> FieldMap {
    let mut fields = FieldMap::new();

    for text in fragments.iter().filter_map(TextFragment::usable_text) {
        let Some(rule) = rule_for(text) else { continue };
        match rule.merge {
            Merge::Overwrite => {
                fields.insert(rule.label, s!(text));
            }
            Merge::Append => {
                fields
                    .entry(rule.label)
                    .and_modify(|v| {
                        v.push(' ');
                        v.push_str(text);
                    })
                    .or_insert_with(|| s!(text));
            }
        }
    }

    fields
}

/// Address fallback: first hint whose text is not purely numeric.
pub fn first_address_hint(fragments: &[TextFragment]) -> Option<String> {
    fragments
        .iter()
        .filter_map(TextFragment::usable_text)
        .find(|t| !t.chars().all(|c| c.is_ascii_digit()))
        .map(String::from)
}

/// Specialty: first hint mentioning "Médecin".
pub fn first_specialty(fragments: &[TextFragment]) -> Option<String> {
    fragments
        .iter()
        .filter_map(TextFragment::usable_text)
        .find(|t| t.contains(SPECIALTY_MARKER))
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_priority_sector_before_address() {
        // "place" is a street token, but the sector rule is checked first
        assert_eq!(label_of("Conventionné secteur 1, place limitée"), FieldLabel::Sector);
        assert_eq!(label_of("Prochaine disponibilité rue X"), FieldLabel::Availability);
        assert_eq!(label_of("Dr. Jane Doe"), FieldLabel::Unclassified);
    }

    #[test]
    fn postal_codes() {
        assert!(is_postal_code("75001"));
        assert!(is_postal_code("75 001"));
        assert!(!is_postal_code("7500"));
        assert!(!is_postal_code("750011"));
        assert!(!is_postal_code("75O01"));
    }
}
