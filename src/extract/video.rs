// src/extract/video.rs
//! Does this practitioner offer video consultations?
//!
//! Three independent probes, OR-ed, first hit wins:
//! 1. a visible icon carrying a video signature,
//! 2. a visible element whose `aria-label`/`title` mentions video,
//! 3. the card's whole visible text mentioning video.
//!
//! The predicates work on plain [`IconInfo`] values; only `detect_video` talks
//! to the session.

use crate::core::sanitize::contains_any_folded;
use crate::locator::{LocatorChain, MalformedQuery};
use crate::log::RunLog;
use crate::session::{Scope, Session, SessionError};
use crate::specs::results_page::{VIDEO_ICONS, VIDEO_LABELS};

const ICON_NAME_NEEDLE: &str = "video";
const CLASS_NEEDLE: &str = "video";
/// Geometry of the site's camera icon.
const VIDEO_VIEWBOX: &str = "0 0 16 16";
const LABEL_WORDS: &[&str] = &["vidéo", "video", "visio"];
const TEXT_WORDS: &[&str] = &["visio", "vidéo", "téléconsultation", "video"];

/// Attributes of one candidate icon element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconInfo {
    pub tag: String,
    pub icon_name: Option<String>,
    pub class: Option<String>,
    pub view_box: Option<String>,
    pub aria_label: Option<String>,
    pub title: Option<String>,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    IconSignature,
    IconLabel,
    CardText,
}

pub const PROBES: [Probe; 3] = [Probe::IconSignature, Probe::IconLabel, Probe::CardText];

/// Probe 1: visible icon whose icon name, class or geometry says "video".
pub fn icon_signature(icon: &IconInfo) -> bool {
    if !icon.visible {
        return false;
    }
    let named = icon
        .icon_name
        .as_deref()
        .is_some_and(|n| n.to_lowercase().contains(ICON_NAME_NEEDLE));
    let classed = icon
        .class
        .as_deref()
        .is_some_and(|c| c.to_lowercase().contains(CLASS_NEEDLE));
    let shaped = icon.tag.eq_ignore_ascii_case("svg")
        && icon.view_box.as_deref().map(str::trim) == Some(VIDEO_VIEWBOX);
    named || classed || shaped
}

/// Probe 2: visible element whose accessible label or tooltip mentions video.
pub fn icon_label(icon: &IconInfo) -> bool {
    if !icon.visible {
        return false;
    }
    let label = join!(
        icon.aria_label.as_deref().unwrap_or(""),
        " ",
        icon.title.as_deref().unwrap_or("")
    );
    contains_any_folded(&label, LABEL_WORDS)
}

/// Probe 3: free-text fallback over the card's visible text.
pub fn text_mentions_video(text: &str) -> bool {
    contains_any_folded(text, TEXT_WORDS)
}

/// Read the attributes of one element into an [`IconInfo`].
pub fn read_icon<S: Session>(session: &S, node: &S::Node) -> Result<IconInfo, SessionError> {
    let view_box = match session.attr(node, "viewBox")? {
        Some(v) => Some(v),
        None => session.attr(node, "viewbox")?,
    };
    Ok(IconInfo {
        tag: session.tag_name(node)?,
        icon_name: session.attr(node, "data-icon-name")?,
        class: session.attr(node, "class")?,
        view_box,
        aria_label: session.attr(node, "aria-label")?,
        title: session.attr(node, "title")?,
        visible: session.is_displayed(node)?,
    })
}

fn probe_icons<S: Session>(
    chain: &LocatorChain,
    session: &S,
    card: &S::Node,
    log: &RunLog,
    predicate: fn(&IconInfo) -> bool,
) -> Result<bool, MalformedQuery> {
    chain.probe(session, Scope::Within(card), log, |s, node| {
        read_icon(s, node).map(|icon| predicate(&icon))
    })
}

/// Evaluate [`PROBES`] in order against one card.
///
/// A session error inside a probe is logged and the probe counts as a miss;
/// the remaining probes still run.
pub fn detect_video<S: Session>(
    session: &S,
    card: &S::Node,
    log: &RunLog,
) -> Result<bool, MalformedQuery> {
    for probe in PROBES {
        let hit = match probe {
            Probe::IconSignature => probe_icons(&VIDEO_ICONS, session, card, log, icon_signature)?,
            Probe::IconLabel => probe_icons(&VIDEO_LABELS, session, card, log, icon_label)?,
            Probe::CardText => match session.text(card) {
                Ok(text) => text_mentions_video(&text),
                Err(e) => {
                    logd!(log, "video: card text unreadable: {}", e);
                    false
                }
            },
        };
        if hit {
            logd!(log, "video: yes ({:?})", probe);
            return Ok(true);
        }
    }
    Ok(false)
}
