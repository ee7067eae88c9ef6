// src/session/snapshot.rs
//! Offline session over a saved results page.
//!
//! The document is parsed once by the caller and borrowed here, so element
//! handles are plain `scraper::ElementRef`s. There is nothing to wait for:
//! `find_all` answers immediately and ignores its wait bound. Interactions
//! (click, typing) are accepted and do nothing.

use std::time::Duration;

use scraper::{ElementRef, Html, Selector};

use super::{Scope, Session, SessionError};
use crate::core::sanitize::normalize_ws;

/// Tags whose content never renders.
const NON_RENDERED: &[&str] = &["script", "style", "noscript", "template", "head"];

pub struct SnapshotSession<'a> {
    doc: &'a Html,
}

impl<'a> SnapshotSession<'a> {
    pub fn new(doc: &'a Html) -> Self {
        Self { doc }
    }
}

impl<'a> Session for SnapshotSession<'a> {
    type Node = ElementRef<'a>;

    fn navigate(&self, _url: &str) -> Result<(), SessionError> {
        Ok(())
    }

    fn find_all(
        &self,
        scope: Scope<'_, Self::Node>,
        css: &str,
        _wait: Duration,
    ) -> Result<Vec<Self::Node>, SessionError> {
        let sel = Selector::parse(css)
            .map_err(|e| SessionError::Command(format!("invalid selector `{css}`: {e:?}")))?;
        let found = match scope {
            Scope::Page => self.doc.select(&sel).collect(),
            Scope::Within(el) => el.select(&sel).collect(),
        };
        Ok(found)
    }

    fn text(&self, node: &Self::Node) -> Result<String, SessionError> {
        if !displayed(node) {
            return Ok(s!());
        }
        let mut parts = Vec::new();
        collect_visible_text(*node, &mut parts);
        Ok(normalize_ws(&parts.join(" ")))
    }

    fn attr(&self, node: &Self::Node, name: &str) -> Result<Option<String>, SessionError> {
        let el = node.value();
        let value = el
            .attr(name)
            .or_else(|| el.attr(&name.to_ascii_lowercase()))
            .map(String::from);
        Ok(value)
    }

    fn tag_name(&self, node: &Self::Node) -> Result<String, SessionError> {
        Ok(node.value().name().to_ascii_lowercase())
    }

    fn is_displayed(&self, node: &Self::Node) -> Result<bool, SessionError> {
        Ok(displayed(node))
    }

    fn click(&self, _node: &Self::Node) -> Result<(), SessionError> {
        Ok(())
    }

    fn clear(&self, _node: &Self::Node) -> Result<(), SessionError> {
        Ok(())
    }

    fn send_keys(&self, _node: &Self::Node, _text: &str) -> Result<(), SessionError> {
        Ok(())
    }
}

/// An element is displayed if neither it nor any ancestor hides itself.
fn displayed(node: &ElementRef<'_>) -> bool {
    if hides_itself(node) {
        return false;
    }
    node.ancestors()
        .filter_map(ElementRef::wrap)
        .all(|anc| !hides_itself(&anc))
}

fn hides_itself(el: &ElementRef<'_>) -> bool {
    let v = el.value();
    if NON_RENDERED.contains(&v.name()) || v.attr("hidden").is_some() {
        return true;
    }
    match v.attr("style") {
        Some(style) => {
            let compact: String = style
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect::<String>()
                .to_ascii_lowercase();
            compact.contains("display:none") || compact.contains("visibility:hidden")
        }
        None => false,
    }
}

fn collect_visible_text(el: ElementRef<'_>, out: &mut Vec<String>) {
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push((&**text).to_owned());
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if !hides_itself(&child_el) {
                collect_visible_text(child_el, out);
            }
        }
    }
}
