// tests/video_heuristic.rs
//
// Three OR-ed probes: icon signature, icon label, card text.
//
mod common;

use std::time::Duration;

use common::FakeSession;
use medic_scrape::extract::video::{icon_label, icon_signature, text_mentions_video};
use medic_scrape::extract::{detect_video, IconInfo};
use medic_scrape::log::{Level, RunLog};
use medic_scrape::session::{Scope, Session, SnapshotSession};
use scraper::Html;

/// Run the heuristic over the first card of a saved page.
fn page_has_video(card_html: &str) -> bool {
    let doc = Html::parse_document(&format!("<html><body>{card_html}</body></html>"));
    let s = SnapshotSession::new(&doc);
    let cards = s.find_all(Scope::Page, ".dl-search-result", Duration::ZERO).unwrap();
    detect_video(&s, &cards[0], &RunLog::silent()).unwrap()
}

fn svg() -> IconInfo {
    IconInfo { tag: "svg".into(), visible: true, ..IconInfo::default() }
}

#[test]
fn icon_signature_variants() {
    let named = IconInfo { icon_name: Some("video/video".into()), ..svg() };
    let classed = IconInfo { class: Some("dl-icon Video-icon".into()), ..svg() };
    let shaped = IconInfo { view_box: Some("0 0 16 16".into()), ..svg() };
    assert!(icon_signature(&named));
    assert!(icon_signature(&classed));
    assert!(icon_signature(&shaped));

    // the viewBox rule only applies to svg elements
    let div_box = IconInfo { tag: "div".into(), ..shaped.clone() };
    assert!(!icon_signature(&div_box));
    assert!(!icon_signature(&IconInfo { view_box: Some("0 0 24 24".into()), ..svg() }));
}

#[test]
fn hidden_icons_never_count() {
    let hidden = IconInfo { icon_name: Some("video/video".into()), visible: false, ..svg() };
    assert!(!icon_signature(&hidden));
    let hidden_label = IconInfo { aria_label: Some("Vidéo".into()), visible: false, ..svg() };
    assert!(!icon_label(&hidden_label));
}

#[test]
fn label_probe_reads_aria_and_title() {
    assert!(icon_label(&IconInfo { aria_label: Some("Consultation VIDÉO".into()), ..svg() }));
    assert!(icon_label(&IconInfo { title: Some("Visio disponible".into()), ..svg() }));
    assert!(!icon_label(&IconInfo { title: Some("Cabinet".into()), ..svg() }));
}

#[test]
fn text_probe_words() {
    assert!(text_mentions_video("Téléconsultation disponible"));
    assert!(text_mentions_video("Consultation vidéo"));
    assert!(!text_mentions_video("Consultation au cabinet"));
}

#[test]
fn card_text_alone_is_enough() {
    let mut s = FakeSession::new();
    let card = s.node("div", "Dr. A Médecin généraliste Visio possible");

    let log = RunLog::capture(Level::Debug);
    assert!(detect_video(&s, &card, &log).unwrap());
    assert!(log.contains(Level::Debug, "CardText"));
}

#[test]
fn first_probe_short_circuits() {
    let mut s = FakeSession::new();
    let card = s.node("div", "Dr. B");
    let icon = s.node("svg", "");
    s.with_attr(icon, "data-icon-name", "video/video");
    s.answer("svg[data-icon-name='video/video']", &[icon]);

    assert!(detect_video(&s, &card, &RunLog::silent()).unwrap());
    // no label lookups once the icon matched
    assert!(!s.queried().iter().any(|q| q.contains("aria-label")));
}

#[test]
fn labelled_element_is_found_by_second_probe() {
    let mut s = FakeSession::new();
    let card = s.node("div", "Dr. C");
    let span = s.node("span", "");
    s.with_attr(span, "aria-label", "Consultation vidéo");
    s.answer("*[aria-label]", &[span]);

    assert!(detect_video(&s, &card, &RunLog::silent()).unwrap());
}

#[test]
fn nothing_video_like_means_false() {
    let mut s = FakeSession::new();
    let card = s.node("div", "Dr. D Secteur 1 12 rue de Lyon");
    let icon = s.node("svg", "");
    s.with_attr(icon, "data-icon-name", "calendar");
    s.answer(".video-icon", &[icon]);

    assert!(!detect_video(&s, &card, &RunLog::silent()).unwrap());
}

#[test]
fn unreadable_card_text_is_a_miss() {
    let mut s = FakeSession::new();
    let card = s.node("div", "Visio");
    s.break_text(card);

    let log = RunLog::capture(Level::Debug);
    assert!(!detect_video(&s, &card, &log).unwrap());
    assert!(log.contains(Level::Debug, "card text unreadable"));
}

#[test]
fn labels_match_in_any_case_on_a_real_page() {
    for attr in [
        r#"aria-label="Visio""#,
        r#"aria-label="VIDEO""#,
        r#"title="Consultation VIDÉO""#,
    ] {
        let card = format!(r#"<div class="dl-search-result"><h2>Dr. A</h2><svg {attr}></svg></div>"#);
        assert!(page_has_video(&card), "{attr}");
    }
}

#[test]
fn class_matches_in_any_case_on_a_real_page() {
    assert!(page_has_video(
        r#"<div class="dl-search-result"><h2>Dr. A</h2><span class="Video-Icon"></span></div>"#
    ));
}

#[test]
fn unrelated_or_hidden_labels_on_a_real_page() {
    assert!(!page_has_video(
        r#"<div class="dl-search-result"><h2>Dr. A</h2><button title="Cabinet">Voir</button></div>"#
    ));
    assert!(!page_has_video(
        r#"<div class="dl-search-result"><h2>Dr. A</h2><svg aria-label="Visio" style="display:none"></svg></div>"#
    ));
}
