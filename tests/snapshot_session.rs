// tests/snapshot_session.rs
//
// The offline session over a parsed page.
//
use std::time::Duration;

use medic_scrape::session::{Scope, Session, SessionError, SnapshotSession};
use scraper::Html;

const PAGE: &str = r#"
<html><body>
  <div class="card">
    <h2>Dr.  <b>Jane</b>
        Doe</h2>
    <p hidden>Secret</p>
    <p style="visibility : hidden">Also secret</p>
    <div style="display:none"><p>Nested secret</p></div>
    <p title="Visio">Visible <script>var x = 1;</script>text</p>
  </div>
</body></html>
"#;

#[test]
fn text_is_visible_and_normalized() {
    let doc = Html::parse_document(PAGE);
    let s = SnapshotSession::new(&doc);

    let h2 = s.find_all(Scope::Page, "h2", Duration::ZERO).unwrap();
    assert_eq!(s.text(&h2[0]).unwrap(), "Dr. Jane Doe");

    let ps = s.find_all(Scope::Page, "p", Duration::ZERO).unwrap();
    let texts: Vec<String> = ps.iter().map(|p| s.text(p).unwrap()).collect();
    assert_eq!(texts, vec!["", "", "", "Visible text"]);
    let shown: Vec<bool> = ps.iter().map(|p| s.is_displayed(p).unwrap()).collect();
    assert_eq!(shown, vec![false, false, false, true]);
}

#[test]
fn scoped_queries_and_attributes() {
    let doc = Html::parse_document(PAGE);
    let s = SnapshotSession::new(&doc);

    let card = s.find_all(Scope::Page, ".card", Duration::ZERO).unwrap();
    let inside = s.find_all(Scope::Within(&card[0]), "p[title]", Duration::ZERO).unwrap();
    assert_eq!(inside.len(), 1);
    assert_eq!(s.attr(&inside[0], "title").unwrap().as_deref(), Some("Visio"));
    assert_eq!(s.attr(&inside[0], "aria-label").unwrap(), None);
    assert_eq!(s.tag_name(&inside[0]).unwrap(), "p");
    assert!(!s.is_live());
}

#[test]
fn bad_css_is_a_command_error() {
    let doc = Html::parse_document(PAGE);
    let s = SnapshotSession::new(&doc);
    assert!(matches!(s.find_all(Scope::Page, "p[", Duration::ZERO), Err(SessionError::Command(_))));
}
