// tests/field_classifier.rs
//
// Text-only classification of card paragraphs.
//
use medic_scrape::extract::fields::{classify, first_address_hint, first_specialty, label_of};
use medic_scrape::extract::{DoctorRecord, FieldLabel, TextFragment};

fn frags(texts: &[&str]) -> Vec<TextFragment> {
    texts.iter().map(|t| TextFragment::new(*t)).collect()
}

#[test]
fn typical_card_scenario() {
    let fields = classify(&frags(&[
        "12 rue de Paris",
        "75001",
        "Secteur 1, Conventionné",
        "Prochaine disponibilité: lundi",
    ]));
    let rec = DoctorRecord::from_parts("Dr. Jane Doe", None, fields, false).unwrap();

    assert_eq!(rec.name, "Dr. Jane Doe");
    assert_eq!(rec.address, "12 rue de Paris 75001");
    assert_eq!(rec.sector, "Secteur 1, Conventionné");
    assert_eq!(rec.availability, "Prochaine disponibilité: lundi");
    assert!(!rec.video_available);
}

#[test]
fn no_street_and_no_postal_code_means_no_address() {
    let fields = classify(&frags(&["Dermatologue", "Parle anglais", "Secteur 2"]));
    assert!(!fields.contains_key(&FieldLabel::Address));

    let rec = DoctorRecord::from_parts("Dr. X", None, fields, false).unwrap();
    assert_eq!(rec.address, "");
    assert_eq!(rec.sector, "Secteur 2");
}

#[test]
fn postal_code_appends_to_street() {
    let fields = classify(&frags(&["5 avenue Foch", "Secteur 1", "69006"]));
    assert_eq!(fields[&FieldLabel::Address], "5 avenue Foch 69006");
}

#[test]
fn lone_postal_code_becomes_the_address() {
    let fields = classify(&frags(&["13008"]));
    assert_eq!(fields[&FieldLabel::Address], "13008");
}

#[test]
fn later_match_overwrites_earlier_one() {
    // two sector-looking paragraphs: the last one is kept
    let fields = classify(&frags(&["Secteur 1", "Honoraires libres 50 €"]));
    assert_eq!(fields[&FieldLabel::Sector], "Honoraires libres 50 €");

    // a second street resets the address, dropping the earlier postal code
    let fields = classify(&frags(&["1 rue A", "75001", "2 boulevard B"]));
    assert_eq!(fields[&FieldLabel::Address], "2 boulevard B");
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(label_of("SECTEUR 2"), FieldLabel::Sector);
    assert_eq!(label_of("Disponible demain"), FieldLabel::Availability);
    assert_eq!(label_of("Allée des Cygnes"), FieldLabel::Address);
    assert_eq!(label_of("BOULEVARD Haussmann"), FieldLabel::Address);
}

#[test]
fn hidden_and_blank_fragments_are_ignored() {
    let mut hidden = TextFragment::new("Secteur 2").hidden();
    hidden.tag = "span".into();
    let fields = classify(&[TextFragment::new("   "), hidden, TextFragment::new("Secteur 1")]);
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[&FieldLabel::Sector], "Secteur 1");
}

#[test]
fn fragments_are_trimmed() {
    let fields = classify(&frags(&["  8 place Bellecour  ", " 69002 "]));
    assert_eq!(fields[&FieldLabel::Address], "8 place Bellecour 69002");
}

#[test]
fn address_hint_skips_numeric_only() {
    let hints = frags(&["75", "Paris 15e"]);
    assert_eq!(first_address_hint(&hints).as_deref(), Some("Paris 15e"));
    assert_eq!(first_address_hint(&frags(&["123"])), None);
}

#[test]
fn specialty_needs_the_medecin_marker() {
    let hints = frags(&["Dermatologue", "Médecin généraliste"]);
    assert_eq!(first_specialty(&hints).as_deref(), Some("Médecin généraliste"));
    assert_eq!(first_specialty(&frags(&["Pédiatre"])), None);
}

#[test]
fn empty_name_yields_no_record() {
    let fields = classify(&frags(&["Secteur 1"]));
    assert!(DoctorRecord::from_parts("   ", None, fields, true).is_none());
}
