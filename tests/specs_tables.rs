// tests/specs_tables.rs
//
// Every built-in selector table must parse, and names must be unique within a
// chain so log lines point at one row.
//
use std::collections::HashSet;

use medic_scrape::config::consts::{CARD_WAIT, FILTER_WAIT, PAGE_WAIT};
use medic_scrape::log::Level;
use medic_scrape::specs::{self, results_page, search_page};

#[test]
fn every_chain_parses() {
    for chain in specs::all_chains() {
        if let Err(e) = chain.validate() {
            panic!("{}: {}", chain.name, e);
        }
    }
}

#[test]
fn strategy_names_are_unique_per_chain() {
    for chain in specs::all_chains() {
        let mut seen = HashSet::new();
        for s in chain.strategies {
            assert!(seen.insert(s.name), "{}: duplicate strategy `{}`", chain.name, s.name);
        }
        assert!(!chain.strategies.is_empty(), "{}: empty chain", chain.name);
    }
}

#[test]
fn waits_follow_scope() {
    assert_eq!(results_page::CARDS.wait, PAGE_WAIT);
    for chain in [&results_page::NAME, &results_page::FRAGMENTS, &results_page::VIDEO_ICONS] {
        assert_eq!(chain.wait, CARD_WAIT, "{}", chain.name);
    }
    assert_eq!(search_page::LOCATION_INPUT.wait, PAGE_WAIT);
    assert_eq!(search_page::VIDEO_TOGGLE.wait, FILTER_WAIT);
}

#[test]
fn only_required_chains_warn_when_exhausted() {
    let warn: Vec<&str> = specs::all_chains()
        .into_iter()
        .filter(|c| c.exhausted == Level::Warn)
        .map(|c| c.name)
        .collect();
    assert_eq!(
        warn,
        vec!["result cards", "name", "text fragments", "location input", "speciality input", "search submit"]
    );
}

#[test]
fn name_chain_keeps_site_class_first() {
    let first = results_page::NAME.strategies[0].query.css();
    assert_eq!(first, "h2.dl-text.dl-text-body.dl-text-bold.dl-text-s.dl-text-primary-110");
    assert_eq!(results_page::NAME.strategies.last().unwrap().query.css(), "h2");
}
