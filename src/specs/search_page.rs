// src/specs/search_page.rs
//! Selectors for the landing page: consent banner, search inputs, filter panel.

use crate::config::consts::{FILTER_WAIT, PAGE_WAIT};
use crate::locator::{LocatorChain, SelectorStrategy as S};

/// "Refuse" / "continue without agreeing" buttons of the consent banner.
pub static CONSENT_REJECT: LocatorChain = LocatorChain::new(
    "consent reject",
    &[
        S::css("didomi disagree", "#didomi-notice-disagree-button"),
        S::css("aria Refuser", "button[aria-label='Refuser']"),
        S::text_contains("button text Refuser", "button", "Refuser"),
        S::css("didomi continue", ".didomi-continue-without-agreeing"),
    ],
    PAGE_WAIT,
)
.optional();

pub static LOCATION_INPUT: LocatorChain = LocatorChain::new(
    "location input",
    &[
        S::css("searchbar place", "input.searchbar-place-input"),
        S::attr_contains("placeholder Où", "input", "placeholder", "Où"),
        S::css("test-id location", "input[data-test-id='location-input']"),
    ],
    PAGE_WAIT,
);

pub static SPECIALITY_INPUT: LocatorChain = LocatorChain::new(
    "speciality input",
    &[
        S::css("searchbar query", "input.searchbar-query-input"),
        S::attr_contains("placeholder spécialité", "input", "placeholder", "spécialité"),
        S::css("test-id speciality", "input[data-test-id='speciality-input']"),
    ],
    PAGE_WAIT,
);

pub static SUBMIT_BUTTON: LocatorChain = LocatorChain::new(
    "search submit",
    &[
        S::css("searchbar submit", "button.searchbar-submit-button"),
        S::css("type submit", "button[type='submit']"),
        S::text_contains("button text Rechercher", "button", "Rechercher"),
    ],
    PAGE_WAIT,
);

/// Result-page toggle restricting to practitioners offering video consultations.
pub static VIDEO_TOGGLE: LocatorChain = LocatorChain::new(
    "video filter toggle",
    &[
        S::css("test-id telehealth", "[data-test-id='filter-telehealth']"),
        S::text_contains("button text Téléconsultation", "button", "Téléconsultation"),
        S::text_contains("label text Téléconsultation", "label", "Téléconsultation"),
    ],
    FILTER_WAIT,
)
.optional();

pub static SECTOR1_TOGGLE: LocatorChain = LocatorChain::new(
    "sector 1 toggle",
    &[
        S::text_contains("button text Secteur 1", "button", "Secteur 1"),
        S::text_contains("label text Secteur 1", "label", "Secteur 1"),
    ],
    FILTER_WAIT,
)
.optional();

pub static SECTOR2_TOGGLE: LocatorChain = LocatorChain::new(
    "sector 2 toggle",
    &[
        S::text_contains("button text Secteur 2", "button", "Secteur 2"),
        S::text_contains("label text Secteur 2", "label", "Secteur 2"),
    ],
    FILTER_WAIT,
)
.optional();

pub static NON_CONTRACTED_TOGGLE: LocatorChain = LocatorChain::new(
    "non-contracted toggle",
    &[
        S::text_contains("button text Non conventionné", "button", "Non conventionné"),
        S::text_contains("label text Non conventionné", "label", "Non conventionné"),
    ],
    FILTER_WAIT,
)
.optional();

pub fn all_chains() -> Vec<&'static LocatorChain> {
    vec![
        &CONSENT_REJECT,
        &LOCATION_INPUT,
        &SPECIALITY_INPUT,
        &SUBMIT_BUTTON,
        &VIDEO_TOGGLE,
        &SECTOR1_TOGGLE,
        &SECTOR2_TOGGLE,
        &NON_CONTRACTED_TOGGLE,
    ]
}
