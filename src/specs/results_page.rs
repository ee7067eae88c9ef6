// src/specs/results_page.rs
//! Selectors for the search results page and for the inside of one result card.

use crate::config::consts::{CARD_WAIT, PAGE_WAIT};
use crate::locator::{LocatorChain, SelectorStrategy as S};

/// Result card containers (page scope).
pub static CARDS: LocatorChain = LocatorChain::new(
    "result cards",
    &[
        S::css("dl-search-result", ".dl-search-result"),
        S::css("search-result", ".search-result"),
        S::css("test-id search-result", "[data-test-id='search-result']"),
        S::css("dl-card", ".dl-card"),
    ],
    PAGE_WAIT,
);

/// Practitioner name heading (card scope).
pub static NAME: LocatorChain = LocatorChain::new(
    "name",
    &[
        S::css("h2 dl-text bold primary", "h2.dl-text.dl-text-body.dl-text-bold.dl-text-s.dl-text-primary-110"),
        S::css("h2 design-system Text", "h2[data-design-system-component='Text']"),
        S::css("dl-text-bold", ".dl-text-bold"),
        S::css("h2", "h2"),
    ],
    CARD_WAIT,
);

/// Free-text paragraphs fed to the field classifier (card scope).
pub static FRAGMENTS: LocatorChain = LocatorChain::new(
    "text fragments",
    &[
        S::css("p hashed paragraph", "p.XZWvFVZmM9FHf461kjNO.G5dSlmEET4Zf5bQ5PR69"),
        S::css("p design-system Paragraph", "p[data-design-system-component='Paragraph']"),
        S::css("dl-text-regular", ".dl-text-regular"),
        S::css("p", "p"),
    ],
    CARD_WAIT,
);

/// Secondary address source when no paragraph classified as an address.
pub static ADDRESS_HINTS: LocatorChain = LocatorChain::new(
    "address hints",
    &[S::css(
        "location/address spans",
        "span[class*='location'], span[class*='address'], .dl-text-neutral-090",
    )],
    CARD_WAIT,
)
.optional();

/// Specialty line, recognised by its inline style token.
pub static SPECIALTY_HINTS: LocatorChain = LocatorChain::new(
    "specialty hints",
    &[S::attr_contains(
        "neutral-weak body text",
        "p",
        "style",
        "oxygen-color-component-text-bodyText-neutral-weak",
    )],
    CARD_WAIT,
)
.optional();

/// Icon elements that may carry a video signature (probe 1).
pub static VIDEO_ICONS: LocatorChain = LocatorChain::new(
    "video icons",
    &[
        S::css("icon-name video/video", "svg[data-icon-name='video/video']"),
        S::attr_contains("icon-name *video", "svg", "data-icon-name", "video"),
        S::css("video-icon class", ".video-icon"),
        S::css("16px currentColor svg", "svg[viewBox='0 0 16 16'][fill='currentColor']"),
        S::css("class *video any case", "*[class*='video' i]"),
    ],
    CARD_WAIT,
)
.optional();

/// Elements carrying an accessible label or tooltip (probe 2). The value is
/// matched case-folded by the predicate; CSS substring matching can't fold `É`.
pub static VIDEO_LABELS: LocatorChain = LocatorChain::new(
    "video labels",
    &[
        S::has_attr("aria-label", "*", "aria-label"),
        S::has_attr("title", "*", "title"),
    ],
    CARD_WAIT,
)
.optional();

pub fn all_chains() -> Vec<&'static LocatorChain> {
    vec![&CARDS, &NAME, &FRAGMENTS, &ADDRESS_HINTS, &SPECIALTY_HINTS, &VIDEO_ICONS, &VIDEO_LABELS]
}
