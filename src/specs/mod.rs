// src/specs/mod.rs
//! # Page "specs"
//!
//! Where the ground truth lives in the site's markup, written down as
//! [`LocatorChain`](crate::locator::LocatorChain) tables. Each table lists the
//! known selectors for one thing, most specific first; the locator walks them
//! in order and takes the first that finds anything.
//!
//! ## What lives here
//! - **Selector choice & precedence** per element kind (cards, name, text
//!   fragments, icons, form inputs, consent buttons).
//! - Nothing else: no DOM access, no classification, no I/O.
//!
//! ## Conventions
//! - The hashed class names (`XZWvFVZmM9…`) change between deployments; keep them
//!   first but always follow with a structural or attribute-based fallback.
//! - Card-level chains use `CARD_WAIT` (the card is already rendered); page-level
//!   chains use `PAGE_WAIT`.
//! - Every table is syntax-checked by `tests/specs_tables.rs`.
//!
//! When the site changes: capture the HTML, adjust the table, add a fixture.

pub mod results_page;
pub mod search_page;

use crate::locator::LocatorChain;

/// Every chain defined here, for validation.
pub fn all_chains() -> Vec<&'static LocatorChain> {
    let mut v = results_page::all_chains();
    v.extend(search_page::all_chains());
    v
}
