// src/search.rs
//! Landing page → results page.
//!
//! Every step here is best-effort: a missing input or button is logged and the
//! run carries on, because the extraction stage can still try whatever page
//! the browser ends up on. Each method returns whether its step took effect.

use std::thread;
use std::time::Duration;

use crate::config::options::Pace;
use crate::filter::{FilterCriteria, SectorFilter};
use crate::locator::{LocatorChain, MalformedQuery};
use crate::log::RunLog;
use crate::session::{Scope, Session, SessionError};
use crate::specs::search_page::*;

pub struct SearchForm<'a, S: Session> {
    session: &'a S,
    log: &'a RunLog,
    pace: Pace,
}

impl<'a, S: Session> SearchForm<'a, S> {
    pub fn new(session: &'a S, log: &'a RunLog, pace: Pace) -> Self {
        Self { session, log, pace }
    }

    /// Refuse cookies if a banner shows up.
    pub fn dismiss_consent_banner(&self) -> Result<bool, MalformedQuery> {
        let clicked = self.click_first(&CONSENT_REJECT)?;
        if clicked {
            logf!(self.log, "Consent: refused");
        } else {
            logf!(self.log, "Consent: no banner found or already handled");
        }
        Ok(clicked)
    }

    pub fn set_location(&self, text: &str) -> Result<bool, MalformedQuery> {
        self.type_into(&LOCATION_INPUT, text)
    }

    pub fn set_speciality(&self, text: &str) -> Result<bool, MalformedQuery> {
        self.type_into(&SPECIALITY_INPUT, text)
    }

    pub fn submit(&self) -> Result<bool, MalformedQuery> {
        let clicked = self.click_first(&SUBMIT_BUTTON)?;
        if clicked {
            settle(self.pace.after_submit);
        } else {
            loge!(self.log, "Search: submit button not found");
        }
        Ok(clicked)
    }

    /// Tick the result-page filters matching `criteria`, when the page offers them.
    /// The extracted records are filtered again afterwards regardless.
    pub fn apply_filter_panel(&self, criteria: &FilterCriteria) -> Result<bool, MalformedQuery> {
        let mut applied = true;

        let sector_toggle = match criteria.sector {
            SectorFilter::Any => None,
            SectorFilter::Sector1 => Some(&SECTOR1_TOGGLE),
            SectorFilter::Sector2 => Some(&SECTOR2_TOGGLE),
            SectorFilter::NonContracted => Some(&NON_CONTRACTED_TOGGLE),
        };
        if let Some(chain) = sector_toggle {
            let ok = self.click_first(chain)?;
            if !ok {
                logw!(self.log, "Filters: no `{}` control on page", criteria.sector);
            }
            applied &= ok;
        }

        if criteria.video_only {
            let ok = self.click_first(&VIDEO_TOGGLE)?;
            if !ok {
                logw!(self.log, "Filters: no video-consultation control on page");
            }
            applied &= ok;
        }

        if applied && !criteria.is_pass_through() {
            settle(self.pace.after_typing);
        }
        Ok(applied)
    }

    fn type_into(&self, chain: &LocatorChain, text: &str) -> Result<bool, MalformedQuery> {
        let found = chain.locate(self.session, Scope::Page, self.log)?;
        let Some(input) = found.nodes.first() else {
            loge!(self.log, "Search: {} not found", chain.name);
            return Ok(false);
        };
        let typed = (|| -> Result<(), SessionError> {
            self.session.clear(input)?;
            self.session.send_keys(input, text)
        })();
        match typed {
            Ok(()) => {
                logd!(self.log, "Search: typed `{}` into {}", text, chain.name);
                settle(self.pace.after_typing);
                Ok(true)
            }
            Err(e) => {
                loge!(self.log, "Search: typing into {} failed: {}", chain.name, e);
                Ok(false)
            }
        }
    }

    fn click_first(&self, chain: &LocatorChain) -> Result<bool, MalformedQuery> {
        let found = chain.locate(self.session, Scope::Page, self.log)?;
        let Some(node) = found.nodes.first() else { return Ok(false) };
        match self.session.click(node) {
            Ok(()) => Ok(true),
            Err(e) => {
                loge!(self.log, "{}: click failed: {}", chain.name, e);
                Ok(false)
            }
        }
    }
}

fn settle(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}
