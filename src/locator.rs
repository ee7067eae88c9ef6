// src/locator.rs
//! Ordered fallback over unstable markup.
//!
//! A [`LocatorChain`] is a named, ordered table of [`SelectorStrategy`] rows.
//! [`LocatorChain::locate`] walks the rows in order and returns the result of
//! the first one that finds anything; later rows are never evaluated. When all
//! rows come back empty the result is empty; that is not an error.
//!
//! A malformed query is a bug in the table, so it fails immediately with
//! [`MalformedQuery`] instead of being skipped. A session command that fails
//! while one row runs counts as "no match" for that row.

use std::borrow::Cow;
use std::time::Duration;

use scraper::Selector;
use thiserror::Error;

use crate::core::sanitize::fold;
use crate::log::{Level, RunLog};
use crate::session::{Scope, Session, SessionError};

/// How one strategy selects elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Query {
    /// Plain CSS.
    Css(&'static str),
    /// `tag[attr*="needle"]`: attribute substring match.
    AttrContains { tag: &'static str, attr: &'static str, needle: &'static str },
    /// `tag[attr]`: the attribute is present; callers judge its value.
    HasAttr { tag: &'static str, attr: &'static str },
    /// Elements matching `css` whose visible text contains `needle` (case-folded).
    TextContains { css: &'static str, needle: &'static str },
}

impl Query {
    /// The CSS handed to the session.
    pub fn css(&self) -> Cow<'static, str> {
        match *self {
            Query::Css(css) => Cow::Borrowed(css),
            Query::AttrContains { tag, attr, needle } => {
                Cow::Owned(format!("{tag}[{attr}*=\"{needle}\"]"))
            }
            Query::HasAttr { tag, attr } => Cow::Owned(format!("{tag}[{attr}]")),
            Query::TextContains { css, .. } => Cow::Borrowed(css),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectorStrategy {
    pub name: &'static str,
    pub query: Query,
}

impl SelectorStrategy {
    pub const fn css(name: &'static str, css: &'static str) -> Self {
        Self { name, query: Query::Css(css) }
    }

    pub const fn attr_contains(
        name: &'static str,
        tag: &'static str,
        attr: &'static str,
        needle: &'static str,
    ) -> Self {
        Self { name, query: Query::AttrContains { tag, attr, needle } }
    }

    pub const fn has_attr(name: &'static str, tag: &'static str, attr: &'static str) -> Self {
        Self { name, query: Query::HasAttr { tag, attr } }
    }

    pub const fn text_contains(
        name: &'static str,
        css: &'static str,
        needle: &'static str,
    ) -> Self {
        Self { name, query: Query::TextContains { css, needle } }
    }

    /// Syntax check of the generated CSS.
    pub fn validate(&self) -> Result<(), MalformedQuery> {
        let css = self.query.css();
        let parsed = Selector::parse(&css).map(|_| ()).map_err(|e| format!("{e:?}"));
        parsed.map_err(|reason| MalformedQuery {
            strategy: self.name,
            query: css.into_owned(),
            reason,
        })
    }

    /// Elements this row yields under `scope`.
    fn evaluate<S: Session>(
        &self,
        session: &S,
        scope: Scope<'_, S::Node>,
        wait: Duration,
    ) -> Result<Vec<S::Node>, SessionError> {
        let found = session.find_all(scope, &self.query.css(), wait)?;
        match self.query {
            Query::TextContains { needle, .. } => {
                let needle = fold(needle);
                let mut kept = Vec::with_capacity(found.len());
                for node in found {
                    if fold(&session.text(&node)?).contains(&needle) {
                        kept.push(node);
                    }
                }
                Ok(kept)
            }
            _ => Ok(found),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("selector strategy `{strategy}` has malformed query `{query}`: {reason}")]
pub struct MalformedQuery {
    pub strategy: &'static str,
    pub query: String,
    pub reason: String,
}

/// What a chain found, and which row found it.
#[derive(Debug)]
pub struct Located<N> {
    pub strategy: Option<&'static str>,
    pub nodes: Vec<N>,
}

impl<N> Located<N> {
    pub fn none() -> Self {
        Self { strategy: None, nodes: Vec::new() }
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LocatorChain {
    pub name: &'static str,
    pub strategies: &'static [SelectorStrategy],
    /// Bound for each strategy attempt.
    pub wait: Duration,
    /// Level used when every strategy comes back empty.
    pub exhausted: Level,
}

impl LocatorChain {
    pub const fn new(
        name: &'static str,
        strategies: &'static [SelectorStrategy],
        wait: Duration,
    ) -> Self {
        Self { name, strategies, wait, exhausted: Level::Warn }
    }

    /// For chains whose absence is routine (optional hints).
    pub const fn optional(mut self) -> Self {
        self.exhausted = Level::Debug;
        self
    }

    pub fn validate(&self) -> Result<(), MalformedQuery> {
        self.strategies.iter().try_for_each(SelectorStrategy::validate)
    }

    /// First non-empty strategy wins; the rest are skipped.
    pub fn locate<S: Session>(
        &self,
        session: &S,
        scope: Scope<'_, S::Node>,
        log: &RunLog,
    ) -> Result<Located<S::Node>, MalformedQuery> {
        for strategy in self.strategies {
            strategy.validate()?;
            match strategy.evaluate(session, scope, self.wait) {
                Ok(nodes) if !nodes.is_empty() => {
                    logd!(log, "{}: {} element(s) via `{}`", self.name, nodes.len(), strategy.name);
                    return Ok(Located { strategy: Some(strategy.name), nodes });
                }
                Ok(_) => {}
                Err(e) => {
                    logd!(log, "{}: strategy `{}` failed: {}", self.name, strategy.name, e);
                }
            }
        }
        log.write(
            self.exhausted,
            &format!("{}: no strategy matched ({} tried)", self.name, self.strategies.len()),
        );
        Ok(Located::none())
    }

    /// Any-match probing: walk every strategy and every element until
    /// `accept` says yes. Used where several independent signals count.
    pub fn probe<S, F>(
        &self,
        session: &S,
        scope: Scope<'_, S::Node>,
        log: &RunLog,
        mut accept: F,
    ) -> Result<bool, MalformedQuery>
    where
        S: Session,
        F: FnMut(&S, &S::Node) -> Result<bool, SessionError>,
    {
        for strategy in self.strategies {
            strategy.validate()?;
            let nodes = match strategy.evaluate(session, scope, self.wait) {
                Ok(nodes) => nodes,
                Err(e) => {
                    logd!(log, "{}: strategy `{}` failed: {}", self.name, strategy.name, e);
                    continue;
                }
            };
            for node in &nodes {
                match accept(session, node) {
                    Ok(true) => {
                        logd!(log, "{}: hit via `{}`", self.name, strategy.name);
                        return Ok(true);
                    }
                    Ok(false) => {}
                    Err(e) => logd!(log, "{}: element check failed: {}", self.name, e),
                }
            }
        }
        Ok(false)
    }
}
