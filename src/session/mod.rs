// src/session/mod.rs
//! # Browser session seam
//!
//! Everything the extraction core needs from a browser goes through the
//! [`Session`] trait: a bounded-wait `find_all`, a few element reads, and the
//! handful of interactions the search form needs. The core never names a
//! concrete backend.
//!
//! Backends:
//! - [`snapshot::SnapshotSession`]: a saved results page parsed with `scraper`.
//!   Offline runs and tests.
//! - [`webdriver::WebDriverSession`] (feature `webdriver`): a live Chrome/Firefox
//!   driven through fantoccini.
//!
//! Element handles (`Session::Node`) are only valid for the page load that
//! produced them.

use std::time::Duration;

use thiserror::Error;

pub mod snapshot;
#[cfg(feature = "webdriver")]
pub mod webdriver;

pub use snapshot::SnapshotSession;
#[cfg(feature = "webdriver")]
pub use webdriver::WebDriverSession;

/// Where a query is evaluated.
pub enum Scope<'a, N> {
    Page,
    Within(&'a N),
}

impl<N> Clone for Scope<'_, N> {
    fn clone(&self) -> Self { *self }
}
impl<N> Copy for Scope<'_, N> {}

#[derive(Debug, Error)]
pub enum SessionError {
    /// The browser side is unusable (driver not reachable, file unreadable…).
    #[error("browser environment unavailable: {0}")]
    Environment(String),

    /// A single command failed (stale element, script error, …).
    #[error("browser command failed: {0}")]
    Command(String),

    #[error("session already closed")]
    Closed,
}

pub trait Session {
    type Node: Clone;

    fn navigate(&self, url: &str) -> Result<(), SessionError>;

    /// All elements matching `css` under `scope`, in document order.
    /// Waits up to `wait` for at least one match; an empty vec after the wait
    /// is a normal outcome, not an error.
    fn find_all(
        &self,
        scope: Scope<'_, Self::Node>,
        css: &str,
        wait: Duration,
    ) -> Result<Vec<Self::Node>, SessionError>;

    /// Visible text, whitespace-normalized. Hidden elements read as "".
    fn text(&self, node: &Self::Node) -> Result<String, SessionError>;

    fn attr(&self, node: &Self::Node, name: &str) -> Result<Option<String>, SessionError>;

    /// Lowercase tag name.
    fn tag_name(&self, node: &Self::Node) -> Result<String, SessionError>;

    fn is_displayed(&self, node: &Self::Node) -> Result<bool, SessionError>;

    fn click(&self, node: &Self::Node) -> Result<(), SessionError>;

    fn clear(&self, node: &Self::Node) -> Result<(), SessionError>;

    fn send_keys(&self, node: &Self::Node, text: &str) -> Result<(), SessionError>;

    /// Release the browser. Idempotent.
    fn close(&mut self) -> Result<(), SessionError> {
        Ok(())
    }

    /// True for backends that drive a real page (search form, consent banner).
    fn is_live(&self) -> bool {
        false
    }
}
