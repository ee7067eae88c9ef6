// src/session/webdriver.rs
//! Live browser session over WebDriver (chromedriver / geckodriver).
//!
//! fantoccini is async; this wrapper owns a current-thread tokio runtime and
//! blocks on every command, so callers see one synchronous flow of control
//! against one browser. The browser is closed by `close()` or, failing that,
//! on drop.

use std::time::{Duration, Instant};

use fantoccini::{Client, ClientBuilder, Locator, elements::Element};
use serde_json::{Map, Value, json};
use tokio::runtime::{Builder, Runtime};

use super::{Scope, Session, SessionError};
use crate::config::consts::WAIT_POLL;
use crate::config::options::{BrowserKind, BrowserOptions};
use crate::core::sanitize::normalize_ws;

pub struct WebDriverSession {
    rt: Runtime,
    client: Option<Client>,
}

impl WebDriverSession {
    /// Start a browser session on the WebDriver server in `opts`.
    /// Any failure here is an environment fault.
    pub fn connect(opts: &BrowserOptions) -> Result<Self, SessionError> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SessionError::Environment(format!("cannot start runtime: {e}")))?;

        let caps = capabilities(opts);
        let client = rt
            .block_on(ClientBuilder::native().capabilities(caps).connect(&opts.webdriver_url))
            .map_err(|e| {
                SessionError::Environment(format!(
                    "cannot reach {} WebDriver at {} ({e}). Is {} running?",
                    opts.kind.label(),
                    opts.webdriver_url,
                    opts.kind.driver_binary(),
                ))
            })?;

        Ok(Self { rt, client: Some(client) })
    }

    fn client(&self) -> Result<&Client, SessionError> {
        self.client.as_ref().ok_or(SessionError::Closed)
    }
}

fn capabilities(opts: &BrowserOptions) -> Map<String, Value> {
    let mut caps = Map::new();
    match opts.kind {
        BrowserKind::Chrome => {
            let mut args = vec![
                s!("--start-maximized"),
                s!("--disable-extensions"),
                s!("--disable-gpu"),
                s!("--no-sandbox"),
                s!("--disable-dev-shm-usage"),
                join!("--user-agent=", &opts.user_agent),
            ];
            if opts.headless {
                args.push(s!("--headless=new"));
            }
            caps.insert(s!("goog:chromeOptions"), json!({ "args": args }));
        }
        BrowserKind::Firefox => {
            let args: Vec<String> = if opts.headless { strings!["--headless"] } else { Vec::new() };
            caps.insert(
                s!("moz:firefoxOptions"),
                json!({
                    "args": args,
                    "prefs": { "general.useragent.override": opts.user_agent },
                }),
            );
        }
    }
    caps
}

fn cmd<E: std::fmt::Display>(e: E) -> SessionError {
    SessionError::Command(e.to_string())
}

impl Session for WebDriverSession {
    type Node = Element;

    fn navigate(&self, url: &str) -> Result<(), SessionError> {
        let client = self.client()?;
        self.rt.block_on(client.goto(url)).map_err(cmd)
    }

    fn find_all(
        &self,
        scope: Scope<'_, Self::Node>,
        css: &str,
        wait: Duration,
    ) -> Result<Vec<Self::Node>, SessionError> {
        let client = self.client()?;
        let deadline = Instant::now() + wait;

        self.rt.block_on(async {
            loop {
                let found = match scope {
                    Scope::Page => client.find_all(Locator::Css(css)).await,
                    Scope::Within(el) => el.find_all(Locator::Css(css)).await,
                }
                .map_err(cmd)?;

                if !found.is_empty() || Instant::now() >= deadline {
                    return Ok(found);
                }
                tokio::time::sleep(WAIT_POLL).await;
            }
        })
    }

    fn text(&self, node: &Self::Node) -> Result<String, SessionError> {
        let raw = self.rt.block_on(node.text()).map_err(cmd)?;
        Ok(normalize_ws(&raw))
    }

    fn attr(&self, node: &Self::Node, name: &str) -> Result<Option<String>, SessionError> {
        self.rt.block_on(node.attr(name)).map_err(cmd)
    }

    fn tag_name(&self, node: &Self::Node) -> Result<String, SessionError> {
        let tag = self.rt.block_on(node.tag_name()).map_err(cmd)?;
        Ok(tag.to_ascii_lowercase())
    }

    fn is_displayed(&self, node: &Self::Node) -> Result<bool, SessionError> {
        self.rt.block_on(node.is_displayed()).map_err(cmd)
    }

    fn click(&self, node: &Self::Node) -> Result<(), SessionError> {
        self.rt.block_on(node.click()).map_err(cmd)
    }

    fn clear(&self, node: &Self::Node) -> Result<(), SessionError> {
        self.rt.block_on(node.clear()).map_err(cmd)
    }

    fn send_keys(&self, node: &Self::Node, text: &str) -> Result<(), SessionError> {
        self.rt.block_on(node.send_keys(text)).map_err(cmd)
    }

    fn close(&mut self) -> Result<(), SessionError> {
        match self.client.take() {
            Some(client) => self.rt.block_on(client.close()).map_err(cmd),
            None => Ok(()),
        }
    }

    fn is_live(&self) -> bool {
        true
    }
}

impl Drop for WebDriverSession {
    fn drop(&mut self) {
        let _ = Session::close(self);
    }
}
