// tests/common/mod.rs
//
// Scripted in-memory session: every CSS query has a canned answer, and every
// query and interaction is recorded for later assertions.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use medic_scrape::session::{Scope, Session, SessionError};

#[derive(Clone, Debug, Default)]
pub struct FakeNode {
    pub tag: String,
    pub text: String,
    pub attrs: HashMap<String, String>,
    pub displayed: bool,
}

enum Answer {
    Nodes(Vec<usize>),
    Fail,
}

#[derive(Default)]
pub struct FakeSession {
    pub nodes: Vec<FakeNode>,
    answers: HashMap<String, Answer>,
    broken_text: Vec<usize>,
    live: bool,
    pub queries: RefCell<Vec<String>>,
    pub clicks: RefCell<Vec<usize>>,
    pub typed: RefCell<Vec<(usize, String)>>,
    pub visited: RefCell<Vec<String>>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behave like a real browser (search form and consent run).
    pub fn live() -> Self {
        Self { live: true, ..Self::default() }
    }

    /// Add a visible element; returns its handle.
    pub fn node(&mut self, tag: &str, text: &str) -> usize {
        self.nodes.push(FakeNode {
            tag: tag.into(),
            text: text.into(),
            attrs: HashMap::new(),
            displayed: true,
        });
        self.nodes.len() - 1
    }

    pub fn with_attr(&mut self, id: usize, name: &str, value: &str) -> usize {
        self.nodes[id].attrs.insert(name.into(), value.into());
        id
    }

    pub fn hide(&mut self, id: usize) -> usize {
        self.nodes[id].displayed = false;
        id
    }

    /// Reading this node's text fails.
    pub fn break_text(&mut self, id: usize) {
        self.broken_text.push(id);
    }

    /// `css` answers `nodes`, whatever the scope.
    pub fn answer(&mut self, css: &str, nodes: &[usize]) {
        self.answers.insert(css.into(), Answer::Nodes(nodes.to_vec()));
    }

    /// `css` fails with a command error.
    pub fn fail(&mut self, css: &str) {
        self.answers.insert(css.into(), Answer::Fail);
    }

    pub fn queried(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    pub fn was_queried(&self, css: &str) -> bool {
        self.queries.borrow().iter().any(|q| q == css)
    }

    fn get(&self, id: &usize) -> Result<&FakeNode, SessionError> {
        self.nodes.get(*id).ok_or_else(|| SessionError::Command(format!("stale element {id}")))
    }
}

impl Session for FakeSession {
    type Node = usize;

    fn navigate(&self, url: &str) -> Result<(), SessionError> {
        self.visited.borrow_mut().push(url.into());
        Ok(())
    }

    fn find_all(&self, _scope: Scope<'_, usize>, css: &str, _wait: Duration) -> Result<Vec<usize>, SessionError> {
        self.queries.borrow_mut().push(css.into());
        match self.answers.get(css) {
            Some(Answer::Nodes(ids)) => Ok(ids.clone()),
            Some(Answer::Fail) => Err(SessionError::Command(format!("scripted failure for `{css}`"))),
            None => Ok(Vec::new()),
        }
    }

    fn text(&self, node: &usize) -> Result<String, SessionError> {
        if self.broken_text.contains(node) {
            return Err(SessionError::Command(s("element went stale")));
        }
        let n = self.get(node)?;
        Ok(if n.displayed { n.text.clone() } else { String::new() })
    }

    fn attr(&self, node: &usize, name: &str) -> Result<Option<String>, SessionError> {
        Ok(self.get(node)?.attrs.get(name).cloned())
    }

    fn tag_name(&self, node: &usize) -> Result<String, SessionError> {
        Ok(self.get(node)?.tag.clone())
    }

    fn is_displayed(&self, node: &usize) -> Result<bool, SessionError> {
        Ok(self.get(node)?.displayed)
    }

    fn click(&self, node: &usize) -> Result<(), SessionError> {
        self.clicks.borrow_mut().push(*node);
        Ok(())
    }

    fn clear(&self, _node: &usize) -> Result<(), SessionError> {
        Ok(())
    }

    fn send_keys(&self, node: &usize, text: &str) -> Result<(), SessionError> {
        self.typed.borrow_mut().push((*node, text.into()));
        Ok(())
    }

    fn is_live(&self) -> bool {
        self.live
    }
}

fn s(x: &str) -> String {
    x.to_string()
}

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// Fresh, empty directory under the system temp dir.
pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("medic_scrape_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&p);
    std::fs::create_dir_all(&p).unwrap();
    p
}
