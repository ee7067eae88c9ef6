// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod session;
pub mod locator;
pub mod specs;
pub mod extract;
pub mod filter;
pub mod search;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;
