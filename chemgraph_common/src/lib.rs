//! Common configuration and shared helpers for the chemgraph workspace.
//!
//! This crate provides the search configuration consumed by the
//! isomorphism engine and a logger bootstrap used across test suites.

mod config;
mod logging;

pub use crate::config::*;
pub use crate::logging::*;
