//! Shared test utilities for the md-repair workspace.
//!
//! This crate is a dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`parsers`]: stand-ins for the external Markdown parser, from a faithful
//!   identity to parsers that drop, duplicate or inject markers
//! - [`config`]: [`TestConfigDir`](config::TestConfigDir) for file-based
//!   configuration tests

pub mod config;
pub mod parsers;
