//! Keeps `versions.json` in sync with the Factorio download archive.
//!
//! - [`manifest`]: manifest model and file store
//! - [`remote`]: release source trait, parsers and the HTTP implementation
//! - [`updater`]: reconcile-and-write pipeline

pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod remote;
pub mod updater;
