//! Publishes a tinydns data file to a hosted DNS provider.
//!
//! The data file is loaded into a [`zonefile::Zone`], its `Z` record picks
//! the hosted zone, and the address and alias records are reconciled into it
//! after split-horizon lines are dropped.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod delete;
pub mod error;
pub mod horizon;
pub mod providers;
pub mod reconcile;
pub mod resolver;
pub mod zonefile;

pub use error::{Error, Result};
