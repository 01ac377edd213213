//! localshort - a local-only URL shortener
//!
//! Fabricates short ids for URLs and keeps the resulting list in a single
//! durable key-value entry on this machine. Nothing is served and nothing
//! redirects; the list is the whole product.
//!
//! # Architecture
//! - `store`: the record store (load once, prepend, delete, clear, mirror to storage)
//! - `services`: the shortening operation
//! - `storage`: durable key-value backends and the stored record format
//! - `interfaces`: the CLI front end
//! - `config`: configuration loading
//! - `system`: logging setup

pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod services;
pub mod storage;
pub mod store;
pub mod system;
pub mod utils;
