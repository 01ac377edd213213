//! System-level modules
//!
//! - Logging setup

pub mod logging;
