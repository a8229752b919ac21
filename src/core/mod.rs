//! Ambient plumbing shared by the host and the engine.

pub mod config;
pub mod error;
pub mod logging;
