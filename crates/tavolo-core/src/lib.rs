//! Tavolo foundation crate: configuration loading, core errors, and the
//! wall-clock/calendar primitives shared by the scheduling engine.

pub mod config;
pub mod error;
pub mod time;
