//! Availability and scheduling engine for the Tavolo table-booking service.
//!
//! A pure decision/computation layer: opening-hours membership, time-band
//! classification, per-band capacity accounting, and recurrence expansion.
//! Persistence, notifications, and permission checks belong to the calling
//! layers; every operation here works only on its arguments and a
//! caller-owned, read-only configuration value.

pub mod band;
pub mod capacity;
pub mod error;
pub mod hours;
pub mod recur;
