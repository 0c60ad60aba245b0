//! Station analysis and route briefing core
//!
//! Everything in this module is pure computation over decoded
//! observations and SIGMET records; the network lives in [`crate::awc`]
//! and the HTTP surface in [`crate::api`].

pub mod analyzer;
pub mod geometry;
pub mod route;
pub mod stations;
pub mod units;
