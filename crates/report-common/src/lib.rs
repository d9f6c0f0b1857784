//! Shared client logic for the report dispatch UI.
//!
//! Everything in this crate is plain data shaping: wire payload types,
//! error classification, history aggregation and chart geometry. No
//! browser APIs, so all of it is testable natively.

pub mod chart;
pub mod error_map;
pub mod format;
pub mod history;
pub mod types;
pub mod whatsapp;
