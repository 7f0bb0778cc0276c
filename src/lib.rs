//! Invoice processing ROI estimator.
//!
//! This crate estimates the return on investment of moving from manual to
//! automated invoice processing. It provides the ROI calculator, persistence
//! of named scenarios, PDF scenario reports and the HTTP API tying them together.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod storage;
