#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Terminal client for capturing property valuations and opening their
//! reports from a valuation service.

pub mod client;
pub mod config;
pub mod controller;
pub mod model;
pub mod telemetry;
pub mod tui;
