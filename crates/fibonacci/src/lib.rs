//! Application logic for the `fibonacci` CLI driver and its unit-test harness.

pub mod app;
pub mod config;
pub mod harness;
pub mod logging;
