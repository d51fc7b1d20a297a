//! Core entry point for the swap_report crate.
//!
//! Reads the CSV table of timings written by the external `swap_bench`
//! program, prints a preview of the most recent runs, and renders the latest
//! run as a two-bar comparison chart saved to a PNG file.

pub mod chart;
pub mod model;
pub mod report;
pub mod viewer;

pub use report::{ReportError, ReportRenderer};
