//! UI utilities for terminal output
//!
//! Progress feedback is drawn on stderr so stdout carries only the report.

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
