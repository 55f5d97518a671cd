//! Shared utilities.

pub mod log_sanitizer;
