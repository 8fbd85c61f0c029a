//! Utility functions and helpers

pub mod time;

pub use time::current_timestamp_ms;
