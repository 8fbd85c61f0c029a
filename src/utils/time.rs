//! Time and timestamp utilities

/// Get current Unix timestamp in milliseconds
pub fn current_timestamp_ms() -> u64 {
    // Clamp pre-epoch clocks to 0
    chrono::Utc::now().timestamp_millis().max(0) as u64
}
