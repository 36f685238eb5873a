//! Time helpers
//!
//! Audit columns are `i64` Unix millis end to end; the repository layer
//! never handles timezone-aware values.

/// Current wall clock as Unix millis.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
