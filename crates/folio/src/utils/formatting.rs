//! Formatting utilities for display values.

use chrono::{DateTime, Datelike, Utc};

/// Calendar year (UTC) of `at`, as printed in the copyright line.
pub fn copyright_year(at: DateTime<Utc>) -> i32 {
    at.year()
}

/// Current calendar year (UTC), for the copyright line.
pub fn current_year() -> i32 {
    copyright_year(Utc::now())
}
