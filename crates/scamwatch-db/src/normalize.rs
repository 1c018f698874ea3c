//! Post date normalization.

use chrono::{NaiveDate, NaiveTime};

/// Source format used by the site's rendered post dates, e.g. `"Dec 4, 2024"`.
const SOURCE_FORMAT: &str = "%b %d, %Y";

/// Normalize a post date from `"Mon D, YYYY"` to an ISO date-time string at
/// midnight, e.g. `"Dec 4, 2024"` → `"2024-12-04T00:00:00"`.
///
/// Input that does not match the source format is kept as-is (logged, never
/// fatal).
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, SOURCE_FORMAT) {
        Ok(date) => date
            .and_time(NaiveTime::MIN)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string(),
        Err(e) => {
            tracing::warn!(raw, error = %e, "date did not match source format — keeping raw value");
            raw.to_string()
        }
    }
}
