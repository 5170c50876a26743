//! Publication-date freshness filtering.
//!
//! Freshness is best-effort: articles whose publication date is missing or
//! unparsable are always kept.

use crate::models::ArticleRecord;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use tracing::{debug, info};

/// Parse a raw published timestamp into UTC.
///
/// Accepts RFC 3339 (`Z` or an offset), `YYYY-MM-DDTHH:MM:SS[.f]` with a
/// compact `+HHMM` offset or none (taken as UTC), and bare `YYYY-MM-DD`
/// dates (midnight UTC).
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Keep records published within the last `max_age_hours` before `now`.
///
/// `None` or zero disables the filter.
pub fn filter_by_freshness(
    records: Vec<ArticleRecord>,
    max_age_hours: Option<u64>,
    now: DateTime<Utc>,
) -> Vec<ArticleRecord> {
    let Some(hours) = max_age_hours.filter(|h| *h > 0) else {
        return records;
    };
    let Some(cutoff) = i64::try_from(hours)
        .ok()
        .and_then(Duration::try_hours)
        .and_then(|window| now.checked_sub_signed(window))
    else {
        return records;
    };

    let before = records.len();
    let kept: Vec<ArticleRecord> = records
        .into_iter()
        .filter(|record| {
            match record.metadata.published.as_deref().and_then(parse_published) {
                Some(published) if published < cutoff => {
                    debug!(url = %record.url, %published, "Dropping stale article");
                    false
                }
                _ => true,
            }
        })
        .collect();

    info!(
        before,
        after = kept.len(),
        max_age_hours = hours,
        "Filtered records by freshness"
    );
    kept
}
