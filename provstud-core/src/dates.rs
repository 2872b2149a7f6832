use crate::models::DateRange;
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Parse a dataset timestamp. Accepts RFC 3339 (the portal's wire format)
/// or a bare `YYYY-MM-DD` date, taken as midnight UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Classify a raw timestamp against a named range, relative to an explicit
/// `now`. All calendar arithmetic is on the UTC calendar:
/// - `Today`: same calendar date as `now`
/// - `Week`: within the trailing 7 days of `now` (future scans pass)
/// - `Month`: same month and year as `now`
/// - `Quarter`: same quarter (month / 3) and year as `now`
///
/// `AllTime` passes every batch, including ones whose timestamp is absent
/// or unparseable; the narrower ranges exclude those.
pub fn in_range(raw: Option<&str>, now: DateTime<Utc>, range: DateRange) -> bool {
    let ts = match raw.and_then(parse_timestamp) {
        Some(ts) => ts,
        None => return range == DateRange::AllTime,
    };

    match range {
        DateRange::AllTime => true,
        DateRange::Today => ts.date_naive() == now.date_naive(),
        DateRange::Week => ts >= now - Duration::days(7),
        DateRange::Month => ts.month() == now.month() && ts.year() == now.year(),
        DateRange::Quarter => {
            ts.month0() / 3 == now.month0() / 3 && ts.year() == now.year()
        }
    }
}
