//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_at` and snapshot times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Render a timestamp as a calendar date, `YYYY-MM-DD`.
#[must_use]
pub fn format_date(ts: &Timestamp) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_format_a_calendar_date() {
        let ts: Timestamp = "2017-03-01T10:00:00Z".parse().unwrap();
        assert_eq!(format_date(&ts), "2017-03-01");
    }
}
