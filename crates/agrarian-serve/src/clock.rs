//! Wall-clock helpers used by response bodies.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Local;

/// Current local time as an ISO-8601 string without offset.
///
/// Always carries microsecond precision, e.g. `2026-10-16T09:41:07.123456`.
pub fn now_iso8601() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Seconds since the UNIX epoch, with sub-second precision.
pub fn epoch_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn iso8601_is_parsable() {
        let ts = now_iso8601();
        assert!(NaiveDateTime::parse_from_str(&ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
        assert_eq!(ts.len(), "2026-10-16T09:41:07.123456".len());
    }

    #[test]
    fn iso8601_sorts_chronologically() {
        let first = now_iso8601();
        let second = now_iso8601();
        assert!(first <= second);
    }

    #[test]
    fn epoch_seconds_is_absolute() {
        // 2020-09-13, well before any build of this crate.
        assert!(epoch_seconds() > 1_600_000_000.0);
    }
}
