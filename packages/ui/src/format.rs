//! Display formatting helpers.

use chrono::{DateTime, Utc};

/// "May 28, 2024" for a millisecond epoch timestamp. Out-of-range values
/// render as an empty string rather than a panic.
pub fn format_date(ms: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.format("%b %e, %Y").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_epoch_millis() {
        // 2024-05-28T15:12:26.804Z
        assert_eq!(format_date(1716909146804), "May 28, 2024");
    }

    #[test]
    fn out_of_range_is_empty() {
        assert_eq!(format_date(i64::MAX), "");
    }
}
