// SPDX-License-Identifier: Apache-2.0

//! Text utility functions for starpick.
//!
//! Provides number and relative time formatting used when presenting picks.

use chrono::{DateTime, Utc};

/// Whole days elapsed between `updated_at` and `now`.
///
/// Negative when `updated_at` lies in the future.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use starpick_core::utils::days_since;
///
/// let now = Utc::now();
/// assert_eq!(days_since(&(now - Duration::days(3)), &now), 3);
/// assert_eq!(days_since(&(now - Duration::hours(23)), &now), 0);
/// ```
#[must_use]
pub fn days_since(updated_at: &DateTime<Utc>, now: &DateTime<Utc>) -> i64 {
    now.signed_duration_since(*updated_at).num_days()
}

/// Formats a day count as "N days ago".
///
/// # Examples
///
/// ```
/// use starpick_core::utils::format_days_ago;
///
/// assert_eq!(format_days_ago(1), "1 day ago");
/// assert_eq!(format_days_ago(42), "42 days ago");
/// ```
#[must_use]
pub fn format_days_ago(days: i64) -> String {
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{days} days ago")
    }
}

/// Formats a count with comma thousands separators.
///
/// # Examples
///
/// ```
/// use starpick_core::utils::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    // ========================================================================
    // days_since() tests
    // ========================================================================

    #[test]
    fn days_since_same_instant_is_zero() {
        let now = Utc::now();
        assert_eq!(days_since(&now, &now), 0);
    }

    #[test]
    fn days_since_truncates_partial_days() {
        let now = Utc::now();
        let then = now - Duration::days(10) - Duration::hours(23);
        assert_eq!(days_since(&then, &now), 10);
    }

    #[test]
    fn days_since_future_is_negative() {
        let now = Utc::now();
        assert_eq!(days_since(&(now + Duration::days(2)), &now), -2);
    }

    // ========================================================================
    // format_count() tests
    // ========================================================================

    #[test]
    fn format_count_small_numbers_unchanged() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn format_count_inserts_separators() {
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(100_000), "100,000");
        assert_eq!(format_count(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn format_days_ago_singular_and_plural() {
        assert_eq!(format_days_ago(0), "0 days ago");
        assert_eq!(format_days_ago(1), "1 day ago");
        assert_eq!(format_days_ago(365), "365 days ago");
    }
}
