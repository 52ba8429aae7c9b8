use chrono::{DateTime, Utc};

const DAYS_PER_MONTH: i64 = 30;
const DAYS_PER_YEAR: i64 = 365;

// Compacts a view count: 999 -> "999", 1500 -> "1.5K", 2_000_000 -> "2M"
pub fn format_views(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    if count < 1_000_000 {
        return scaled(count, 1_000, 'K');
    }
    scaled(count, 1_000_000, 'M')
}

// One decimal, rounded half up, with a trailing ".0" dropped.
fn scaled(count: u64, unit: u64, suffix: char) -> String {
    let tenths = (u128::from(count) * 10 + u128::from(unit) / 2) / u128::from(unit);
    let whole = tenths / 10;
    let fraction = tenths % 10;
    if fraction == 0 {
        format!("{whole}{suffix}")
    } else {
        format!("{whole}.{fraction}{suffix}")
    }
}

/// Whole days elapsed between `past` and `now`, never negative.
pub fn days_since(past: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    now.signed_duration_since(past).num_days().max(0)
}

pub fn time_ago(past: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = days_since(past, now);
    let months = days / DAYS_PER_MONTH;
    let years = days / DAYS_PER_YEAR;

    if years > 0 {
        return ago(years, "year");
    }
    if months > 0 {
        return ago(months, "month");
    }
    ago(days, "day")
}

fn ago(amount: i64, unit: &str) -> String {
    let plural = if amount == 1 { "" } else { "s" };
    format!("{amount} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn small_counts_are_literal() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(7), "7");
        assert_eq!(format_views(999), "999");
    }

    #[test]
    fn thousands_use_k_suffix() {
        assert_eq!(format_views(1_000), "1K");
        assert_eq!(format_views(1_500), "1.5K");
        assert_eq!(format_views(2_000), "2K");
        assert_eq!(format_views(1_250), "1.3K");
        assert_eq!(format_views(1_049), "1K");
        assert_eq!(format_views(123_456), "123.5K");
    }

    #[test]
    fn millions_use_m_suffix() {
        assert_eq!(format_views(1_000_000), "1M");
        assert_eq!(format_views(2_500_000), "2.5M");
        assert_eq!(format_views(12_340_000), "12.3M");
    }

    #[test]
    fn labels_pick_the_largest_unit() {
        let now = now();
        assert_eq!(time_ago(now - Duration::hours(3), now), "0 days ago");
        assert_eq!(time_ago(now - Duration::days(1), now), "1 day ago");
        assert_eq!(time_ago(now - Duration::days(29), now), "29 days ago");
        assert_eq!(time_ago(now - Duration::days(30), now), "1 month ago");
        assert_eq!(time_ago(now - Duration::days(95), now), "3 months ago");
        assert_eq!(time_ago(now - Duration::days(364), now), "12 months ago");
        assert_eq!(time_ago(now - Duration::days(365), now), "1 year ago");
        assert_eq!(time_ago(now - Duration::days(800), now), "2 years ago");
    }

    #[test]
    fn future_timestamps_clamp_to_zero() {
        let now = now();
        assert_eq!(days_since(now + Duration::days(3), now), 0);
        assert_eq!(time_ago(now + Duration::days(3), now), "0 days ago");
    }

    #[test]
    fn day_count_is_monotonic() {
        let now = now();
        let mut previous = i64::MAX;
        for hours_back in (0..2_000).rev().step_by(7) {
            let t = now - Duration::hours(hours_back);
            let days = days_since(t, now);
            assert!(days <= previous);
            previous = days;
        }
    }
}
