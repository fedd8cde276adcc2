//! Opening-hours evaluation.

use chrono::NaiveTime;

/// True when `now` falls strictly between `opens_at` and `closes_at`.
///
/// Both bounds are exclusive: a restaurant is closed at the exact opening
/// and closing instants. Ranges that wrap past midnight (`closes_at <
/// opens_at`) never match and so read as always closed.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use nearby_eats::domain::is_open;
///
/// let at = |h| NaiveTime::from_hms_opt(h, 0, 0).expect("valid time");
/// assert!(is_open(at(12), at(10), at(22)));
/// assert!(!is_open(at(10), at(10), at(22)));
/// ```
pub fn is_open(now: NaiveTime, opens_at: NaiveTime, closes_at: NaiveTime) -> bool {
    opens_at < now && now < closes_at
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, second).expect("valid time")
    }

    #[rstest]
    #[case(at(12, 0, 0), true)]
    #[case(at(10, 0, 0), false)]
    #[case(at(10, 0, 1), true)]
    #[case(at(21, 0, 0), false)]
    #[case(at(20, 59, 59), true)]
    #[case(at(23, 0, 0), false)]
    #[case(at(6, 0, 0), false)]
    fn respects_exclusive_bounds(#[case] now: NaiveTime, #[case] expected: bool) {
        assert_eq!(is_open(now, at(10, 0, 0), at(21, 0, 0)), expected);
    }

    #[rstest]
    #[case(at(23, 30, 0))]
    #[case(at(1, 0, 0))]
    fn overnight_ranges_read_as_closed(#[case] now: NaiveTime) {
        assert!(!is_open(now, at(22, 0, 0), at(2, 0, 0)));
    }
}
