//! Time-of-day dependent serving radius.

use chrono::NaiveTime;

/// Peak windows as inclusive `(start_hour, end_hour)` pairs on the hour.
const PEAK_WINDOWS: [(u32, u32); 3] = [(8, 10), (13, 14), (19, 21)];

/// Radius used during peak windows unless configured otherwise.
pub const DEFAULT_PEAK_RADIUS_KM: f64 = 3.0;

/// Radius used outside peak windows unless configured otherwise.
pub const DEFAULT_NORMAL_RADIUS_KM: f64 = 5.0;

/// Maps a time of day to the delivery radius in kilometres.
///
/// Peak windows are 08:00–10:00, 13:00–14:00 and 19:00–21:00, both ends
/// inclusive.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use nearby_eats::domain::ServingRadiusPolicy;
///
/// let policy = ServingRadiusPolicy::default();
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).expect("valid time");
/// let eleven = NaiveTime::from_hms_opt(11, 0, 0).expect("valid time");
/// assert_eq!(policy.radius_km(nine), 3.0);
/// assert_eq!(policy.radius_km(eleven), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServingRadiusPolicy {
    peak_radius_km: f64,
    normal_radius_km: f64,
}

impl ServingRadiusPolicy {
    pub fn new(peak_radius_km: f64, normal_radius_km: f64) -> Self {
        Self {
            peak_radius_km,
            normal_radius_km,
        }
    }

    pub fn peak_radius_km(&self) -> f64 {
        self.peak_radius_km
    }

    pub fn normal_radius_km(&self) -> f64 {
        self.normal_radius_km
    }

    /// Radius in kilometres that applies at `now`.
    pub fn radius_km(&self, now: NaiveTime) -> f64 {
        if is_peak(now) {
            self.peak_radius_km
        } else {
            self.normal_radius_km
        }
    }
}

impl Default for ServingRadiusPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PEAK_RADIUS_KM, DEFAULT_NORMAL_RADIUS_KM)
    }
}

fn is_peak(now: NaiveTime) -> bool {
    PEAK_WINDOWS.iter().any(|&(start, end)| {
        let bounds = NaiveTime::from_hms_opt(start, 0, 0).zip(NaiveTime::from_hms_opt(end, 0, 0));
        matches!(bounds, Some((start, end)) if start <= now && now <= end)
    })
}
