//! Universal time, used for finding the civil date of "now".
//!
//! Leap seconds are ignored: the system clock counts Unix seconds, which
//! already follow UTC days.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::date::Date;

/// Julian date of the Unix epoch, 1970-01-01T00:00Z.
const UNIX_EPOCH_JD: f64 = 2440587.5;

/// [Universal time](https://en.wikipedia.org/wiki/Universal_Time), the actual
/// civil time used for determining the actual date at a given time point,
/// represented in Julian date (JD).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Ut(pub f64);

impl Ut {
    /// Reads the system clock.
    ///
    /// A clock set before 1970 is treated as the Unix epoch.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self::from_unix_seconds(secs)
    }
    /// Converts seconds since the Unix epoch.
    ///
    /// # Example
    ///
    /// ```
    /// use yinli::time_scales::Ut;
    ///
    /// assert_eq!(2440587.5, Ut::from_unix_seconds(0.0).0);
    /// ```
    pub fn from_unix_seconds(secs: f64) -> Self {
        Ut(UNIX_EPOCH_JD + secs / 86400.0)
    }
    /// Returns the date at the time point in timezone ahead (east) of UTC by
    /// `tz_offset_minutes`minutes.
    ///
    /// For Beijing time (UTC+8), `tz_offset_minutes` should be +480.
    ///
    /// # Example
    ///
    /// ```
    /// use yinli::time_scales::Ut;
    ///
    /// // 2000-01-01T20:00Z
    /// let ut = Ut::from_unix_seconds(946_756_800.0);
    /// assert_eq!((2000, 1, 1), ut.date_in_timezone(0).gregorian());
    /// assert_eq!((2000, 1, 2), ut.date_in_timezone(480).gregorian());
    /// ```
    pub fn date_in_timezone(&self, tz_offset_minutes: i32) -> Date {
        let jdn = (self.0 + tz_offset_minutes as f64 / 1440.0).round() as u32;
        Date::from_jdn(jdn)
    }
}
