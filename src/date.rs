//! Calendar-independent date.

use std::fmt;
use std::ops::{Add, RangeInclusive, Sub};

use crate::error::{Error, Result};

/// Gregorian years accepted by [`Date::from_gregorian`].
///
/// The first year starts 38 days after JDN 0, so a month grid of any valid
/// date stays at or above JDN 0.
pub const GREGORIAN_YEARS: RangeInclusive<i32> = -4712..=1_000_000;

/// A calendar-independent date.
///
/// [`Date::from_gregorian`] accepts astronomical years [`GREGORIAN_YEARS`] of
/// the proleptic Gregorian calendar, which all Gregorian accessors use.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    jdn: u32,
}

impl Date {
    /// Creates a `Date` with a Julian day number (JDN).
    pub fn from_jdn(jdn: u32) -> Self {
        Self { jdn }
    }
    /// Returns the Julian day number (JDN) of the date.
    pub fn jdn(&self) -> u32 {
        self.jdn
    }

    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` should be an astronomical year number, i.e. 1 BC is `0`, 2
    /// BC is `-1`, etc.
    ///
    /// Returns `None` if `month` or `day` does not name a day of that year, or
    /// if the result date is out of supported range.
    ///
    /// # Example
    ///
    /// ```
    /// use yinli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(2451545, date.jdn());
    /// assert!(Date::from_gregorian(2023, 2, 29).is_none());
    /// ```
    pub fn from_gregorian(year: i32, month: i32, day: i32) -> Option<Self> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return None;
        }
        let (y, m, d) = (year, month, day);
        if !GREGORIAN_YEARS.contains(&y) {
            return None;
        }
        u32::try_from(
            (1461 * (y + 4800 + (m - 14) / 12)) / 4 + (367 * (m - 2 - 12 * ((m - 14) / 12))) / 12
                - (3 * ((y + 4900 + (m - 14) / 12) / 100)) / 4
                + d
                - 32075,
        )
        .map(Self::from_jdn)
        .ok()
    }
    /// Same as [`Date::from_gregorian`], reporting [`Error::InvalidDate`]
    /// instead of `None`.
    pub fn try_from_gregorian(year: i32, month: i32, day: i32) -> Result<Self> {
        Self::from_gregorian(year, month, day).ok_or(Error::InvalidDate { year, month, day })
    }
    /// Represents the date in Gregorian calendar.
    ///
    /// Returns in `(year, month, day)` format.
    ///
    /// # Example
    ///
    /// ```
    /// use yinli::Date;
    ///
    /// let date = Date::from_jdn(2451545);
    /// assert_eq!((2000, 1, 1), date.gregorian());
    /// ```
    pub fn gregorian(&self) -> (i32, i32, i32) {
        let jdn = self.jdn as i64;
        let f = jdn + 1401 + (((4 * jdn + 274277) / 146097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = (h % 153) / 5 + 1;
        let month = (h / 153 + 2) % 12 + 1;
        let year = e / 1461 - 4716 + (12 + 2 - month) / 12;
        (year as i32, month as i32, day as i32)
    }
    pub fn year(&self) -> i32 {
        self.gregorian().0
    }
    pub fn month(&self) -> i32 {
        self.gregorian().1
    }
    pub fn day(&self) -> i32 {
        self.gregorian().2
    }
    /// Formats the date in ISO 8601 format.
    ///
    /// # Example
    ///
    /// ```
    /// use yinli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!("2000-01-01", date.iso_gregorian());
    /// ```
    pub fn iso_gregorian(&self) -> String {
        let (y, m, d) = self.gregorian();
        format!("{:04}-{:02}-{:02}", y, m, d)
    }

    /// Returns the day of week of the date, in ISO-8601 numbering (i.e.
    /// `1..=7` for Monday through Sunday)
    ///
    /// # Example
    ///
    /// ```
    /// use yinli::Date;
    ///
    /// let date = Date::from_gregorian(2000, 1, 1).unwrap();
    /// assert_eq!(6, date.day_of_week()); // Saturday
    /// ```
    pub fn day_of_week(&self) -> i32 {
        (self.jdn % 7 + 1) as i32
    }
    /// Returns the day of week counted from Sunday, i.e. `0..=6` for Sunday
    /// through Saturday. This is the column of the date in a Sunday-first
    /// calendar grid.
    ///
    /// ```
    /// use yinli::Date;
    ///
    /// assert_eq!(0, Date::from_gregorian(2024, 9, 1).unwrap().weekday_from_sunday());
    /// assert_eq!(6, Date::from_gregorian(2000, 1, 1).unwrap().weekday_from_sunday());
    /// ```
    pub fn weekday_from_sunday(&self) -> i32 {
        ((self.jdn + 1) % 7) as i32
    }

    /// Returns the first day of the Gregorian month containing the date.
    pub fn first_of_month(&self) -> Self {
        *self + (1 - self.day())
    }
    /// Returns the number of days in the Gregorian month containing the date.
    pub fn days_in_month(&self) -> i32 {
        let (y, m, _) = self.gregorian();
        days_in_month(y, m)
    }
    /// Moves the date by `months` whole Gregorian months, clamping the day to
    /// the length of the target month.
    ///
    /// Returns `None` if the result date is out of supported range.
    ///
    /// ```
    /// use yinli::Date;
    ///
    /// let date = Date::from_gregorian(2024, 1, 31).unwrap();
    /// assert_eq!("2024-02-29", date.add_months(1).unwrap().iso_gregorian());
    /// assert_eq!("2023-11-30", date.add_months(-2).unwrap().iso_gregorian());
    /// ```
    pub fn add_months(&self, months: i32) -> Option<Self> {
        let (y, m, d) = self.gregorian();
        let (year, month) = shift_months(y, m, months);
        let year = i32::try_from(year).ok()?;
        Self::from_gregorian(year, month, d.min(days_in_month(year, month)))
    }
    /// Returns `true` if both dates fall in the same Gregorian month of the
    /// same year.
    pub fn same_month(&self, other: &Date) -> bool {
        let (y0, m0, _) = self.gregorian();
        let (y1, m1, _) = other.gregorian();
        (y0, m0) == (y1, m1)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_gregorian())
    }
}

/// Saturates at JDN 0 and `u32::MAX`.
impl Add<i32> for Date {
    type Output = Date;
    fn add(self, rhs: i32) -> Self::Output {
        Date::from_jdn(self.jdn.saturating_add_signed(rhs))
    }
}
impl Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> Self::Output {
        self.jdn as i32 - rhs.jdn as i32
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Determines if `year` is a leap year in Gregorian calendar.
    pub fn from_gregorian(year: i32) -> Self {
        if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
            Self::Leap
        } else {
            Self::Common
        }
    }
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// Number of days of `month` in Gregorian `year`, `0` if `month` is not in
/// `1..=12`.
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => 28 + YearType::from_gregorian(year).is_leap() as i32,
        _ => 0,
    }
}

/// `(year, month)` reached from Gregorian `year`-`month` after `months`
/// months. The year is not range checked.
pub(crate) fn shift_months(year: i32, month: i32, months: i32) -> (i64, i32) {
    let total = i64::from(year) * 12 + i64::from(month - 1) + i64::from(months);
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as i32)
}
