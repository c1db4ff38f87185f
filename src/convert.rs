//! Gregorian date to lunar detail conversion.

use tracing::warn;

use crate::chinese::{IcuChinese, LunisolarCalendar, fmt, overlay};
use crate::date::Date;

/// Everything shown for one day of the lunar calendar.
///
/// The empty detail (all labels empty, no special label) stands in for dates
/// the underlying calendar cannot convert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LunarDetail {
    /// Day name, e.g. `初五`; the month name on the first day of a month.
    pub day_label: String,
    /// Month name, e.g. `腊月`, or `闰月` for a leap month.
    pub month_label: &'static str,
    /// Zodiac animal of the lunar year.
    pub zodiac: &'static str,
    /// Festival or, failing that, solar term falling on the day.
    pub special: Option<&'static str>,
}

impl LunarDetail {
    /// The detail used when conversion fails.
    pub fn empty() -> Self {
        Self::default()
    }
    /// Returns `true` for the detail of an unconverted date.
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

/// Builds [`LunarDetail`]s on top of a [`LunisolarCalendar`].
///
/// # Example
///
/// ```
/// use yinli::{Converter, Date};
///
/// let converter: Converter = Converter::default();
/// let detail = converter.convert(Date::from_gregorian(2025, 1, 29).unwrap());
///
/// assert_eq!("正月", detail.day_label);
/// assert_eq!("蛇", detail.zodiac);
/// assert_eq!(Some("春节"), detail.special);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter<C = IcuChinese> {
    calendar: C,
}

impl<C: LunisolarCalendar> Converter<C> {
    pub fn new(calendar: C) -> Self {
        Self { calendar }
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Converts `date`, degrading to [`LunarDetail::empty`] if the calendar
    /// has no lunar date for it.
    pub fn convert(&self, date: Date) -> LunarDetail {
        let Some(c) = self.calendar.components(date) else {
            warn!(%date, "no lunisolar date, using empty detail");
            return LunarDetail::empty();
        };
        let (zodiac, month_label) = fmt::resolve(c.cyclic_year, c.month);
        LunarDetail {
            day_label: fmt::day(c.day, c.month),
            month_label,
            zodiac,
            special: overlay::special(c.month, c.day, date),
        }
    }
}

/// Converts `date` with the ICU Chinese calendar.
///
/// ```
/// use yinli::Date;
///
/// let detail = yinli::convert(Date::from_gregorian(2024, 9, 17).unwrap());
/// assert_eq!("十五", detail.day_label);
/// assert_eq!(Some("中秋"), detail.special);
/// ```
pub fn convert(date: Date) -> LunarDetail {
    let converter: Converter = Converter::default();
    converter.convert(date)
}
