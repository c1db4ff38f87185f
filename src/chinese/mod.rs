//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 農曆年月日的推算本身交由 [`icu_calendar`] 完成（見 [`IcuChinese`]），本模塊在其上提供月名、日名、生肖、節日及節氣。

use std::ops::RangeInclusive;

use icu_calendar::cal::Chinese;
use icu_calendar::{Date as IcuDate, Ref};
use tracing::trace;

use crate::date::Date;

pub mod fmt;
pub mod overlay;

/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「腊月」，閏月一律稱「闰月」。
    pub fn name(&self) -> &'static str {
        fmt::month(*self)
    }
}

/// 某日的農曆年月日，由 [`LunisolarCalendar`] 逐次推算，不作緩存。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunisolarComponents {
    /// 干支紀年序號，`1..=60`，1 為甲子（鼠年）
    pub cyclic_year: u32,
    /// 月
    pub month: Month,
    /// 日，`1..=30`
    pub day: u32,
}

impl LunisolarComponents {
    /// 該年生肖
    pub fn zodiac(&self) -> &'static str {
        fmt::zodiac(self.cyclic_year)
    }
}

/// 公曆日期到農曆年月日的換算。
///
/// 無法換算時返回 `None`，由調用方決定如何降級。
pub trait LunisolarCalendar {
    fn components(&self, date: Date) -> Option<LunisolarComponents>;
}

/// [`IcuChinese`] 換算的公曆年份範圍。範圍外 ICU 的新年偏移溢出，一律不換算。
pub const ICU_YEARS: RangeInclusive<i32> = 1..=9999;

/// 以 ICU4X 的中國曆實現 [`LunisolarCalendar`]。
///
/// 公曆年份在 [`ICU_YEARS`] 之外者返回 `None`。
///
/// # 用例
///
/// ```
/// use yinli::Date;
/// use yinli::chinese::{IcuChinese, LunisolarCalendar, Month::*};
///
/// let date = Date::from_gregorian(2017, 7, 23).unwrap();
/// let c = IcuChinese::new().components(date).unwrap();
///
/// assert_eq!((34, Leap(6), 1), (c.cyclic_year, c.month, c.day)); // 丁酉年閏六月初一
/// ```
#[derive(Debug, Clone)]
pub struct IcuChinese {
    calendar: Chinese,
}

impl IcuChinese {
    pub const fn new() -> Self {
        Self {
            calendar: Chinese::new(),
        }
    }
}

impl Default for IcuChinese {
    fn default() -> Self {
        Self::new()
    }
}

impl LunisolarCalendar for IcuChinese {
    fn components(&self, date: Date) -> Option<LunisolarComponents> {
        let (y, m, d) = date.gregorian();
        if !ICU_YEARS.contains(&y) {
            trace!(%date, "year outside ICU range");
            return None;
        }
        let iso = IcuDate::try_new_iso(y, u8::try_from(m).ok()?, u8::try_from(d).ok()?).ok()?;
        let lunar = iso.to_calendar(Ref(&self.calendar));
        let month_info = lunar.month();
        let num = u32::from(month_info.month_number());
        let month = if month_info.is_leap() {
            Month::Leap(num)
        } else {
            Month::Common(num)
        };
        let components = LunisolarComponents {
            cyclic_year: u32::from(lunar.cyclic_year().year),
            month,
            day: u32::from(lunar.day_of_month().0),
        };
        trace!(%date, ?components, "lunisolar components");
        Some(components)
    }
}
