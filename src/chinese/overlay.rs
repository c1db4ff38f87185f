//! 節日與節氣
//!
//! 每日至多標注一項：先查農曆節日，無節日再以公曆日期近似推算節氣。節日優先，即使同日亦交節，也只標節日。

use tracing::trace;

use super::Month;
use crate::date::Date;

/// 農曆節日，以 `((月, 日), 名稱)` 列出，僅適用於平月。
pub const FESTIVALS: &[((u32, u32), &str)] = &[
    ((1, 1), "春节"),
    ((1, 15), "元宵"),
    ((2, 2), "龙抬头"),
    ((5, 5), "端午"),
    ((7, 7), "七夕"),
    ((7, 15), "中元"),
    ((8, 15), "中秋"),
    ((9, 9), "重阳"),
    ((12, 8), "腊八"),
    ((12, 23), "小年"),
    ((12, 30), "除夕"),
];

/// 二十四節氣及其近似公式常數，自小寒起依公曆順序排列，每個公曆月兩項。
pub const SOLAR_TERMS: [(&str, f64); 24] = [
    ("小寒", 5.4055),
    ("大寒", 20.12),
    ("立春", 3.87),
    ("雨水", 18.73),
    ("惊蛰", 5.63),
    ("春分", 20.646),
    ("清明", 4.81),
    ("谷雨", 20.1),
    ("立夏", 5.52),
    ("小满", 21.04),
    ("芒种", 5.678),
    ("夏至", 21.37),
    ("小暑", 7.108),
    ("大暑", 22.83),
    ("立秋", 7.5),
    ("处暑", 23.13),
    ("白露", 7.646),
    ("秋分", 23.042),
    ("寒露", 8.318),
    ("霜降", 23.438),
    ("立冬", 7.438),
    ("小雪", 22.36),
    ("大雪", 7.18),
    ("冬至", 21.94),
];

/// 每年的日數係數
const D: f64 = 0.2422;

/// 查農曆節日。閏月無節日。
///
/// # 用例
///
/// ```
/// use yinli::chinese::{overlay, Month::*};
///
/// assert_eq!(Some("中秋"), overlay::festival(Common(8), 15));
/// assert_eq!(None, overlay::festival(Leap(8), 15));
/// ```
pub fn festival(month: Month, day: u32) -> Option<&'static str> {
    let Month::Common(m) = month else {
        return None;
    };
    FESTIVALS
        .iter()
        .find(|(key, _)| *key == (m, day))
        .map(|&(_, name)| name)
}

/// 以近似公式 `[Y×D+C]−[Y/4]` 推算公曆 `year` 年第 `term` 個節氣（`0..24`，0 為小寒）所在日，`Y` 為年份末兩位。
///
/// 2000 年以前的年份加一日修正。此公式誤差約一日，並非精確天文推算。
///
/// # 用例
///
/// ```
/// use yinli::chinese::overlay;
///
/// assert_eq!(21, overlay::solar_term_day(2024, 11)); // 夏至
/// assert_eq!(22, overlay::solar_term_day(1999, 23)); // 冬至
/// ```
///
/// # Panics
///
/// 若 `term` 不在 `0..24` 間則 panic。
pub fn solar_term_day(year: i32, term: usize) -> i32 {
    let (_, c) = SOLAR_TERMS[term];
    let y = f64::from(year.rem_euclid(100));
    let day = (y * D + c).floor() as i32 - (y / 4.0).floor() as i32;
    if year < 2000 { day + 1 } else { day }
}

/// 推算給定公曆日期是否交節，是則返回節氣名。
///
/// # 用例
///
/// ```
/// use yinli::Date;
/// use yinli::chinese::overlay;
///
/// let date = Date::from_gregorian(2025, 12, 21).unwrap();
/// assert_eq!(Some("冬至"), overlay::solar_term(date));
/// assert_eq!(None, overlay::solar_term(date + 1));
/// ```
pub fn solar_term(date: Date) -> Option<&'static str> {
    let (year, month, day) = date.gregorian();
    let first = (month as usize - 1) * 2;
    (first..first + 2)
        .find(|&term| solar_term_day(year, term) == day)
        .map(|term| SOLAR_TERMS[term].0)
}

/// 取得某日的特殊標注：節日優先，其次節氣，皆無則為 `None`。
///
/// `month` 與 `day` 為 `date` 對應的農曆月日。
pub fn special(month: Month, day: u32, date: Date) -> Option<&'static str> {
    if let Some(name) = festival(month, day) {
        return Some(name);
    }
    let term = solar_term(date);
    if term.is_some() {
        trace!(%date, ?term, "solar term");
    }
    term
}
