//! 格式化日期相關功能：生肖、月名、日名

use super::Month;

/// 漢數字，第 `0..=10` 項分別為「〇」到「十」。
pub const NUMERALS: &[&str] = &[
    "〇", "一", "二", "三", "四", "五", "六", "七", "八", "九", "十",
];

/// 平月月名，第 0 項為正月。
pub const MONTH_NAMES: &[&str] = &[
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

/// 閏月及無法識別的月份一律用此名。
pub const LEAP_MONTH_NAME: &str = "闰月";

/// 十二生肖，第 0 項為鼠。
pub const ZODIAC: &[&str] = &[
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// 干支紀年序號轉為生肖。序號 1 為甲子，屬鼠。
///
/// # 用例
///
/// ```
/// use yinli::chinese;
///
/// assert_eq!("鼠", chinese::fmt::zodiac(1));
/// assert_eq!("蛇", chinese::fmt::zodiac(42)); // 乙巳
/// ```
pub fn zodiac(cyclic_year: u32) -> &'static str {
    ZODIAC[(i64::from(cyclic_year) - 1).rem_euclid(12) as usize]
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「腊月」。
///
/// 閏月不帶序號，與序號不在 `1..=12` 的月份同樣稱「闰月」。
///
/// # 用例
///
/// ```
/// use yinli::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("闰月", chinese::fmt::month(Leap(1)));
/// assert_eq!("闰月", chinese::fmt::month(Common(13)));
/// ```
pub fn month(m: Month) -> &'static str {
    match m {
        Month::Common(n @ 1..=12) => MONTH_NAMES[n as usize - 1],
        _ => LEAP_MONTH_NAME,
    }
}

/// 一併取得生肖與月名，返回格式為 `(生肖, 月名)`。
pub fn resolve(cyclic_year: u32, m: Month) -> (&'static str, &'static str) {
    (zodiac(cyclic_year), month(m))
}

/// 取得日名。初一以月名代之，其餘為「初二」到「初十」、「十一」到「十九」、「二十」、「廿一」到「廿九」、「三十」。
///
/// # 用例
///
/// ```
/// use yinli::chinese::{self, Month::*};
///
/// assert_eq!("八月", chinese::fmt::day(1, Common(8)));
/// assert_eq!("初十", chinese::fmt::day(10, Common(8)));
/// assert_eq!("廿五", chinese::fmt::day(25, Common(8)));
/// assert_eq!("三十", chinese::fmt::day(30, Common(8)));
/// ```
///
/// `d` 須在 `1..=30` 間；調試構建中違者 panic，否則返回空串。
pub fn day(d: u32, m: Month) -> String {
    debug_assert!((1..=30).contains(&d), "day {} not in 1..=30", d);
    let (prefix, n) = match d {
        1 => return month(m).to_owned(),
        10 => return "初十".to_owned(),
        20 => return "二十".to_owned(),
        30 => return "三十".to_owned(),
        0 => return String::new(),
        2..=9 => ("初", d),
        11..=19 => ("十", d - 10),
        21..=29 => ("廿", d - 20),
        _ => ("三", d - 30),
    };
    match NUMERALS.get(n as usize) {
        Some(num) => prefix.to_owned() + num,
        None => String::new(),
    }
}
