//! Settings for the calendar view.

use serde::Deserialize;

use crate::error::{Error, Result};

/// First column of the month grid.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Offset of this weekday counted from Sunday.
    pub fn offset_from_sunday(self) -> i32 {
        match self {
            WeekStart::Sunday => 0,
            WeekStart::Monday => 1,
        }
    }
}

/// View settings.
///
/// Loaded from TOML with [`Settings::from_toml_str`]; every field is optional.
///
/// # Example
///
/// ```
/// use yinli::{Settings, WeekStart};
///
/// let settings = Settings::from_toml_str("week_start = \"monday\"\nmin_year = 1970").unwrap();
///
/// assert_eq!(WeekStart::Monday, settings.week_start);
/// assert_eq!((1970, 2100), (settings.min_year, settings.max_year));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// First column of the month grid.
    #[serde(default)]
    pub week_start: WeekStart,
    /// Earliest year navigation may reach, inclusive.
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    /// Latest year navigation may reach, inclusive.
    #[serde(default = "default_max_year")]
    pub max_year: i32,
    /// Offset of local time east of UTC, used to find today's date.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_minutes: i32,
}

fn default_min_year() -> i32 {
    1900
}

fn default_max_year() -> i32 {
    2100
}

/// China Standard Time
fn default_utc_offset() -> i32 {
    480
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            min_year: default_min_year(),
            max_year: default_max_year(),
            utc_offset_minutes: default_utc_offset(),
        }
    }
}

impl Settings {
    /// Parses and validates settings.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_year_range(mut self, min_year: i32, max_year: i32) -> Self {
        self.min_year = min_year;
        self.max_year = max_year;
        self
    }

    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Checks that the year range is non-empty and the UTC offset is less
    /// than a day.
    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            return Err(Error::InvalidYearRange {
                min: self.min_year,
                max: self.max_year,
            });
        }
        if self.utc_offset_minutes.abs() >= 1440 {
            return Err(Error::InvalidUtcOffset {
                minutes: self.utc_offset_minutes,
            });
        }
        Ok(())
    }

    /// Returns `true` if `year` is within the navigable range.
    pub fn allows_year(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }

    /// Clamps `year` into the navigable range.
    pub fn clamp_year(&self, year: i32) -> i32 {
        year.clamp(self.min_year, self.max_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(Settings::default(), settings);
        assert_eq!(WeekStart::Sunday, settings.week_start);
        assert_eq!((1900, 2100), (settings.min_year, settings.max_year));
        assert_eq!(480, settings.utc_offset_minutes);
    }

    #[test]
    fn full_file() {
        let settings = Settings::from_toml_str(
            r#"
            week_start = "monday"
            min_year = 1950
            max_year = 2050
            utc_offset_minutes = -300
            "#,
        )
        .unwrap();
        assert_eq!(
            Settings::default()
                .with_week_start(WeekStart::Monday)
                .with_year_range(1950, 2050)
                .with_utc_offset(-300),
            settings
        );
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = Settings::from_toml_str("lunar = true").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        let err = Settings::from_toml_str("week_start = \"friday\"").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            Err(Error::InvalidYearRange { min: 2000, max: 1999 }),
            Settings::from_toml_str("min_year = 2000\nmax_year = 1999")
        );
        assert_eq!(
            Err(Error::InvalidUtcOffset { minutes: 1440 }),
            Settings::default().with_utc_offset(1440).validate()
        );
    }

    #[test]
    fn year_bounds() {
        let settings = Settings::default();
        assert!(settings.allows_year(1900));
        assert!(settings.allows_year(2100));
        assert!(!settings.allows_year(2101));
        assert_eq!(1900, settings.clamp_year(1066));
        assert_eq!(2100, settings.clamp_year(3000));
        assert_eq!(2024, settings.clamp_year(2024));
        assert_eq!(1, WeekStart::Monday.offset_from_sunday());
    }
}
