//! Error types for the fallible surfaces of this crate.
//!
//! Lunar conversion and grid generation never fail; see
//! [`LunarDetail::empty`](crate::LunarDetail::empty).

/// Error type for date construction, settings and view navigation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Returned when a Gregorian triple does not name a supported day.
    #[error("{year:04}-{month:02}-{day:02} is not a valid Gregorian date")]
    InvalidDate {
        /// Astronomical year number.
        year: i32,
        /// Month number.
        month: i32,
        /// Day of month.
        day: i32,
    },

    /// Returned when navigation would leave the supported year range.
    #[error("year {year} outside supported range {min}..={max}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// Lower bound, inclusive.
        min: i32,
        /// Upper bound, inclusive.
        max: i32,
    },

    /// Returned when the configured year range is empty.
    #[error("min_year {min} is greater than max_year {max}")]
    InvalidYearRange {
        /// Configured lower bound.
        min: i32,
        /// Configured upper bound.
        max: i32,
    },

    /// Returned when the configured UTC offset is a day or more.
    #[error("UTC offset must be within one day, got {minutes} minutes")]
    InvalidUtcOffset {
        /// The configured offset in minutes east of UTC.
        minutes: i32,
    },

    /// Returned when settings cannot be parsed.
    #[error("failed to parse settings: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
