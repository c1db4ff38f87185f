//! Chinese lunisolar calendar overlay for Gregorian calendar views.
//!
//! Given a Gregorian date this crate derives its lunar day and month names,
//! the zodiac animal of the lunar year, and the festival or solar term falling
//! on it. On top of that it builds six-week month grids, padded with the
//! neighbouring months, ready to be drawn by a front-end.
//!
//! The lunar year, month and day themselves come from the Chinese calendar of
//! [`icu_calendar`]. Solar terms use a closed-form approximation accurate to
//! about a day, not an ephemeris.
//!
//! # Examples
//!
//! A single date:
//!
//! ```
//! use yinli::Date;
//!
//! let detail = yinli::convert(Date::from_gregorian(2024, 6, 10).unwrap());
//!
//! assert_eq!("初五", detail.day_label);
//! assert_eq!("五月", detail.month_label);
//! assert_eq!("龙", detail.zodiac);
//! assert_eq!(Some("端午"), detail.special);
//! ```
//!
//! A month grid:
//!
//! ```
//! use yinli::{Date, generate_month_grid};
//!
//! let grid = generate_month_grid(Date::from_gregorian(2025, 1, 1).unwrap());
//! let new_year = grid.position(Date::from_gregorian(2025, 1, 29).unwrap()).unwrap();
//!
//! assert_eq!(42, grid.cells().len());
//! assert_eq!(Some("春节"), grid.cells()[new_year].lunar.special);
//! ```
//!
//! Conversion and grid generation never fail: a date the calendar cannot
//! convert gets [`LunarDetail::empty`]. Everything is recomputed on each call
//! and no state is shared between calls.

pub mod chinese;
pub mod config;
pub mod convert;
pub mod date;
pub mod error;
pub mod grid;
pub mod time_scales;
pub mod view;

pub use config::{Settings, WeekStart};
pub use convert::{Converter, LunarDetail, convert};
pub use date::{Date, YearType};
pub use error::{Error, Result};
pub use grid::{
    CalendarCell, GRID_CELLS, MonthGrid, generate_month_grid, generate_month_grid_with,
};
pub use view::ViewState;
