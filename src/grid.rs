//! Six-week month grids.

use tracing::debug;

use crate::chinese::LunisolarCalendar;
use crate::config::WeekStart;
use crate::convert::{Converter, LunarDetail};
use crate::date::Date;

/// Number of cells in a grid, six rows of seven days.
pub const GRID_CELLS: usize = 42;

/// One day of a month grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarCell {
    pub date: Date,
    /// Gregorian day of month.
    pub day_number: i32,
    /// `false` for the padding days of the previous and next months.
    pub in_displayed_month: bool,
    pub lunar: LunarDetail,
}

/// The grid of a Gregorian month: trailing days of the previous month, every
/// day of the month, then leading days of the next month, [`GRID_CELLS`] days
/// in total and in date order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthGrid {
    year: i32,
    month: i32,
    week_start: WeekStart,
    prefix_len: usize,
    month_len: usize,
    cells: Vec<CalendarCell>,
}

impl MonthGrid {
    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }
    pub fn into_cells(self) -> Vec<CalendarCell> {
        self.cells
    }
    /// Year of the displayed month.
    pub fn year(&self) -> i32 {
        self.year
    }
    /// Displayed month, `1..=12`.
    pub fn month(&self) -> i32 {
        self.month
    }
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }
    /// Number of padding cells from the previous month.
    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }
    /// Number of cells of the displayed month.
    pub fn month_len(&self) -> usize {
        self.month_len
    }
    /// Number of padding cells from the next month.
    pub fn suffix_len(&self) -> usize {
        self.cells.len() - self.prefix_len - self.month_len
    }
    /// Rows of seven cells, beginning with the configured first weekday.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }
    /// Index of the cell showing `date`, if any.
    pub fn position(&self, date: Date) -> Option<usize> {
        let first = self.cells.first()?.date;
        usize::try_from(date - first)
            .ok()
            .filter(|&i| i < self.cells.len())
    }
}

/// Generates the Sunday-first grid of the month containing `anchor`.
///
/// # Example
///
/// ```
/// use yinli::{Date, generate_month_grid};
///
/// // September 2021 begins on a Wednesday and has 30 days.
/// let grid = generate_month_grid(Date::from_gregorian(2021, 9, 15).unwrap());
///
/// assert_eq!(42, grid.cells().len());
/// assert_eq!((3, 30, 9), (grid.prefix_len(), grid.month_len(), grid.suffix_len()));
/// assert_eq!("2021-08-29", grid.cells()[0].date.iso_gregorian());
/// ```
pub fn generate_month_grid(anchor: Date) -> MonthGrid {
    let converter: Converter = Converter::default();
    generate_month_grid_with(anchor, WeekStart::Sunday, &converter)
}

/// Generates the grid of the month containing `anchor`, with `week_start` as
/// the first column, annotating each cell with `converter`.
#[tracing::instrument(level = "debug", skip(converter))]
pub fn generate_month_grid_with<C: LunisolarCalendar>(
    anchor: Date,
    week_start: WeekStart,
    converter: &Converter<C>,
) -> MonthGrid {
    let first = anchor.first_of_month();
    let prefix = (first.weekday_from_sunday() - week_start.offset_from_sunday()).rem_euclid(7);
    let month_len = first.days_in_month();

    let cell = |date: Date, in_displayed_month: bool| CalendarCell {
        date,
        day_number: date.day(),
        in_displayed_month,
        lunar: converter.convert(date),
    };

    let mut cells = Vec::with_capacity(GRID_CELLS);
    cells.extend((1..=prefix).rev().map(|back| cell(first + -back, false)));
    cells.extend((0..month_len).map(|i| cell(first + i, true)));
    let suffix = GRID_CELLS.saturating_sub(cells.len());
    let next = first + month_len;
    cells.extend((0..suffix as i32).map(|i| cell(next + i, false)));

    debug!(prefix, month_len, suffix, "generated month grid");
    MonthGrid {
        year: first.year(),
        month: first.month(),
        week_start,
        prefix_len: prefix as usize,
        month_len: month_len as usize,
        cells,
    }
}
