//! State of a month view: which month is displayed, which day is selected,
//! and the grid for the displayed month.
//!
//! Every change of the displayed month regenerates the grid as a whole.

use tracing::debug;

use crate::chinese::{IcuChinese, LunisolarCalendar};
use crate::config::Settings;
use crate::convert::{Converter, LunarDetail};
use crate::date::{Date, days_in_month, shift_months};
use crate::error::{Error, Result};
use crate::grid::{MonthGrid, generate_month_grid_with};
use crate::time_scales::Ut;

/// # Example
///
/// ```
/// use yinli::{Date, Settings, ViewState};
///
/// let today = Date::from_gregorian(2024, 12, 15).unwrap();
/// let mut view = ViewState::new(Settings::default(), today);
///
/// view.change_month(1).unwrap();
/// assert_eq!((2025, 1), (view.display_year(), view.display_month()));
/// assert_eq!(today, view.selected());
/// ```
#[derive(Debug, Clone)]
pub struct ViewState<C = IcuChinese> {
    settings: Settings,
    converter: Converter<C>,
    anchor: Date,
    selected: Date,
    grid: MonthGrid,
}

impl ViewState {
    /// Creates a view showing the month of `today`, with `today` selected.
    pub fn new(settings: Settings, today: Date) -> Self {
        Self::with_converter(settings, Converter::default(), today)
    }
}

impl<C: LunisolarCalendar> ViewState<C> {
    /// `today` is moved into the supported year range when outside it.
    pub fn with_converter(settings: Settings, converter: Converter<C>, today: Date) -> Self {
        let anchor = clamp_into(&settings, today);
        let grid = generate_month_grid_with(anchor, settings.week_start, &converter);
        Self {
            settings,
            converter,
            anchor,
            selected: anchor,
            grid,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    /// A date within the displayed month.
    pub fn anchor(&self) -> Date {
        self.anchor
    }
    pub fn selected(&self) -> Date {
        self.selected
    }
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }
    pub fn display_year(&self) -> i32 {
        self.anchor.year()
    }
    pub fn display_month(&self) -> i32 {
        self.anchor.month()
    }
    /// Lunar detail of the selected date.
    pub fn selected_detail(&self) -> LunarDetail {
        self.converter.convert(self.selected)
    }

    /// Moves the displayed month by `months`.
    ///
    /// Fails with [`Error::YearOutOfRange`] if the target month lies outside
    /// the supported years; the view is then left unchanged.
    pub fn change_month(&mut self, months: i32) -> Result<()> {
        let (min, max) = (self.settings.min_year, self.settings.max_year);
        let target = self
            .anchor
            .add_months(months)
            .ok_or_else(|| {
                let (year, _) = shift_months(self.display_year(), self.display_month(), months);
                Error::YearOutOfRange {
                    year: i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX }),
                    min,
                    max,
                }
            })?;
        if !self.settings.allows_year(target.year()) {
            debug!(year = target.year(), "month change rejected");
            return Err(Error::YearOutOfRange {
                year: target.year(),
                min,
                max,
            });
        }
        self.show(target);
        Ok(())
    }

    /// Selects `date`, switching to its month if it is not displayed.
    pub fn select(&mut self, date: Date) {
        self.selected = date;
        if !date.same_month(&self.anchor) {
            self.show(date);
        }
    }

    /// Displays and selects `today`.
    pub fn jump_to(&mut self, today: Date) {
        let today = clamp_into(&self.settings, today);
        self.selected = today;
        self.show(today);
    }

    /// Displays and selects the current date in the configured UTC offset.
    pub fn jump_to_today(&mut self) {
        let today = Ut::now().date_in_timezone(self.settings.utc_offset_minutes);
        self.jump_to(today);
    }

    /// Displays the same month of `year`, clamped into the supported range.
    ///
    /// The day of the anchor is kept where the month allows, so February 29
    /// becomes February 28 in a common year.
    pub fn set_year(&mut self, year: i32) {
        let year = self.settings.clamp_year(year);
        if year == self.display_year() {
            return;
        }
        let (_, month, day) = self.anchor.gregorian();
        if let Some(anchor) = Date::from_gregorian(year, month, day.min(days_in_month(year, month))) {
            self.show(anchor);
        }
    }

    fn show(&mut self, anchor: Date) {
        self.anchor = anchor;
        self.grid = generate_month_grid_with(anchor, self.settings.week_start, &self.converter);
    }
}

fn clamp_into(settings: &Settings, date: Date) -> Date {
    let (year, month, day) = date.gregorian();
    let clamped = settings.clamp_year(year);
    if clamped == year {
        return date;
    }
    debug!(year, clamped, "date moved into supported years");
    Date::from_gregorian(clamped, month, day.min(days_in_month(clamped, month))).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WeekStart;

    fn date(y: i32, m: i32, d: i32) -> Date {
        Date::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn starts_on_today() {
        let today = date(2021, 9, 8);
        let view = ViewState::new(Settings::default(), today);
        assert_eq!(today, view.anchor());
        assert_eq!(today, view.selected());
        assert_eq!((2021, 9), (view.grid().year(), view.grid().month()));
        assert_eq!(3, view.grid().prefix_len());
    }

    #[test]
    fn today_outside_range_is_clamped() {
        let view = ViewState::new(Settings::default(), date(2200, 3, 31));
        assert_eq!(date(2100, 3, 31), view.anchor());
        let view = ViewState::new(Settings::default(), date(1896, 2, 29));
        assert_eq!(date(1900, 2, 28), view.anchor());
    }

    #[test]
    fn change_month() {
        let mut view = ViewState::new(Settings::default(), date(2024, 1, 31));
        view.change_month(1).unwrap();
        assert_eq!(date(2024, 2, 29), view.anchor());
        view.change_month(-14).unwrap();
        assert_eq!(date(2022, 12, 29), view.anchor());
        assert_eq!((2022, 12), (view.grid().year(), view.grid().month()));
        assert_eq!(date(2024, 1, 31), view.selected());
    }

    #[test]
    fn change_month_respects_bounds() {
        let mut view = ViewState::new(Settings::default(), date(2100, 12, 1));
        let before = view.grid().clone();
        assert_eq!(
            Err(Error::YearOutOfRange {
                year: 2101,
                min: 1900,
                max: 2100
            }),
            view.change_month(1)
        );
        assert_eq!(date(2100, 12, 1), view.anchor());
        assert_eq!(&before, view.grid());

        // beyond the last representable date, counted from December
        assert_eq!(
            Err(Error::YearOutOfRange {
                year: 1_001_101,
                min: 1900,
                max: 2100
            }),
            view.change_month(11_988_001)
        );
        assert_eq!(date(2100, 12, 1), view.anchor());

        let mut view = ViewState::new(Settings::default(), date(1900, 1, 1));
        assert!(view.change_month(-1).is_err());
        assert!(view.change_month(11).is_ok());
    }

    #[test]
    fn select_switches_month() {
        let mut view = ViewState::new(Settings::default(), date(2021, 9, 8));
        view.select(date(2021, 9, 20));
        assert_eq!(date(2021, 9, 8), view.anchor());
        assert_eq!(date(2021, 9, 20), view.selected());

        // a padding cell of the next month
        view.select(date(2021, 10, 2));
        assert_eq!(date(2021, 10, 2), view.anchor());
        assert_eq!((2021, 10), (view.grid().year(), view.grid().month()));
    }

    #[test]
    fn jump_back() {
        let today = date(2023, 5, 5);
        let mut view = ViewState::new(Settings::default(), today);
        view.change_month(7).unwrap();
        view.select(date(2023, 12, 25));
        view.jump_to(today);
        assert_eq!(today, view.anchor());
        assert_eq!(today, view.selected());
        assert_eq!(ViewState::new(Settings::default(), today).grid(), view.grid());
    }

    #[test]
    fn jump_to_today_uses_clock() {
        let mut view = ViewState::new(Settings::default(), date(2000, 1, 1));
        view.jump_to_today();
        assert_eq!(view.anchor(), view.selected());
        assert!(view.settings().allows_year(view.display_year()));
    }

    #[test]
    fn set_year() {
        let mut view = ViewState::new(Settings::default(), date(2024, 2, 29));
        view.set_year(2023);
        assert_eq!(date(2023, 2, 28), view.anchor());
        view.set_year(1800);
        assert_eq!(date(1900, 2, 28), view.anchor());
        view.set_year(2500);
        assert_eq!(date(2100, 2, 28), view.anchor());
    }

    #[test]
    fn set_same_year_is_idempotent() {
        let mut view = ViewState::new(Settings::default(), date(2021, 9, 8));
        let before = view.grid().clone();
        view.set_year(2021);
        assert_eq!(&before, view.grid());
        assert_eq!(date(2021, 9, 8), view.anchor());
    }

    #[test]
    fn week_start_setting() {
        let settings = Settings::default().with_week_start(WeekStart::Monday);
        let view = ViewState::new(settings, date(2021, 9, 8));
        assert_eq!(WeekStart::Monday, view.grid().week_start());
        assert_eq!(2, view.grid().prefix_len());
    }

    #[test]
    fn selected_detail() {
        let view = ViewState::new(Settings::default(), date(2024, 9, 17));
        assert_eq!(Some("中秋"), view.selected_detail().special);
    }
}
