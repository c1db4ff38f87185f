//! Month grid integration tests.

use yinli::chinese::{LunisolarCalendar, LunisolarComponents};
use yinli::{
    Converter, Date, GRID_CELLS, Settings, ViewState, WeekStart, generate_month_grid,
    generate_month_grid_with,
};

fn date(y: i32, m: i32, d: i32) -> Date {
    Date::from_gregorian(y, m, d).unwrap()
}

/// Every month from 1999 through 2001 (a common year, a leap year, a common
/// year) yields 42 consecutive days with one block of the displayed month.
#[test]
fn size_and_contiguity() {
    for week_start in [WeekStart::Sunday, WeekStart::Monday] {
        let converter: Converter = Converter::default();
        for year in 1999..=2001 {
            for month in 1..=12 {
                let anchor = date(year, month, 15);
                let grid = generate_month_grid_with(anchor, week_start, &converter);
                let cells = grid.cells();
                let label = format!("{year:04}-{month:02} {week_start:?}");

                assert_eq!(GRID_CELLS, cells.len(), "{label}");
                for pair in cells.windows(2) {
                    assert_eq!(1, pair[1].date - pair[0].date, "{label}");
                }

                let in_month: Vec<usize> = (0..cells.len())
                    .filter(|&i| cells[i].in_displayed_month)
                    .collect();
                assert_eq!(anchor.days_in_month() as usize, in_month.len(), "{label}");
                assert_eq!(grid.prefix_len(), in_month[0], "{label}");
                assert_eq!(
                    in_month.len() - 1,
                    in_month[in_month.len() - 1] - in_month[0],
                    "{label}"
                );
                assert!(in_month.iter().all(|&i| cells[i].date.same_month(&anchor)));
                assert_eq!(1, cells[grid.prefix_len()].day_number, "{label}");
                assert_eq!(
                    week_start.offset_from_sunday(),
                    cells[0].date.weekday_from_sunday(),
                    "{label}"
                );
            }
        }
    }
}

/// September 2021 starts on a Wednesday and has 30 days.
#[test]
fn wednesday_month() {
    let grid = generate_month_grid(date(2021, 9, 30));
    assert_eq!(3, date(2021, 9, 1).weekday_from_sunday());
    assert_eq!(3, grid.prefix_len());
    assert_eq!(30, grid.month_len());
    assert_eq!(9, grid.suffix_len());
    assert_eq!(42, grid.prefix_len() + grid.month_len() + grid.suffix_len());
}

#[test]
fn deterministic() {
    let anchor = date(2023, 3, 22);
    assert_eq!(generate_month_grid(anchor), generate_month_grid(anchor));
    assert_eq!(yinli::convert(anchor), yinli::convert(anchor));
}

#[test]
fn any_anchor_in_month_gives_same_grid() {
    let first = generate_month_grid(date(2024, 2, 1));
    for d in 2..=29 {
        assert_eq!(first, generate_month_grid(date(2024, 2, d)));
    }
}

#[test]
fn setting_current_year_keeps_grid() {
    let mut view = ViewState::new(Settings::default(), date(2024, 2, 29));
    let before = view.grid().clone();
    view.set_year(view.display_year());
    assert_eq!(&before, view.grid());
}

#[test]
fn zodiac_across_lunar_new_year() {
    // 2025 (乙巳, Snake) begins on January 29.
    let grid = generate_month_grid(date(2025, 1, 1));
    let cells = grid.cells();
    let eve = grid.position(date(2025, 1, 28)).unwrap();
    assert_eq!("龙", cells[eve].lunar.zodiac);
    assert_eq!("蛇", cells[eve + 1].lunar.zodiac);
    assert_eq!("正月", cells[eve + 1].lunar.day_label);
}

struct Unconvertible;

impl LunisolarCalendar for Unconvertible {
    fn components(&self, _: Date) -> Option<LunisolarComponents> {
        None
    }
}

/// A calendar that cannot convert still gives a full grid of empty details.
#[test]
fn unconvertible_dates_degrade() {
    let grid = generate_month_grid_with(
        date(2021, 9, 1),
        WeekStart::Sunday,
        &Converter::new(Unconvertible),
    );
    assert_eq!(GRID_CELLS, grid.cells().len());
    assert!(grid.cells().iter().all(|c| c.lunar.is_empty()));
    assert_eq!(30, grid.month_len());
}
