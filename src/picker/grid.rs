use chrono::{DateTime, Datelike, Months, Utc};

use crate::picker::cell::{DayCell, GridDay, MonthGrid, WeekRow, GRID_CELLS, WEEK_LENGTH};
use crate::picker::error::PickerError;

/// One `GridDay` per calendar day of the viewed month, ascending.
///
/// Bound semantics follow the picker's boundary contract: with no bounds
/// nothing is disabled; with a bound present, a day is enabled only when its
/// start-of-day instant lies strictly between the bounds. A day exactly equal
/// to `min` or `max` is disabled.
pub fn month_days(
    viewed_month: DateTime<Utc>,
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
) -> Result<Vec<GridDay>, PickerError> {
    let first_of_month = viewed_month
        .date_naive()
        .with_day(1)
        .ok_or_else(|| PickerError::InvalidInstant(format!("no first day in {viewed_month}")))?;
    let first_of_next = first_of_month
        .checked_add_months(Months::new(1))
        .ok_or_else(|| PickerError::InvalidInstant(format!("month after {first_of_month} overflows")))?;

    let mut days = Vec::with_capacity(31);
    let mut current = first_of_month;
    while current < first_of_next {
        let start_of_day = current
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| PickerError::InvalidInstant(format!("no midnight on {current}")))?
            .and_utc();

        let is_disabled = if min.is_none() && max.is_none() {
            false
        } else {
            let above_min = min.is_none_or(|bound| start_of_day > bound);
            let below_max = max.is_none_or(|bound| start_of_day < bound);
            !(above_min && below_max)
        };

        days.push(GridDay {
            instant: start_of_day,
            day_of_month: current.day(),
            is_disabled,
            is_current_day: false,
        });

        current = current
            .succ_opt()
            .ok_or_else(|| PickerError::InvalidInstant(format!("day after {current} overflows")))?;
    }

    Ok(days)
}

/// Marks the cell whose calendar day contains `selected`, start of day
/// through end of day inclusive. At most one cell matches.
pub fn mark_current_day(days: &mut [GridDay], selected: DateTime<Utc>) {
    let selected_date = selected.date_naive();
    for day in days {
        day.is_current_day = day.instant.date_naive() == selected_date;
    }
}

/// Pads the month's days to the fixed 42-cell sequence: empties up to the
/// first day's weekday column (Sunday = 0), the days, trailing empties.
pub fn pad_to_grid(days: Vec<GridDay>) -> Vec<DayCell> {
    let head = days
        .first()
        .map(|day| day.instant.weekday().num_days_from_sunday() as usize)
        .unwrap_or(0);
    // Max possible is 6 + 31 = 37 for any real Gregorian month.
    assert!(
        head + days.len() <= GRID_CELLS,
        "month of {} days starting at weekday {} overflows the 42-cell grid",
        days.len(),
        head
    );

    let mut cells = Vec::with_capacity(GRID_CELLS);
    cells.resize(head, DayCell::Empty);
    cells.extend(days.into_iter().map(DayCell::Day));
    cells.resize(GRID_CELLS, DayCell::Empty);
    cells
}

/// Partitions the 42-cell padded sequence into 6 rows of 7, input order.
pub fn group_weeks(cells: Vec<DayCell>) -> MonthGrid {
    debug_assert_eq!(cells.len(), GRID_CELLS);
    let mut weeks = Vec::with_capacity(cells.len() / WEEK_LENGTH);
    let mut cells = cells.into_iter();
    while weeks.len() * WEEK_LENGTH < GRID_CELLS {
        weeks.push(WeekRow {
            days: cells.by_ref().take(WEEK_LENGTH).collect(),
        });
    }
    MonthGrid { weeks }
}

/// Full grid pipeline: build the month's days, mark the selected day, pad to
/// 42 cells and group into weeks. Deterministic over its inputs; the grid is
/// always rebuilt whole.
pub fn build_grid(
    viewed_month: DateTime<Utc>,
    selected: DateTime<Utc>,
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
) -> Result<MonthGrid, PickerError> {
    let mut days = month_days(viewed_month, min, max)?;
    mark_current_day(&mut days, selected);
    let grid = group_weeks(pad_to_grid(days));
    tracing::debug!(
        viewed = %viewed_month.format("%Y-%m"),
        days = grid.days().count(),
        "rebuilt month grid"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn instant(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
            .and_utc()
    }

    fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        instant(year, month, day, 0, 0, 0)
    }

    #[test]
    fn month_days_covers_every_day_of_the_month() {
        let days = month_days(midnight(2023, 5, 10), None, None).unwrap();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].instant, midnight(2023, 5, 1));
        assert_eq!(days[30].instant, midnight(2023, 5, 31));
    }

    #[test]
    fn month_days_handles_leap_february() {
        let days = month_days(midnight(2024, 2, 15), None, None).unwrap();
        assert_eq!(days.len(), 29);
    }

    #[test]
    fn month_days_handles_common_february() {
        let days = month_days(midnight(2023, 2, 1), None, None).unwrap();
        assert_eq!(days.len(), 28);
    }

    #[test]
    fn days_are_ascending_one_day_apart() {
        let days = month_days(midnight(2024, 11, 3), None, None).unwrap();
        for pair in days.windows(2) {
            assert_eq!(pair[1].instant - pair[0].instant, chrono::Duration::days(1));
        }
    }

    #[test]
    fn no_bounds_leaves_every_day_enabled() {
        let days = month_days(midnight(2023, 5, 1), None, None).unwrap();
        assert!(days.iter().all(|day| !day.is_disabled));
    }

    #[test]
    fn days_strictly_between_bounds_are_enabled() {
        let min = midnight(2023, 5, 10);
        let max = midnight(2023, 5, 20);
        let days = month_days(midnight(2023, 5, 1), Some(min), Some(max)).unwrap();

        let enabled: Vec<u32> = days
            .iter()
            .filter(|day| !day.is_disabled)
            .map(|day| day.day_of_month)
            .collect();
        assert_eq!(enabled, (11..=19).collect::<Vec<u32>>());
    }

    #[test]
    fn day_equal_to_min_bound_is_disabled() {
        let min = midnight(2023, 5, 10);
        let days = month_days(midnight(2023, 5, 1), Some(min), None).unwrap();
        assert!(days[9].is_disabled);
        assert!(!days[10].is_disabled);
    }

    #[test]
    fn day_equal_to_max_bound_is_disabled() {
        let max = midnight(2023, 5, 20);
        let days = month_days(midnight(2023, 5, 1), None, Some(max)).unwrap();
        assert!(days[19].is_disabled);
        assert!(!days[18].is_disabled);
    }

    #[test]
    fn single_min_bound_leaves_later_days_enabled() {
        let min = midnight(2023, 5, 10);
        let days = month_days(midnight(2023, 5, 1), Some(min), None).unwrap();
        assert!(days.iter().take(10).all(|day| day.is_disabled));
        assert!(days.iter().skip(10).all(|day| !day.is_disabled));
    }

    #[test]
    fn mid_day_bound_disables_its_own_day() {
        // Start of day 10 precedes a 05:00 minimum, so day 10 stays disabled.
        let min = instant(2023, 5, 10, 5, 0, 0);
        let days = month_days(midnight(2023, 5, 1), Some(min), None).unwrap();
        assert!(days[9].is_disabled);
        assert!(!days[10].is_disabled);
    }

    #[test]
    fn current_day_marked_when_selection_inside_month() {
        let mut days = month_days(midnight(2024, 2, 1), None, None).unwrap();
        mark_current_day(&mut days, instant(2024, 2, 29, 13, 45, 0));

        let marked: Vec<&GridDay> = days.iter().filter(|day| day.is_current_day).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].day_of_month, 29);
    }

    #[test]
    fn selection_at_exact_midnight_still_marks_its_day() {
        let mut days = month_days(midnight(2023, 5, 1), None, None).unwrap();
        mark_current_day(&mut days, midnight(2023, 5, 10));
        assert!(days[9].is_current_day);
    }

    #[test]
    fn no_current_day_when_selection_outside_month() {
        let mut days = month_days(midnight(2023, 5, 1), None, None).unwrap();
        mark_current_day(&mut days, instant(2023, 6, 10, 12, 0, 0));
        assert!(days.iter().all(|day| !day.is_current_day));
    }

    #[test]
    fn padding_always_produces_42_cells() {
        // May 2023 starts on a Monday: one leading empty.
        let days = month_days(midnight(2023, 5, 1), None, None).unwrap();
        let cells = pad_to_grid(days);

        assert_eq!(cells.len(), GRID_CELLS);
        assert!(cells[0].is_empty());
        assert!(!cells[1].is_empty());
        assert_eq!(cells.iter().filter(|cell| !cell.is_empty()).count(), 31);
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_empties() {
        // October 2023 starts on a Sunday.
        let days = month_days(midnight(2023, 10, 1), None, None).unwrap();
        let cells = pad_to_grid(days);
        assert!(!cells[0].is_empty());
        assert_eq!(cells.iter().filter(|cell| !cell.is_empty()).count(), 31);
    }

    #[test]
    fn head_days_and_tail_sum_to_42() {
        let days = month_days(midnight(2024, 2, 1), None, None).unwrap();
        let day_count = days.len();
        let cells = pad_to_grid(days);

        let head = cells.iter().take_while(|cell| cell.is_empty()).count();
        let tail = cells.iter().rev().take_while(|cell| cell.is_empty()).count();
        assert_eq!(head + day_count + tail, GRID_CELLS);
    }

    #[test]
    fn grouping_yields_six_rows_of_seven() {
        let cells = pad_to_grid(month_days(midnight(2023, 5, 1), None, None).unwrap());
        let grid = group_weeks(cells);

        assert_eq!(grid.weeks.len(), 6);
        for week in &grid.weeks {
            assert_eq!(week.days.len(), 7);
        }
    }

    #[test]
    fn concatenated_rows_reproduce_the_padded_sequence() {
        let cells = pad_to_grid(month_days(midnight(2023, 5, 1), None, None).unwrap());
        let grid = group_weeks(cells.clone());

        let flattened: Vec<DayCell> = grid.cells().cloned().collect();
        assert_eq!(flattened, cells);
    }

    #[test]
    fn build_grid_is_idempotent() {
        let viewed = midnight(2024, 2, 1);
        let selected = instant(2024, 2, 29, 13, 45, 0);
        let min = Some(midnight(2024, 2, 5));
        let max = Some(midnight(2024, 2, 25));

        let first = build_grid(viewed, selected, min, max).unwrap();
        let second = build_grid(viewed, selected, min, max).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn leap_february_grid_scenario() {
        let grid = build_grid(midnight(2024, 2, 1), instant(2024, 2, 29, 13, 45, 0), None, None)
            .unwrap();

        assert_eq!(grid.days().count(), 29);
        let current = grid.current_day().unwrap();
        assert_eq!(current.day_of_month, 29);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn grid_shape_holds_for_any_month(year in 1900i32..2200, month in 1u32..=12) {
                let viewed = midnight(year, month, 1);
                let grid = build_grid(viewed, viewed, None, None).unwrap();

                let cell_count: usize = grid.weeks.iter().map(|week| week.days.len()).sum();
                prop_assert_eq!(grid.weeks.len(), 6);
                prop_assert_eq!(cell_count, GRID_CELLS);

                let expected_days = NaiveDate::from_ymd_opt(year, month, 1)
                    .unwrap()
                    .checked_add_months(Months::new(1))
                    .unwrap()
                    .signed_duration_since(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
                    .num_days() as usize;
                prop_assert_eq!(grid.days().count(), expected_days);
            }

            #[test]
            fn at_most_one_current_day(year in 1970i32..2100, month in 1u32..=12, day in 1u32..=28) {
                let viewed = midnight(year, month, 1);
                let selected = midnight(year, month, day);
                let grid = build_grid(viewed, selected, None, None).unwrap();
                prop_assert_eq!(grid.days().filter(|d| d.is_current_day).count(), 1);
            }
        }
    }
}
