use datepick::picker::{ActiveSegment, DatePicker, DayCell, PickerError, Snapshot, GRID_CELLS};

use crate::tui::theme::Theme;

pub struct AppState {
    pub picker: DatePicker,
    pub snapshot: Snapshot,
    /// Flat cell index into the 6x7 grid, row-major.
    pub cursor: usize,
    pub theme: Theme,
    pub show_help: bool,
    pub status: Option<String>,
}

impl AppState {
    pub fn new(picker: DatePicker, theme: Theme) -> Result<Self, PickerError> {
        let snapshot = picker.rebuild()?;
        let cursor = initial_cursor(&snapshot);
        Ok(Self {
            picker,
            snapshot,
            cursor,
            theme,
            show_help: false,
            status: None,
        })
    }

    pub fn refresh(&mut self) {
        match self.picker.rebuild() {
            Ok(snapshot) => self.snapshot = snapshot,
            Err(e) => self.status = Some(format!("Rebuild failed: {}", e)),
        }
    }

    pub fn cursor_cell(&self) -> &DayCell {
        self.snapshot.grid.cell(self.cursor).unwrap_or(&DayCell::Empty)
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let moved = self.cursor as isize + delta;
        if (0..GRID_CELLS as isize).contains(&moved) {
            self.cursor = moved as usize;
        }
        self.status = None;
    }

    pub fn select_under_cursor(&mut self) {
        if let Some(day) = self.cursor_cell().day()
            && day.is_disabled
        {
            self.status = Some(format!("Day {} is outside the allowed range", day.day_of_month));
            return;
        }

        let clicked = self.cursor_cell().clone();
        match self.picker.click_day(&clicked) {
            Ok(event) => {
                tracing::info!(?event, "day selected");
                self.status = None;
                self.refresh();
            }
            Err(e) => {
                tracing::warn!("selection rejected: {}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn shift_month(&mut self, delta: i32) {
        match self.picker.shift_month(delta) {
            Ok(_events) => {
                self.status = None;
                self.refresh();
                self.cursor = initial_cursor(&self.snapshot);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    pub fn reset_view(&mut self) {
        self.picker.reset_viewed_month();
        self.status = None;
        self.refresh();
        self.cursor = initial_cursor(&self.snapshot);
    }

    pub fn set_segment(&mut self, segment: ActiveSegment) {
        self.picker.set_active_segment(segment);
        self.refresh();
    }
}

/// Start on the selected day when it is in view, otherwise on the first day
/// of the month.
fn initial_cursor(snapshot: &Snapshot) -> usize {
    let cells: Vec<&DayCell> = snapshot.grid.cells().collect();
    cells
        .iter()
        .position(|cell| cell.day().is_some_and(|day| day.is_current_day))
        .or_else(|| cells.iter().position(|cell| !cell.is_empty()))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use datepick::picker::{EpochUnit, PickerInputs};

    fn epoch(year: i32, month: u32, day: u32, hour: u32, min: u32) -> i64 {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
            .and_utc()
            .timestamp()
    }

    fn app_at(selected_epoch: i64, min_epoch: Option<i64>, max_epoch: Option<i64>) -> AppState {
        let picker = DatePicker::new(PickerInputs {
            selected_epoch,
            viewed_month_epoch: None,
            min_epoch,
            max_epoch,
            unit: EpochUnit::Seconds,
        })
        .unwrap();
        AppState::new(picker, Theme::default_theme()).unwrap()
    }

    #[test]
    fn cursor_starts_on_the_selected_day() {
        let app = app_at(epoch(2023, 5, 10, 13, 45), None, None);
        let day = app.cursor_cell().day().unwrap();
        assert!(day.is_current_day);
        assert_eq!(day.day_of_month, 10);
    }

    #[test]
    fn cursor_never_leaves_the_grid() {
        let mut app = app_at(epoch(2023, 5, 10, 13, 45), None, None);

        app.cursor = 0;
        app.move_cursor(-1);
        assert_eq!(app.cursor, 0);

        app.cursor = GRID_CELLS - 1;
        app.move_cursor(7);
        assert_eq!(app.cursor, GRID_CELLS - 1);
    }

    #[test]
    fn selecting_an_empty_cell_keeps_the_selection_and_reports() {
        let mut app = app_at(epoch(2023, 5, 10, 13, 45), None, None);
        let before = app.picker.selected_epoch();

        // May 2023 starts on a Monday; cell 0 is the leading empty.
        app.cursor = 0;
        assert!(app.cursor_cell().is_empty());
        app.select_under_cursor();

        assert_eq!(app.picker.selected_epoch(), before);
        assert!(app.status.is_some());
    }

    #[test]
    fn selecting_a_disabled_day_is_refused() {
        let mut app = app_at(
            epoch(2023, 5, 15, 12, 0),
            Some(epoch(2023, 5, 10, 0, 0)),
            Some(epoch(2023, 5, 20, 0, 0)),
        );
        let before = app.picker.selected_epoch();

        let disabled_index = app
            .snapshot
            .grid
            .cells()
            .position(|cell| cell.day().is_some_and(|day| day.is_disabled))
            .unwrap();
        app.cursor = disabled_index;
        app.select_under_cursor();

        assert_eq!(app.picker.selected_epoch(), before);
        assert!(app.status.is_some());
    }

    #[test]
    fn selecting_a_day_moves_the_current_day_marker() {
        let mut app = app_at(epoch(2023, 5, 10, 13, 45), None, None);

        let target = app
            .snapshot
            .grid
            .cells()
            .position(|cell| cell.day().is_some_and(|day| day.day_of_month == 22))
            .unwrap();
        app.cursor = target;
        app.select_under_cursor();

        assert_eq!(app.snapshot.grid.current_day().unwrap().day_of_month, 22);
        assert_eq!(app.picker.selected_epoch(), epoch(2023, 5, 22, 13, 45));
    }

    #[test]
    fn month_shift_updates_the_banner_and_segment() {
        let mut app = app_at(epoch(2024, 1, 31, 0, 0), None, None);
        app.shift_month(1);

        assert_eq!(app.snapshot.labels.month_year, "Feb 2024");
        assert_eq!(app.snapshot.active_segment, ActiveSegment::MonthYear);
    }

    #[test]
    fn reset_view_returns_to_the_selected_month() {
        let mut app = app_at(epoch(2023, 5, 10, 13, 45), None, None);
        app.shift_month(-3);
        assert_eq!(app.snapshot.labels.month_year, "Feb 2023");

        app.reset_view();
        assert_eq!(app.snapshot.labels.month_year, "May 2023");
        assert_eq!(app.cursor_cell().day().unwrap().day_of_month, 10);
    }
}
