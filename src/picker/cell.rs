use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const WEEK_LENGTH: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_CELLS: usize = WEEK_LENGTH * GRID_WEEKS;

/// One entry of the padded grid: a calendar day of the viewed month, or an
/// empty filler keeping the weekday columns aligned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCell {
    Empty,
    Day(GridDay),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDay {
    /// Start of the day, UTC.
    pub instant: DateTime<Utc>,
    pub day_of_month: u32,
    pub is_disabled: bool,
    pub is_current_day: bool,
}

impl DayCell {
    pub fn day(&self) -> Option<&GridDay> {
        match self {
            DayCell::Day(day) => Some(day),
            DayCell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DayCell::Empty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRow {
    pub days: Vec<DayCell>,
}

/// The fixed 6x7 rendered month: 42 cells, the viewed month's days plus
/// leading and trailing empties, weeks starting on Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub weeks: Vec<WeekRow>,
}

impl MonthGrid {
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn days(&self) -> impl Iterator<Item = &GridDay> {
        self.cells().filter_map(DayCell::day)
    }

    pub fn current_day(&self) -> Option<&GridDay> {
        self.days().find(|day| day.is_current_day)
    }

    /// Cell at flat index 0..42, row-major.
    pub fn cell(&self, index: usize) -> Option<&DayCell> {
        self.weeks
            .get(index / WEEK_LENGTH)
            .and_then(|week| week.days.get(index % WEEK_LENGTH))
    }
}
