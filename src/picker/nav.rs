use chrono::{DateTime, Months, Utc};

use crate::picker::cell::DayCell;
use crate::picker::error::PickerError;

/// Shifts the viewed month by whole months, clamping to calendar rules:
/// Jan 31 + 1 month = Feb 28/29. Time of day is preserved.
pub fn shift_month(viewed_month: DateTime<Utc>, delta: i32) -> Result<DateTime<Utc>, PickerError> {
    let shifted = if delta >= 0 {
        viewed_month.checked_add_months(Months::new(delta as u32))
    } else {
        viewed_month.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.ok_or_else(|| {
        PickerError::InvalidInstant(format!("{viewed_month} shifted by {delta} months overflows"))
    })
}

/// Applies a day-cell click: year, month and day come from the clicked cell;
/// hour, minute, second and sub-second come from the previous selection.
/// Empty cells are rejected here even though the UI filters them first.
pub fn apply_day_click(
    selected: DateTime<Utc>,
    clicked: &DayCell,
) -> Result<DateTime<Utc>, PickerError> {
    let day = clicked.day().ok_or(PickerError::InvalidDayCell)?;
    Ok(day.instant.date_naive().and_time(selected.time()).and_utc())
}
