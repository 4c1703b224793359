use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::picker::cell::{DayCell, MonthGrid};
use crate::picker::error::PickerError;
use crate::picker::grid;
use crate::picker::header::{ActiveSegment, HeaderLabels, HeaderState};
use crate::picker::instant::EpochUnit;
use crate::picker::nav;

/// Raw host inputs. Epochs are converted exactly once, in `DatePicker::new`;
/// past that boundary the picker carries typed instants only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerInputs {
    pub selected_epoch: i64,
    /// Defaults to the selection's month when absent.
    pub viewed_month_epoch: Option<i64>,
    pub min_epoch: Option<i64>,
    pub max_epoch: Option<i64>,
    pub unit: EpochUnit,
}

/// Events raised for the host to apply. Epochs are expressed in the unit the
/// picker was constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    SelectionChanged(i64),
    ViewedMonthChanged(i64),
    ActiveSegmentChanged(ActiveSegment),
}

/// One full recomputation of the view model. Built whole on every input
/// change; never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: MonthGrid,
    pub labels: HeaderLabels,
    pub active_segment: ActiveSegment,
}

pub struct DatePicker {
    selected: DateTime<Utc>,
    viewed_month: DateTime<Utc>,
    min: Option<DateTime<Utc>>,
    max: Option<DateTime<Utc>>,
    unit: EpochUnit,
    header: HeaderState,
}

impl DatePicker {
    pub fn new(inputs: PickerInputs) -> Result<Self, PickerError> {
        let unit = inputs.unit;
        let selected = unit.to_instant(inputs.selected_epoch)?;
        let viewed_month = match inputs.viewed_month_epoch {
            Some(epoch) => unit.to_instant(epoch)?,
            None => selected,
        };

        Ok(Self {
            selected,
            viewed_month,
            min: unit.to_bound(inputs.min_epoch)?,
            max: unit.to_bound(inputs.max_epoch)?,
            unit,
            header: HeaderState::new(),
        })
    }

    pub fn selected(&self) -> DateTime<Utc> {
        self.selected
    }

    pub fn viewed_month(&self) -> DateTime<Utc> {
        self.viewed_month
    }

    pub fn selected_epoch(&self) -> i64 {
        self.unit.from_instant(self.selected)
    }

    pub fn active_segment(&self) -> ActiveSegment {
        self.header.active()
    }

    /// The single recomputation path: grid pipeline plus header labels over
    /// the current inputs. Pure with respect to the picker's state.
    pub fn rebuild(&self) -> Result<Snapshot, PickerError> {
        let grid = grid::build_grid(self.viewed_month, self.selected, self.min, self.max)?;
        Ok(Snapshot {
            grid,
            labels: HeaderLabels::compute(self.selected, self.viewed_month),
            active_segment: self.header.active(),
        })
    }

    pub fn set_active_segment(&mut self, segment: ActiveSegment) -> PickerEvent {
        self.header.set_active(segment);
        PickerEvent::ActiveSegmentChanged(segment)
    }

    /// Moves the viewed month by `delta` whole months and highlights the
    /// month-year header segment.
    pub fn shift_month(&mut self, delta: i32) -> Result<Vec<PickerEvent>, PickerError> {
        self.viewed_month = nav::shift_month(self.viewed_month, delta)?;
        self.header.set_active(ActiveSegment::MonthYear);
        tracing::debug!(delta, viewed = %self.viewed_month.format("%Y-%m"), "shifted viewed month");

        Ok(vec![
            PickerEvent::ViewedMonthChanged(self.unit.from_instant(self.viewed_month)),
            PickerEvent::ActiveSegmentChanged(ActiveSegment::MonthYear),
        ])
    }

    /// Applies a day-cell click to the selection, keeping its time of day.
    pub fn click_day(&mut self, clicked: &DayCell) -> Result<PickerEvent, PickerError> {
        self.selected = nav::apply_day_click(self.selected, clicked)?;
        Ok(PickerEvent::SelectionChanged(self.selected_epoch()))
    }

    /// Re-anchors the viewed month to the selection's month.
    pub fn reset_viewed_month(&mut self) -> PickerEvent {
        self.viewed_month = self.selected;
        PickerEvent::ViewedMonthChanged(self.unit.from_instant(self.viewed_month))
    }

    pub fn set_bounds(
        &mut self,
        min_epoch: Option<i64>,
        max_epoch: Option<i64>,
    ) -> Result<(), PickerError> {
        self.min = self.unit.to_bound(min_epoch)?;
        self.max = self.unit.to_bound(max_epoch)?;
        Ok(())
    }
}
