pub mod cell;
pub mod error;
pub mod grid;
pub mod header;
pub mod instant;
pub mod nav;
pub mod state;

pub use cell::{DayCell, GridDay, MonthGrid, WeekRow, GRID_CELLS, GRID_WEEKS, WEEK_LENGTH};
pub use error::PickerError;
pub use header::{ActiveSegment, HeaderLabels, HeaderState};
pub use instant::EpochUnit;
pub use state::{DatePicker, PickerEvent, PickerInputs, Snapshot};
