pub mod config;
pub mod picker;

pub use config::Config;
pub use picker::{
    ActiveSegment, DatePicker, DayCell, EpochUnit, HeaderLabels, MonthGrid, PickerError,
    PickerEvent, PickerInputs, Snapshot,
};
