use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickerError {
    #[error("invalid timestamp: {0} is outside the representable range")]
    InvalidTimestamp(i64),
    #[error("invalid calendar instant: {0}")]
    InvalidInstant(String),
    #[error("cannot select an empty day cell")]
    InvalidDayCell,
}
