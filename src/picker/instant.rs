use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::picker::error::PickerError;

/// Unit of the epoch integers crossing the host boundary. Everything past
/// this module works in `DateTime<Utc>`; the unit only matters when epochs
/// come in or go back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EpochUnit {
    Seconds,
    Milliseconds,
}

impl EpochUnit {
    pub fn to_instant(self, epoch: i64) -> Result<DateTime<Utc>, PickerError> {
        let instant = match self {
            EpochUnit::Seconds => Utc.timestamp_opt(epoch, 0).single(),
            EpochUnit::Milliseconds => Utc.timestamp_millis_opt(epoch).single(),
        };
        instant.ok_or(PickerError::InvalidTimestamp(epoch))
    }

    pub fn from_instant(self, instant: DateTime<Utc>) -> i64 {
        match self {
            EpochUnit::Seconds => instant.timestamp(),
            EpochUnit::Milliseconds => instant.timestamp_millis(),
        }
    }

    /// An absent bound is a valid "no bound" signal, never an error.
    pub fn to_bound(self, epoch: Option<i64>) -> Result<Option<DateTime<Utc>>, PickerError> {
        epoch.map(|value| self.to_instant(value)).transpose()
    }
}

impl Default for EpochUnit {
    fn default() -> Self {
        EpochUnit::Seconds
    }
}
