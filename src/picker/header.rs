use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which header element is highlighted. A single tagged value: two segments
/// can never be active at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActiveSegment {
    Day,
    Month,
    Year,
    MonthYear,
    None,
}

impl ActiveSegment {
    /// Maps the host-facing segment strings. Unrecognized values fall back to
    /// `None` rather than erroring; the host may send segment names this
    /// picker does not render.
    pub fn parse(value: &str) -> Self {
        match value {
            "day" => ActiveSegment::Day,
            "month" => ActiveSegment::Month,
            "year" => ActiveSegment::Year,
            "month-year" => ActiveSegment::MonthYear,
            _ => ActiveSegment::None,
        }
    }
}

/// UI-session state: which header segment is active. Starts with none active
/// and transitions only on explicit requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderState {
    active: ActiveSegment,
}

impl HeaderState {
    pub fn new() -> Self {
        Self {
            active: ActiveSegment::None,
        }
    }

    pub fn set_active(&mut self, segment: ActiveSegment) {
        self.active = segment;
    }

    pub fn active(&self) -> ActiveSegment {
        self.active
    }

    pub fn is_active(&self, segment: ActiveSegment) -> bool {
        self.active == segment
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendered header text. Day, month, year and weekday come from the selected
/// instant; the month-year banner tracks the viewed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLabels {
    pub year: String,
    pub month: String,
    pub day: String,
    pub day_of_week: String,
    pub month_year: String,
}

impl HeaderLabels {
    pub fn compute(selected: DateTime<Utc>, viewed_month: DateTime<Utc>) -> Self {
        Self {
            year: selected.format("%Y").to_string(),
            month: selected.format("%b").to_string().to_uppercase(),
            day: selected.format("%d").to_string(),
            day_of_week: selected.format("%A").to_string(),
            month_year: viewed_month.format("%b %Y").to_string(),
        }
    }
}
