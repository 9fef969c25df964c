//! Seat location captured with each review.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the reviewer sat. Always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatLocation {
    /// Floor label, e.g. `"1"`.
    pub floor: String,
    /// Section code, e.g. `"OP"` or `"VIP"`.
    pub section: String,
    /// Row label.
    pub seat_row: String,
    /// Seat number within the row.
    pub seat_number: String,
}

impl SeatLocation {
    /// Creates a seat location from its four parts.
    #[must_use]
    pub fn new(
        floor: impl Into<String>,
        section: impl Into<String>,
        seat_row: impl Into<String>,
        seat_number: impl Into<String>,
    ) -> Self {
        Self {
            floor: floor.into(),
            section: section.into(),
            seat_row: seat_row.into(),
            seat_number: seat_number.into(),
        }
    }

    /// Returns a copy with any provided override fields replaced.
    #[must_use]
    pub fn with_overrides(&self, overrides: &SeatOverride) -> Self {
        Self {
            floor: overrides.floor.clone().unwrap_or_else(|| self.floor.clone()),
            section: overrides
                .section
                .clone()
                .unwrap_or_else(|| self.section.clone()),
            seat_row: overrides
                .seat_row
                .clone()
                .unwrap_or_else(|| self.seat_row.clone()),
            seat_number: overrides
                .seat_number
                .clone()
                .unwrap_or_else(|| self.seat_number.clone()),
        }
    }
}

impl Default for SeatLocation {
    fn default() -> Self {
        Self::new("1", "OP", "1", "1")
    }
}

impl fmt::Display for SeatLocation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "floor {}, section {}, row {}, seat {}",
            self.floor, self.section, self.seat_row, self.seat_number
        )
    }
}

/// Partial seat update; unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatOverride {
    /// Replacement floor.
    pub floor: Option<String>,
    /// Replacement section.
    pub section: Option<String>,
    /// Replacement row.
    pub seat_row: Option<String>,
    /// Replacement seat number.
    pub seat_number: Option<String>,
}

impl SeatOverride {
    /// Returns true when no field is overridden.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.floor.is_none()
            && self.section.is_none()
            && self.seat_row.is_none()
            && self.seat_number.is_none()
    }
}
