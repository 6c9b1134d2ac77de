//! Time slot parsing and occupancy windows

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DomainError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";
pub const TIME_SLOT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Combine a booking form's date and time fields into a time slot
///
/// Accepts exactly `YYYY-MM-DD` and `HH:MM`.
pub fn parse_time_slot(date: &str, time: &str) -> Result<NaiveDateTime, DomainError> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::InvalidTimeSlot)?;
    let time = NaiveTime::parse_from_str(time.trim(), TIME_FORMAT)
        .map_err(|_| DomainError::InvalidTimeSlot)?;
    Ok(date.and_time(time))
}

/// Parse a combined time slot as sent by staff tools
///
/// Accepts `YYYY-MM-DD HH:MM` as well as ISO-8601 (`YYYY-MM-DDTHH:MM[:SS]`).
pub fn parse_time_slot_value(value: &str) -> Result<NaiveDateTime, DomainError> {
    let value = value.trim();
    [TIME_SLOT_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or(DomainError::InvalidTimeSlot)
}

/// Parse a `YYYY-MM-DD` date filter
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| DomainError::InvalidTimeSlot)
}

pub fn format_date(slot: NaiveDateTime) -> String {
    slot.format(DATE_FORMAT).to_string()
}

pub fn format_time(slot: NaiveDateTime) -> String {
    slot.format(TIME_FORMAT).to_string()
}

/// Half-open interval `[start, end)` during which a table is busy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl OccupancyWindow {
    pub fn new(start: NaiveDateTime, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Open interval of start times whose window, of the same length,
    /// overlaps this one
    pub fn overlapping_starts(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.start - self.duration(), self.end)
    }
}
