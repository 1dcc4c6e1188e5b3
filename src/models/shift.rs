//! Shift model.
//!
//! A shift is expressed in absolute hours from an arbitrary reference, so a
//! 48-hour shift starting at midnight is `0..48`. Hours are not wrapped to 24.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const SECONDS_PER_HOUR: i64 = 3600;

/// A continuous work shift to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Absolute start hour (clock hour of the first day plus any offset).
    pub start_hour: Decimal,
    /// Absolute end hour, typically greater than `start_hour`.
    pub end_hour: Decimal,
    /// Whether the whole shift is worked on a holiday.
    #[serde(default)]
    pub is_holiday: bool,
}

impl Shift {
    /// Creates a shift from absolute start and end hours.
    pub fn new(start_hour: Decimal, end_hour: Decimal, is_holiday: bool) -> Self {
        Self {
            start_hour,
            end_hour,
            is_holiday,
        }
    }

    /// Folds a Sunday flag into the holiday flag.
    ///
    /// Sundays attract the same surcharges as holidays.
    ///
    /// ```
    /// use surcharge_engine::models::Shift;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::new(Decimal::from(8), Decimal::from(18), false).with_sunday(true);
    /// assert!(shift.is_holiday);
    /// ```
    pub fn with_sunday(mut self, is_sunday: bool) -> Self {
        self.is_holiday |= is_sunday;
        self
    }

    /// Builds a shift from wall-clock timestamps.
    ///
    /// The start hour is the clock time of `start` in fractional hours and the
    /// end hour is the start hour plus the elapsed time, so shifts that cross
    /// midnight get an end hour above 24. A shift starting on a Sunday is
    /// treated as a holiday shift.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShift`] when `end` is before `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use surcharge_engine::models::Shift;
    /// use chrono::NaiveDateTime;
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let start = NaiveDateTime::parse_from_str("2026-01-15 21:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2026-01-16 07:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let shift = Shift::from_datetimes(start, end, false).unwrap();
    /// assert_eq!(shift.start_hour, Decimal::from_str("21.5").unwrap());
    /// assert_eq!(shift.end_hour, Decimal::from(31));
    /// ```
    pub fn from_datetimes(
        start: NaiveDateTime,
        end: NaiveDateTime,
        is_holiday: bool,
    ) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidShift {
                message: format!("end time {} is before start time {}", end, start),
            });
        }

        let seconds_into_day = i64::from(start.num_seconds_from_midnight());
        let start_hour = hours_from_seconds(seconds_into_day);
        let elapsed = hours_from_seconds((end - start).num_seconds());

        Ok(Self::new(start_hour, start_hour + elapsed, is_holiday)
            .with_sunday(start.weekday() == Weekday::Sun))
    }

    /// Signed length of the shift in hours (negative for inverted shifts).
    ///
    /// Saturates at `Decimal::MAX` / `Decimal::MIN` when the difference is
    /// too large to represent.
    pub fn duration(&self) -> Decimal {
        self.end_hour
            .checked_sub(self.start_hour)
            .unwrap_or(if self.end_hour > self.start_hour {
                Decimal::MAX
            } else {
                Decimal::MIN
            })
    }

    /// Worked hours, zero when the end is not after the start.
    pub fn total_hours(&self) -> Decimal {
        self.duration().max(Decimal::ZERO)
    }

    /// Returns true if the shift has no positive duration.
    pub fn is_empty(&self) -> bool {
        self.end_hour <= self.start_hour
    }
}

fn hours_from_seconds(seconds: i64) -> Decimal {
    Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
}
