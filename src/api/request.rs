//! Request types for the Surcharge Engine API.
//!
//! This module defines the JSON request structures for the `/classify`,
//! `/classify/times` and `/compare` endpoints, and the caller-side
//! validation that turns them into [`Shift`]s.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SurchargeRules;
use crate::error::{EngineError, EngineResult};
use crate::models::Shift;

/// Request body for `/classify` and `/compare`.
///
/// Hours are absolute: a shift from 21:00 to 07:00 the next morning is
/// `start_hour = 21, end_hour = 31`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Absolute start hour.
    pub start_hour: Decimal,
    /// Absolute end hour.
    pub end_hour: Decimal,
    /// Whether the shift is worked on a holiday.
    #[serde(default)]
    pub is_holiday: bool,
    /// Whether the shift is worked on a Sunday (treated as a holiday).
    #[serde(default)]
    pub is_sunday: bool,
}

impl ClassifyRequest {
    /// Validates the request and converts it to a [`Shift`].
    ///
    /// Negative start hours and shifts longer than the rules allow are
    /// rejected here rather than in the classifier. An end hour at or before
    /// the start is accepted and classifies to zero.
    pub fn into_shift(self, rules: &SurchargeRules) -> EngineResult<Shift> {
        if self.start_hour < Decimal::ZERO {
            return Err(EngineError::InvalidShift {
                message: format!(
                    "start_hour must not be negative, got {}",
                    self.start_hour
                ),
            });
        }

        let shift =
            Shift::new(self.start_hour, self.end_hour, self.is_holiday).with_sunday(self.is_sunday);
        rules.check_shift_length(&shift)?;
        Ok(shift)
    }
}

/// Request body for `/classify/times`, using wall-clock timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyTimesRequest {
    /// When the shift started.
    pub start_time: NaiveDateTime,
    /// When the shift ended.
    pub end_time: NaiveDateTime,
    /// Whether the shift is worked on a holiday.
    #[serde(default)]
    pub is_holiday: bool,
}

impl ClassifyTimesRequest {
    /// Converts the timestamps to a [`Shift`]. Sundays count as holidays.
    pub fn into_shift(self, rules: &SurchargeRules) -> EngineResult<Shift> {
        let shift = Shift::from_datetimes(self.start_time, self.end_time, self.is_holiday)?;
        rules.check_shift_length(&shift)?;
        Ok(shift)
    }
}
