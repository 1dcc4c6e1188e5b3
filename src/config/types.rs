//! Configuration types for surcharge classification.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! [`SurchargeRules`] the classifier runs on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    HOURS_PER_DAY, NIGHT_END, NIGHT_START, NightWindow, ORDINARY_LIMIT, SWEEP_STEP,
};
use crate::error::{EngineError, EngineResult};
use crate::models::Shift;

/// Longest shift, in hours, accepted from API callers (31 days).
pub const MAX_SHIFT_HOURS: Decimal = Decimal::from_parts(744, 0, 0, false, 0);

fn default_max_shift_hours() -> Decimal {
    MAX_SHIFT_HOURS
}

/// Metadata about the labor-rule policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// A short code identifying the policy.
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            code: "default".to_string(),
            name: "Standard shift surcharges".to_string(),
            version: "builtin".to_string(),
            description: "Night 21:00-06:00, 10 ordinary hours, half-hour sweep".to_string(),
        }
    }
}

/// Raw rule values as they appear in `rules.yaml`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RulesConfig {
    /// Clock hour at which night starts.
    pub night_start: Decimal,
    /// Clock hour at which night ends (exclusive).
    pub night_end: Decimal,
    /// Hours at the start of a shift that count as ordinary time.
    pub ordinary_limit: Decimal,
    /// Sweep granularity in hours.
    pub sweep_step: Decimal,
    /// Longest shift accepted from callers, in hours.
    #[serde(default = "default_max_shift_hours")]
    pub max_shift_hours: Decimal,
}

/// Validated classification rules.
///
/// # Example
///
/// ```
/// use surcharge_engine::config::SurchargeRules;
/// use rust_decimal::Decimal;
///
/// let rules = SurchargeRules::default();
/// assert_eq!(rules.ordinary_limit(), Decimal::from(10));
///
/// let bad = SurchargeRules::new(Decimal::from(21), Decimal::from(6), Decimal::from(10), Decimal::ZERO);
/// assert!(bad.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurchargeRules {
    night_start: Decimal,
    night_end: Decimal,
    ordinary_limit: Decimal,
    sweep_step: Decimal,
    max_shift_hours: Decimal,
}

impl SurchargeRules {
    /// Creates a validated rule set with the default [`MAX_SHIFT_HOURS`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRules`] if:
    /// - `sweep_step` is not positive
    /// - `ordinary_limit` is negative
    /// - either night bound is outside `[0, 24)`
    /// - the night bounds are equal
    pub fn new(
        night_start: Decimal,
        night_end: Decimal,
        ordinary_limit: Decimal,
        sweep_step: Decimal,
    ) -> EngineResult<Self> {
        if sweep_step <= Decimal::ZERO {
            return Err(invalid("sweep_step", "must be greater than zero"));
        }
        if ordinary_limit < Decimal::ZERO {
            return Err(invalid("ordinary_limit", "must not be negative"));
        }
        for (field, hour) in [("night_start", night_start), ("night_end", night_end)] {
            if hour < Decimal::ZERO || hour >= HOURS_PER_DAY {
                return Err(invalid(field, "must be a clock hour in [0, 24)"));
            }
        }
        if night_start == night_end {
            return Err(invalid("night_end", "must differ from night_start"));
        }

        Ok(Self {
            night_start,
            night_end,
            ordinary_limit,
            sweep_step,
            max_shift_hours: MAX_SHIFT_HOURS,
        })
    }

    /// Replaces the longest shift accepted from callers.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRules`] if `max_shift_hours` is not
    /// positive.
    pub fn with_max_shift_hours(mut self, max_shift_hours: Decimal) -> EngineResult<Self> {
        if max_shift_hours <= Decimal::ZERO {
            return Err(invalid("max_shift_hours", "must be greater than zero"));
        }
        self.max_shift_hours = max_shift_hours;
        Ok(self)
    }

    /// Clock hour at which night starts.
    pub fn night_start(&self) -> Decimal {
        self.night_start
    }

    /// Clock hour at which night ends (exclusive).
    pub fn night_end(&self) -> Decimal {
        self.night_end
    }

    /// Length of the ordinary window in hours.
    pub fn ordinary_limit(&self) -> Decimal {
        self.ordinary_limit
    }

    /// Sweep granularity in hours.
    pub fn sweep_step(&self) -> Decimal {
        self.sweep_step
    }

    /// Longest shift accepted from callers, in hours.
    pub fn max_shift_hours(&self) -> Decimal {
        self.max_shift_hours
    }

    /// Rejects shifts longer than [`max_shift_hours`](Self::max_shift_hours).
    ///
    /// The classifier itself handles any length; this bound keeps request
    /// handlers from sweeping arbitrarily long shifts.
    pub fn check_shift_length(&self, shift: &Shift) -> EngineResult<()> {
        let hours = shift.total_hours();
        if hours > self.max_shift_hours {
            return Err(EngineError::InvalidShift {
                message: format!(
                    "shift length of {} hours exceeds the {} hour maximum",
                    hours.normalize(),
                    self.max_shift_hours.normalize()
                ),
            });
        }
        Ok(())
    }

    /// The night window described by these rules.
    pub fn night_window(&self) -> NightWindow {
        NightWindow::new(self.night_start, self.night_end)
    }
}

impl Default for SurchargeRules {
    fn default() -> Self {
        Self {
            night_start: NIGHT_START,
            night_end: NIGHT_END,
            ordinary_limit: ORDINARY_LIMIT,
            sweep_step: SWEEP_STEP,
            max_shift_hours: MAX_SHIFT_HOURS,
        }
    }
}

impl TryFrom<RulesConfig> for SurchargeRules {
    type Error = EngineError;

    fn try_from(raw: RulesConfig) -> EngineResult<Self> {
        Self::new(
            raw.night_start,
            raw.night_end,
            raw.ordinary_limit,
            raw.sweep_step,
        )?
        .with_max_shift_hours(raw.max_shift_hours)
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidRules {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// The complete policy configuration: metadata plus rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyConfig {
    metadata: PolicyMetadata,
    rules: SurchargeRules,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, rules: SurchargeRules) -> Self {
        Self { metadata, rules }
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the classification rules.
    pub fn rules(&self) -> &SurchargeRules {
        &self.rules
    }
}
