//! Ordinary/overtime window detection.
//!
//! This module splits a shift into its ordinary window (the first
//! [`ORDINARY_LIMIT`] hours) and its overtime window (everything after).

use rust_decimal::Decimal;

use crate::models::{AuditStep, Shift};

/// Number of hours at the start of a shift that count as ordinary time.
pub const ORDINARY_LIMIT: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// The ordinary/overtime split of a single shift.
///
/// The ordinary window is `[ordinary_start, ordinary_end)` and the overtime
/// window, when present, is `[ordinary_end, shift_end)`.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::{split_ordinary_window, ORDINARY_LIMIT};
/// use surcharge_engine::models::Shift;
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new(Decimal::from(6), Decimal::from(20), false);
/// let split = split_ordinary_window(&shift, ORDINARY_LIMIT);
///
/// assert_eq!(split.ordinary_hours, Decimal::from(10));
/// assert_eq!(split.overtime_hours, Decimal::from(4));
/// assert_eq!(split.overtime_window(), Some((Decimal::from(16), Decimal::from(20))));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrdinaryWindowSplit {
    /// Worked hours in the shift, zero for inverted shifts.
    pub total_hours: Decimal,
    /// Hours inside the ordinary window (at most the limit).
    pub ordinary_hours: Decimal,
    /// Hours beyond the ordinary window.
    pub overtime_hours: Decimal,
    /// Absolute hour at which the ordinary window starts.
    pub ordinary_start: Decimal,
    /// Absolute hour at which the ordinary window ends.
    pub ordinary_end: Decimal,
    /// Absolute hour at which the shift ends.
    pub shift_end: Decimal,
}

impl OrdinaryWindowSplit {
    /// Returns the absolute bounds of the overtime window, if any.
    pub fn overtime_window(&self) -> Option<(Decimal, Decimal)> {
        if self.overtime_hours > Decimal::ZERO {
            Some((self.ordinary_end, self.shift_end))
        } else {
            None
        }
    }

    /// Builds the audit step documenting this split.
    pub fn audit_step(&self, limit: Decimal, step_number: u32) -> AuditStep {
        let reasoning = if self.overtime_hours > Decimal::ZERO {
            format!(
                "{} hours worked exceeds {} hour ordinary limit by {} hours, overtime runs from hour {} to {}",
                self.total_hours.normalize(),
                limit.normalize(),
                self.overtime_hours.normalize(),
                self.ordinary_end.normalize(),
                self.shift_end.normalize()
            )
        } else if self.total_hours == limit {
            format!(
                "{} hours worked equals {} hour ordinary limit, no overtime",
                self.total_hours.normalize(),
                limit.normalize()
            )
        } else {
            format!(
                "{} hours worked is under {} hour ordinary limit, no overtime",
                self.total_hours.normalize(),
                limit.normalize()
            )
        };

        AuditStep {
            step_number,
            rule_id: "ordinary_window_split".to_string(),
            rule_name: "Ordinary Window Split".to_string(),
            input: serde_json::json!({
                "total_hours": self.total_hours.normalize().to_string(),
                "ordinary_limit": limit.normalize().to_string()
            }),
            output: serde_json::json!({
                "ordinary_hours": self.ordinary_hours.normalize().to_string(),
                "overtime_hours": self.overtime_hours.normalize().to_string()
            }),
            reasoning,
        }
    }
}

/// Splits a shift into ordinary and overtime hours.
///
/// Ordinary hours are capped at `limit`; anything beyond is overtime. A
/// shift whose end is not after its start has zero hours of each.
pub fn split_ordinary_window(shift: &Shift, limit: Decimal) -> OrdinaryWindowSplit {
    let total_hours = shift.total_hours();
    let ordinary_hours = total_hours.min(limit.max(Decimal::ZERO));
    let overtime_hours = total_hours - ordinary_hours;

    OrdinaryWindowSplit {
        total_hours,
        ordinary_hours,
        overtime_hours,
        ordinary_start: shift.start_hour,
        ordinary_end: shift
            .start_hour
            .checked_add(ordinary_hours)
            .unwrap_or(Decimal::MAX),
        shift_end: shift.end_hour.max(shift.start_hour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn shift(start: &str, end: &str) -> Shift {
        Shift::new(dec(start), dec(end), false)
    }

    // ==========================================================================
    // OW-001: exactly 10 hours - no overtime
    // ==========================================================================
    #[test]
    fn test_ow_001_exactly_10_hours_no_overtime() {
        let split = split_ordinary_window(&shift("8", "18"), ORDINARY_LIMIT);

        assert_eq!(split.ordinary_hours, dec("10"));
        assert_eq!(split.overtime_hours, dec("0"));
        assert_eq!(split.ordinary_end, dec("18"));
        assert_eq!(split.overtime_window(), None);
    }

    // ==========================================================================
    // OW-002: 14 hours - 4 hours overtime
    // ==========================================================================
    #[test]
    fn test_ow_002_14_hours_4_overtime() {
        let split = split_ordinary_window(&shift("6", "20"), ORDINARY_LIMIT);

        assert_eq!(split.ordinary_hours, dec("10"));
        assert_eq!(split.overtime_hours, dec("4"));
        assert_eq!(split.overtime_window(), Some((dec("16"), dec("20"))));
    }

    // ==========================================================================
    // OW-003: short shift
    // ==========================================================================
    #[test]
    fn test_ow_003_short_shift_clipped_to_shift_end() {
        let split = split_ordinary_window(&shift("22", "26.5"), ORDINARY_LIMIT);

        assert_eq!(split.ordinary_hours, dec("4.5"));
        assert_eq!(split.overtime_hours, dec("0"));
        assert_eq!(split.ordinary_end, dec("26.5"));
    }

    #[test]
    fn test_inverted_shift_is_empty() {
        let split = split_ordinary_window(&shift("10", "9"), ORDINARY_LIMIT);

        assert_eq!(split.total_hours, dec("0"));
        assert_eq!(split.ordinary_hours, dec("0"));
        assert_eq!(split.overtime_hours, dec("0"));
        assert_eq!(split.ordinary_end, dec("10"));
    }

    #[test]
    fn test_multi_day_shift() {
        let split = split_ordinary_window(&shift("0", "48"), ORDINARY_LIMIT);

        assert_eq!(split.ordinary_hours, dec("10"));
        assert_eq!(split.overtime_hours, dec("38"));
        assert_eq!(split.overtime_window(), Some((dec("10"), dec("48"))));
    }

    #[test]
    fn test_custom_limit() {
        let split = split_ordinary_window(&shift("0", "12"), dec("7.5"));

        assert_eq!(split.ordinary_hours, dec("7.5"));
        assert_eq!(split.overtime_hours, dec("4.5"));
    }

    #[test]
    fn test_audit_step_reasoning_for_overtime() {
        let split = split_ordinary_window(&shift("6", "20"), ORDINARY_LIMIT);
        let step = split.audit_step(ORDINARY_LIMIT, 3);

        assert_eq!(step.step_number, 3);
        assert_eq!(step.rule_id, "ordinary_window_split");
        assert!(step.reasoning.contains("exceeds"));
        assert_eq!(step.input["total_hours"].as_str().unwrap(), "14");
        assert_eq!(step.output["overtime_hours"].as_str().unwrap(), "4");
    }

    #[test]
    fn test_audit_step_reasoning_for_exact_limit() {
        let split = split_ordinary_window(&shift("8", "18"), ORDINARY_LIMIT);
        let step = split.audit_step(ORDINARY_LIMIT, 1);
        assert!(step.reasoning.contains("equals"));
    }

    #[test]
    fn test_audit_step_reasoning_under_limit() {
        let split = split_ordinary_window(&shift("8", "12"), ORDINARY_LIMIT);
        let step = split.audit_step(ORDINARY_LIMIT, 1);
        assert!(step.reasoning.contains("under"));
        assert!(step.reasoning.contains("no overtime"));
    }

    #[test]
    fn test_default_limit_constant() {
        assert_eq!(ORDINARY_LIMIT, dec("10"));
    }
}
