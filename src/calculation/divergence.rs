//! Cross-checking two independent classifiers.
//!
//! Client-side estimators usually walk a shift once, slot by slot, deciding
//! each slot's category from its position in the shift and its clock start.
//! The authoritative classifier instead sweeps the ordinary and overtime
//! windows separately. Both must agree exactly; [`compare_implementations`]
//! runs the two side by side and reports any category that differs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SurchargeRules;
use crate::models::{CategoryDifference, CategoryHours, Shift, SurchargeCategory};

use super::night_window::{DayPeriod, clock_hour};
use super::surcharge::classify_shift;

/// Classifies a shift in a single slot-by-slot pass.
///
/// Slots are at most one sweep step long and are clipped at the ordinary
/// limit and at the shift end. A slot starting inside the ordinary window
/// counts toward RN (if night) and RD (if holiday); later slots count toward
/// the overtime category matching the holiday flag and the slot's period.
///
/// ```
/// use surcharge_engine::calculation::estimate_by_slots;
/// use surcharge_engine::config::SurchargeRules;
/// use surcharge_engine::models::Shift;
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new(Decimal::ZERO, Decimal::from(48), true);
/// let hours = estimate_by_slots(&shift, &SurchargeRules::default());
/// assert_eq!(hours.rn, Decimal::from(6));
/// ```
pub fn estimate_by_slots(shift: &Shift, rules: &SurchargeRules) -> CategoryHours {
    let mut hours = CategoryHours::default();
    if shift.is_empty() {
        return hours;
    }

    let night = rules.night_window();
    let step = rules.sweep_step();
    let total = shift.total_hours();
    let ordinary = total.min(rules.ordinary_limit().max(Decimal::ZERO));
    let clock_origin = clock_hour(shift.start_hour);

    // Slots are tracked as offsets from the shift start.
    let mut offset = Decimal::ZERO;
    while offset < total {
        let in_ordinary = offset < ordinary;
        let boundary = if in_ordinary { ordinary } else { total };
        let slot_end = offset
            .checked_add(step)
            .map_or(boundary, |end| end.min(boundary));
        if slot_end <= offset {
            break;
        }

        let length = slot_end - offset;
        let period = night.period_at(clock_origin + clock_hour(offset));

        if in_ordinary {
            if period == DayPeriod::Night {
                hours.add(SurchargeCategory::Rn, length);
            }
            if shift.is_holiday {
                hours.add(SurchargeCategory::Rd, length);
            }
        } else {
            hours.add(overtime_category(shift.is_holiday, period), length);
        }

        offset = slot_end;
    }

    hours.normalized()
}

fn overtime_category(is_holiday: bool, period: DayPeriod) -> SurchargeCategory {
    match (is_holiday, period) {
        (true, DayPeriod::Night) => SurchargeCategory::Hefn,
        (true, DayPeriod::Day) => SurchargeCategory::Hefd,
        (false, DayPeriod::Night) => SurchargeCategory::Hen,
        (false, DayPeriod::Day) => SurchargeCategory::Hed,
    }
}

/// Side-by-side output of the two classifiers for one shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivergenceReport {
    /// The shift that was classified.
    pub shift: Shift,
    /// Output of the two-phase window classifier.
    pub authoritative: CategoryHours,
    /// Output of the single-pass slot estimator.
    pub estimate: CategoryHours,
    /// Categories where the estimate differs from the authoritative value.
    pub differences: Vec<CategoryDifference>,
}

impl DivergenceReport {
    /// Returns true if both classifiers produced identical hours.
    pub fn is_consistent(&self) -> bool {
        self.differences.is_empty()
    }

    /// Sum of the absolute differences across all categories.
    pub fn total_divergence(&self) -> Decimal {
        self.differences.iter().map(|d| d.delta.abs()).sum()
    }
}

/// Runs both classifiers on `shift` and compares their outputs.
///
/// ```
/// use surcharge_engine::calculation::compare_implementations;
/// use surcharge_engine::config::SurchargeRules;
/// use surcharge_engine::models::Shift;
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new(Decimal::from(1), Decimal::from(48), true);
/// let report = compare_implementations(&shift, &SurchargeRules::default());
/// assert!(report.is_consistent());
/// ```
pub fn compare_implementations(shift: &Shift, rules: &SurchargeRules) -> DivergenceReport {
    let authoritative = classify_shift(shift, rules);
    let estimate = estimate_by_slots(shift, rules);
    let differences = authoritative.differences(&estimate);

    DivergenceReport {
        shift: *shift,
        authoritative,
        estimate,
        differences,
    }
}
