//! Surcharge classification.
//!
//! A shift is decomposed in two phases. The ordinary window (the first
//! `ordinary_limit` hours) is swept for night hours, which become RN. The
//! overtime window beyond it is swept the same way and split into daytime
//! and nighttime overtime, using the holiday pair (HEFD/HEFN) when the shift
//! is a holiday and the regular pair (HED/HEN) otherwise. Holiday shifts
//! also record the whole ordinary window as RD.
//!
//! RN never includes overtime hours: night time after the ordinary limit is
//! counted only under HEN or HEFN.

use rust_decimal::Decimal;

use crate::config::SurchargeRules;
use crate::models::{AuditStep, AuditWarning, CategoryHours, HourTotals, Shift};

use super::night_window::clock_hour;
use super::ordinary_window::{OrdinaryWindowSplit, split_ordinary_window};
use super::sweep::night_hours_in_window;

/// Night hours found in each window of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NightBreakdown {
    ordinary_night: Decimal,
    overtime_night: Decimal,
}

impl NightBreakdown {
    fn measure(split: &OrdinaryWindowSplit, rules: &SurchargeRules) -> Self {
        let ordinary_night =
            night_hours_in_window(split.ordinary_start, split.ordinary_end, rules);
        let overtime_night = split
            .overtime_window()
            .map(|(start, end)| night_hours_in_window(start, end, rules))
            .unwrap_or(Decimal::ZERO);

        Self {
            ordinary_night,
            overtime_night,
        }
    }
}

/// The result of an audited classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurchargeClassification {
    /// Hours per surcharge category.
    pub categories: CategoryHours,
    /// Total, ordinary and overtime hours.
    pub totals: HourTotals,
    /// The audit steps recording each rule application.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings about the input.
    pub warnings: Vec<AuditWarning>,
}

/// Classifies a shift under the default rules.
///
/// `start_hour` and `end_hour` are absolute hours; a shift from midnight to
/// midnight two days later is `0..48`. A shift whose end is not after its
/// start yields all zeros.
///
/// # Examples
///
/// ```
/// use surcharge_engine::calculation::classify;
/// use rust_decimal::Decimal;
///
/// let hours = classify(Decimal::ZERO, Decimal::from(48), true);
///
/// assert_eq!(hours.rn, Decimal::from(6));
/// assert_eq!(hours.rd, Decimal::from(10));
/// assert_eq!(hours.hefd, Decimal::from(26));
/// assert_eq!(hours.hefn, Decimal::from(12));
/// assert_eq!(hours.hed + hours.hen, Decimal::ZERO);
/// ```
pub fn classify(start_hour: Decimal, end_hour: Decimal, is_holiday: bool) -> CategoryHours {
    classify_shift(
        &Shift::new(start_hour, end_hour, is_holiday),
        &SurchargeRules::default(),
    )
}

/// Classifies a shift under the given rules.
pub fn classify_shift(shift: &Shift, rules: &SurchargeRules) -> CategoryHours {
    let split = split_ordinary_window(shift, rules.ordinary_limit());
    let night = NightBreakdown::measure(&split, rules);
    assign_categories(&split, &night, shift.is_holiday)
}

fn assign_categories(
    split: &OrdinaryWindowSplit,
    night: &NightBreakdown,
    is_holiday: bool,
) -> CategoryHours {
    let overtime_night = night.overtime_night.min(split.overtime_hours);
    let overtime_day = split.overtime_hours - overtime_night;

    let mut hours = CategoryHours {
        rn: night.ordinary_night,
        ..CategoryHours::default()
    };

    if is_holiday {
        hours.rd = split.ordinary_hours;
        hours.hefn = overtime_night;
        hours.hefd = overtime_day;
    } else {
        hours.hen = overtime_night;
        hours.hed = overtime_day;
    }

    hours.normalized()
}

/// Classifies a shift and records an audit trail of every rule applied.
///
/// The categories are identical to [`classify_shift`]. Steps are numbered
/// from `step_number`.
///
/// ```
/// use surcharge_engine::calculation::classify_with_audit;
/// use surcharge_engine::config::SurchargeRules;
/// use surcharge_engine::models::Shift;
/// use rust_decimal::Decimal;
///
/// let shift = Shift::new(Decimal::from(6), Decimal::from(20), false);
/// let result = classify_with_audit(&shift, &SurchargeRules::default(), 1);
///
/// assert_eq!(result.categories.hed, Decimal::from(4));
/// assert_eq!(result.audit_steps.len(), 4);
/// ```
pub fn classify_with_audit(
    shift: &Shift,
    rules: &SurchargeRules,
    step_number: u32,
) -> SurchargeClassification {
    let limit = rules.ordinary_limit();
    let split = split_ordinary_window(shift, limit);
    let night = NightBreakdown::measure(&split, rules);
    let categories = assign_categories(&split, &night, shift.is_holiday);

    let mut audit_steps = vec![split.audit_step(limit, step_number)];
    audit_steps.push(night_surcharge_step(&split, &categories, rules, step_number + 1));
    audit_steps.push(holiday_surcharge_step(
        &split,
        &categories,
        shift.is_holiday,
        step_number + 2,
    ));
    if split.overtime_hours > Decimal::ZERO {
        audit_steps.push(overtime_split_step(
            &split,
            &night,
            &categories,
            shift.is_holiday,
            step_number + 3,
        ));
    }

    SurchargeClassification {
        categories,
        totals: HourTotals {
            total_hours: split.total_hours.normalize(),
            ordinary_hours: split.ordinary_hours.normalize(),
            overtime_hours: split.overtime_hours.normalize(),
        },
        audit_steps,
        warnings: input_warnings(shift, rules),
    }
}

fn hours_str(hours: Decimal) -> String {
    hours.normalize().to_string()
}

fn night_surcharge_step(
    split: &OrdinaryWindowSplit,
    categories: &CategoryHours,
    rules: &SurchargeRules,
    step_number: u32,
) -> AuditStep {
    let night = rules.night_window();
    AuditStep {
        step_number,
        rule_id: "ordinary_night_surcharge".to_string(),
        rule_name: "Ordinary Night Surcharge".to_string(),
        input: serde_json::json!({
            "window_start": hours_str(split.ordinary_start),
            "window_end": hours_str(split.ordinary_end),
            "night_start": hours_str(night.start()),
            "night_end": hours_str(night.end()),
            "sweep_step": hours_str(rules.sweep_step())
        }),
        output: serde_json::json!({ "RN": hours_str(categories.rn) }),
        reasoning: format!(
            "{} of the {} ordinary hours fall between {}:00 and {}:00",
            hours_str(categories.rn),
            hours_str(split.ordinary_hours),
            hours_str(night.start()),
            hours_str(night.end())
        ),
    }
}

fn holiday_surcharge_step(
    split: &OrdinaryWindowSplit,
    categories: &CategoryHours,
    is_holiday: bool,
    step_number: u32,
) -> AuditStep {
    let reasoning = if is_holiday {
        format!(
            "Holiday shift: all {} ordinary hours carry the holiday surcharge",
            hours_str(split.ordinary_hours)
        )
    } else {
        "Not a holiday, no holiday surcharge applies".to_string()
    };

    AuditStep {
        step_number,
        rule_id: "holiday_ordinary_surcharge".to_string(),
        rule_name: "Holiday Ordinary Surcharge".to_string(),
        input: serde_json::json!({
            "is_holiday": is_holiday,
            "ordinary_hours": hours_str(split.ordinary_hours)
        }),
        output: serde_json::json!({ "RD": hours_str(categories.rd) }),
        reasoning,
    }
}

fn overtime_split_step(
    split: &OrdinaryWindowSplit,
    night: &NightBreakdown,
    categories: &CategoryHours,
    is_holiday: bool,
    step_number: u32,
) -> AuditStep {
    let (day_code, night_code, day_hours, night_hours) = if is_holiday {
        ("HEFD", "HEFN", categories.hefd, categories.hefn)
    } else {
        ("HED", "HEN", categories.hed, categories.hen)
    };

    let mut output = serde_json::Map::new();
    output.insert(day_code.to_string(), hours_str(day_hours).into());
    output.insert(night_code.to_string(), hours_str(night_hours).into());

    AuditStep {
        step_number,
        rule_id: "overtime_day_night_split".to_string(),
        rule_name: "Overtime Day/Night Split".to_string(),
        input: serde_json::json!({
            "window_start": hours_str(split.ordinary_end),
            "window_end": hours_str(split.shift_end),
            "overtime_hours": hours_str(split.overtime_hours),
            "overtime_night_hours": hours_str(night.overtime_night),
            "is_holiday": is_holiday
        }),
        output: serde_json::Value::Object(output),
        reasoning: format!(
            "{} overtime hours: {} at night ({}), {} during the day ({})",
            hours_str(split.overtime_hours),
            hours_str(night_hours),
            night_code,
            hours_str(day_hours),
            day_code
        ),
    }
}

fn input_warnings(shift: &Shift, rules: &SurchargeRules) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if shift.is_empty() {
        warnings.push(AuditWarning {
            code: "NON_POSITIVE_DURATION".to_string(),
            message: format!(
                "Shift ends at hour {} which is not after its start at hour {}; all categories are zero",
                hours_str(shift.end_hour),
                hours_str(shift.start_hour)
            ),
            severity: "low".to_string(),
        });
    } else if !(clock_hour(shift.start_hour) % rules.sweep_step()).is_zero() {
        warnings.push(AuditWarning {
            code: "UNALIGNED_SWEEP".to_string(),
            message: format!(
                "Start hour {} is not a multiple of the {} hour sweep step; a step that crosses a day/night boundary takes the period of its start",
                hours_str(shift.start_hour),
                hours_str(rules.sweep_step())
            ),
            severity: "low".to_string(),
        });
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn run(start: &str, end: &str, holiday: bool) -> CategoryHours {
        classify(dec(start), dec(end), holiday)
    }

    fn expected(hed: &str, hen: &str, hefd: &str, hefn: &str, rn: &str, rd: &str) -> CategoryHours {
        CategoryHours {
            hed: dec(hed),
            hen: dec(hen),
            hefd: dec(hefd),
            hefn: dec(hefn),
            rn: dec(rn),
            rd: dec(rd),
        }
    }

    // ==========================================================================
    // SC-001: 1:00 to 48:00 holiday
    // ==========================================================================
    #[test]
    fn test_sc_001_47_hour_holiday_from_1am() {
        assert_eq!(run("1", "48", true), expected("0", "0", "25", "12", "5", "10"));
    }

    // ==========================================================================
    // SC-002: 0:00 to 48:00 holiday, RN capped to the ordinary window
    // ==========================================================================
    #[test]
    fn test_sc_002_48_hour_holiday_rn_capped() {
        assert_eq!(run("0", "48", true), expected("0", "0", "26", "12", "6", "10"));
    }

    // ==========================================================================
    // SC-003: 10:00 to 20:00 holiday
    // ==========================================================================
    #[test]
    fn test_sc_003_daytime_holiday_exact_limit() {
        assert_eq!(run("10", "20", true), expected("0", "0", "0", "0", "0", "10"));
    }

    // ==========================================================================
    // SC-004: 8:00 to 18:00 regular day
    // ==========================================================================
    #[test]
    fn test_sc_004_regular_day_no_surcharges() {
        assert!(run("8", "18", false).is_zero());
    }

    // ==========================================================================
    // SC-005: 6:00 to 20:00 regular day, 4 daytime overtime hours
    // ==========================================================================
    #[test]
    fn test_sc_005_daytime_overtime() {
        assert_eq!(run("6", "20", false), expected("4", "0", "0", "0", "0", "0"));
    }

    // ==========================================================================
    // SC-006: 21:00 to 45:00 regular day
    // ==========================================================================
    #[test]
    fn test_sc_006_overnight_24_hours() {
        // Ordinary window 21:00-07:00 holds 9 night hours. The overtime window
        // runs 07:00-21:00, entirely daytime.
        let hours = run("21", "45", false);
        assert_eq!(hours.rn, dec("9"));
        assert_eq!(hours.rd, dec("0"));
        assert_eq!(hours.hed + hours.hen, dec("14"));
        assert_eq!(hours, expected("14", "0", "0", "0", "9", "0"));
    }

    #[test]
    fn test_night_overtime_on_regular_day() {
        // 12:00-02:00: ordinary window ends 22:00 with one night hour,
        // overtime 22:00-02:00 is all night
        assert_eq!(run("12", "26", false), expected("0", "4", "0", "0", "1", "0"));
    }

    #[test]
    fn test_overtime_crossing_night_start() {
        // 10:00-24:00: overtime 20:00-24:00, 1h day then 3h night
        assert_eq!(run("10", "24", false), expected("1", "3", "0", "0", "0", "0"));
    }

    #[test]
    fn test_short_night_shift_holiday() {
        // 22:00-04:00 holiday: all 6 hours are night and holiday ordinary time
        assert_eq!(run("22", "28", true), expected("0", "0", "0", "0", "6", "6"));
    }

    #[test]
    fn test_zero_and_negative_durations_are_all_zero() {
        assert!(run("5", "5", true).is_zero());
        assert!(run("5", "4", true).is_zero());
        assert!(run("5", "4", false).is_zero());
    }

    #[test]
    fn test_fractional_shift_clipped_at_end() {
        // 20:15-22:00: steps at 20.25 and 20.75 are day, 21.25 and 21.75 are
        // night, and the last one is clipped to a quarter hour
        let hours = run("20.25", "22", false);
        assert_eq!(hours.rn, dec("0.75"));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let first = run("1.5", "39.25", true);
        let second = run("1.5", "39.25", true);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_outputs_are_normalized() {
        let json = serde_json::to_value(run("0", "48", true)).unwrap();
        assert_eq!(json["RN"].as_str().unwrap(), "6");
        assert_eq!(json["HED"].as_str().unwrap(), "0");
    }

    #[test]
    fn test_custom_rules() {
        let rules = SurchargeRules::new(dec("19"), dec("6"), dec("10"), dec("0.5")).unwrap();
        let shift = Shift::new(dec("0"), dec("24"), false);
        let hours = classify_shift(&shift, &rules);

        // Ordinary 0-10: 6 night hours. Overtime 10-24: 19-24 night.
        assert_eq!(hours.rn, dec("6"));
        assert_eq!(hours.hen, dec("5"));
        assert_eq!(hours.hed, dec("9"));
    }

    #[test]
    fn test_audit_matches_plain_classification() {
        let rules = SurchargeRules::default();
        let shift = Shift::new(dec("1"), dec("48"), true);
        let audited = classify_with_audit(&shift, &rules, 1);

        assert_eq!(audited.categories, classify_shift(&shift, &rules));
        assert_eq!(audited.totals.total_hours, dec("47"));
        assert_eq!(audited.totals.ordinary_hours, dec("10"));
        assert_eq!(audited.totals.overtime_hours, dec("37"));
    }

    #[test]
    fn test_audit_steps_numbered_and_named() {
        let shift = Shift::new(dec("1"), dec("48"), true);
        let audited = classify_with_audit(&shift, &SurchargeRules::default(), 5);

        let ids: Vec<_> = audited.audit_steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "ordinary_window_split",
                "ordinary_night_surcharge",
                "holiday_ordinary_surcharge",
                "overtime_day_night_split"
            ]
        );
        let numbers: Vec<_> = audited.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![5, 6, 7, 8]);

        let overtime = &audited.audit_steps[3];
        assert_eq!(overtime.output["HEFN"].as_str().unwrap(), "12");
        assert_eq!(overtime.output["HEFD"].as_str().unwrap(), "25");
    }

    #[test]
    fn test_audit_skips_overtime_step_without_overtime() {
        let shift = Shift::new(dec("8"), dec("18"), false);
        let audited = classify_with_audit(&shift, &SurchargeRules::default(), 1);

        assert_eq!(audited.audit_steps.len(), 3);
        assert!(audited.audit_steps[2].reasoning.contains("Not a holiday"));
        assert!(audited.warnings.is_empty());
    }

    #[test]
    fn test_warning_for_non_positive_duration() {
        let shift = Shift::new(dec("10"), dec("8"), false);
        let audited = classify_with_audit(&shift, &SurchargeRules::default(), 1);

        assert!(audited.categories.is_zero());
        assert_eq!(audited.warnings.len(), 1);
        assert_eq!(audited.warnings[0].code, "NON_POSITIVE_DURATION");
    }

    #[test]
    fn test_warning_for_unaligned_start() {
        let shift = Shift::new(dec("20.75"), dec("23"), false);
        let audited = classify_with_audit(&shift, &SurchargeRules::default(), 1);

        assert_eq!(audited.warnings.len(), 1);
        assert_eq!(audited.warnings[0].code, "UNALIGNED_SWEEP");
    }

    // ==========================================================================
    // SC-007: shifts at the top of the decimal range
    // ==========================================================================
    #[test]
    fn test_sc_007_shift_ending_at_decimal_max() {
        // MAX - 15 is clock hour 0: ordinary 00:00-10:00, overtime 10:00-15:00.
        let start = Decimal::MAX - dec("15");
        let hours = classify(start, Decimal::MAX, true);

        assert_eq!(hours.rn, dec("6"));
        assert_eq!(hours.rd, dec("10"));
        assert_eq!(hours.hefd, dec("5"));
        assert_eq!(hours.hefn, dec("0"));
    }

    #[test]
    fn test_short_day_shift_near_decimal_max() {
        let start = Decimal::MAX - dec("5");
        let hours = classify(start, Decimal::MAX, false);

        // Clock hours 10:00 to 15:00, all day and all ordinary
        assert!(hours.is_zero());
        let audited = classify_with_audit(
            &Shift::new(start, Decimal::MAX, false),
            &SurchargeRules::default(),
            1,
        );
        assert_eq!(audited.totals.ordinary_hours, dec("5"));
    }
}
