//! Fixed-step interval sweep.
//!
//! A window of absolute shift hours is walked in sub-intervals of at most
//! one sweep step. The final sub-interval is clipped to the window end and
//! each sub-interval takes the day/night period of its start instant.
//!
//! Steps are counted as offsets from the window start, so the walk stays
//! exact however large the absolute hours are.

use rust_decimal::Decimal;

use crate::config::SurchargeRules;

use super::night_window::{DayPeriod, NightWindow, clock_hour};

/// Default sweep granularity in hours (30 minutes).
pub const SWEEP_STEP: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// One step of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubInterval {
    /// Hours from the window start to the start of this step.
    pub offset: Decimal,
    /// Length of the step in hours.
    pub hours: Decimal,
    /// Day/night classification of the step's start instant.
    pub period: DayPeriod,
}

/// Iterator over the sub-intervals of a window. Created by [`sweep`].
#[derive(Debug, Clone)]
pub struct SubIntervals {
    clock_origin: Decimal,
    offset: Decimal,
    length: Decimal,
    step: Decimal,
    night: NightWindow,
}

impl Iterator for SubIntervals {
    type Item = SubInterval;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.length || self.step <= Decimal::ZERO {
            return None;
        }

        let start = self.offset;
        let end = start
            .checked_add(self.step)
            .map_or(self.length, |end| end.min(self.length));
        // Past 28 significant digits a step can round away to nothing.
        if end <= start {
            self.offset = self.length;
            return None;
        }
        self.offset = end;

        Some(SubInterval {
            offset: start,
            hours: end - start,
            period: self.night.period_at(self.clock_origin + clock_hour(start)),
        })
    }
}

/// Sweeps `[window_start, window_end)` in steps of `step` hours.
///
/// An empty or inverted window yields nothing, as does a non-positive step.
/// A window too long to represent is treated as `Decimal::MAX` hours.
///
/// ```
/// use surcharge_engine::calculation::{sweep, NightWindow, SWEEP_STEP};
/// use rust_decimal::Decimal;
///
/// let steps: Vec<_> = sweep(Decimal::from(20), Decimal::from(22), SWEEP_STEP, NightWindow::default())
///     .collect();
/// assert_eq!(steps.len(), 4);
/// ```
pub fn sweep(
    window_start: Decimal,
    window_end: Decimal,
    step: Decimal,
    night: NightWindow,
) -> SubIntervals {
    let length = if window_end > window_start {
        window_end.checked_sub(window_start).unwrap_or(Decimal::MAX)
    } else {
        Decimal::ZERO
    };

    SubIntervals {
        clock_origin: clock_hour(window_start),
        offset: Decimal::ZERO,
        length,
        step,
        night,
    }
}

/// Returns the number of night hours within `[window_start, window_end)`.
///
/// Both the ordinary window and the overtime window are measured with this
/// function.
///
/// ```
/// use surcharge_engine::calculation::night_hours_in_window;
/// use surcharge_engine::config::SurchargeRules;
/// use rust_decimal::Decimal;
///
/// let rules = SurchargeRules::default();
/// // 0:00 to 10:00 contains 0:00 to 6:00 of night
/// let night = night_hours_in_window(Decimal::ZERO, Decimal::from(10), &rules);
/// assert_eq!(night, Decimal::from(6));
/// ```
pub fn night_hours_in_window(
    window_start: Decimal,
    window_end: Decimal,
    rules: &SurchargeRules,
) -> Decimal {
    sweep(
        window_start,
        window_end,
        rules.sweep_step(),
        rules.night_window(),
    )
    .filter(|sub| sub.period == DayPeriod::Night)
    .map(|sub| sub.hours)
    .sum()
}
