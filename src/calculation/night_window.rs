//! Day/night classification of clock hours.
//!
//! Every part of the engine that needs to know whether an instant falls in
//! the night window goes through [`NightWindow::contains`], so the ordinary
//! sweep, the overtime sweep and the slot estimator share one definition.

use rust_decimal::Decimal;

/// Hour of day at which the night window opens (21:00).
pub const NIGHT_START: Decimal = Decimal::from_parts(21, 0, 0, false, 0);

/// Hour of day at which the night window closes, exclusive (06:00).
pub const NIGHT_END: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Number of hours in a clock day.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Whether an instant is classified as day or night time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Outside the night window.
    Day,
    /// Inside the night window.
    Night,
}

/// The span of clock hours treated as night.
///
/// When `start > end` the window wraps past midnight (the default 21:00 to
/// 06:00 window does). Otherwise it is the half-open range `[start, end)`
/// within a single day.
///
/// # Example
///
/// ```
/// use surcharge_engine::calculation::NightWindow;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let night = NightWindow::default();
/// assert!(night.contains(Decimal::from_str("23.5").unwrap()));
/// assert!(night.contains(Decimal::from_str("0.5").unwrap()));
/// assert!(!night.contains(Decimal::from(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightWindow {
    start: Decimal,
    end: Decimal,
}

impl NightWindow {
    /// Creates a night window from its opening and closing clock hours.
    pub const fn new(start: Decimal, end: Decimal) -> Self {
        Self { start, end }
    }

    /// The clock hour at which night begins.
    pub fn start(&self) -> Decimal {
        self.start
    }

    /// The clock hour at which night ends (exclusive).
    pub fn end(&self) -> Decimal {
        self.end
    }

    /// Returns true if the given clock hour (in `[0, 24)`) is night time.
    pub fn contains(&self, clock_hour: Decimal) -> bool {
        if self.start > self.end {
            clock_hour >= self.start || clock_hour < self.end
        } else {
            clock_hour >= self.start && clock_hour < self.end
        }
    }

    /// Classifies an absolute shift hour by its wall-clock hour.
    pub fn period_at(&self, absolute_hour: Decimal) -> DayPeriod {
        if self.contains(clock_hour(absolute_hour)) {
            DayPeriod::Night
        } else {
            DayPeriod::Day
        }
    }
}

impl Default for NightWindow {
    fn default() -> Self {
        Self::new(NIGHT_START, NIGHT_END)
    }
}

/// Converts an absolute shift hour to the hour of day, in `[0, 24)`.
///
/// Negative inputs wrap backwards, so `-1` maps to `23`.
///
/// ```
/// use surcharge_engine::calculation::clock_hour;
/// use rust_decimal::Decimal;
///
/// assert_eq!(clock_hour(Decimal::from(45)), Decimal::from(21));
/// assert_eq!(clock_hour(Decimal::from(-1)), Decimal::from(23));
/// ```
pub fn clock_hour(absolute_hour: Decimal) -> Decimal {
    let hour = absolute_hour % HOURS_PER_DAY;
    if hour < Decimal::ZERO {
        hour + HOURS_PER_DAY
    } else {
        hour
    }
}

/// Returns true if the clock hour falls in the default 21:00 to 06:00 window.
pub fn is_night_hour(clock_hour: Decimal) -> bool {
    NightWindow::default().contains(clock_hour)
}
