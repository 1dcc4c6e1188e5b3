//! Calculation logic for the Surcharge Engine.
//!
//! This module contains the day/night predicate, the fixed-step interval
//! sweep, ordinary/overtime window detection, the two-phase surcharge
//! classifier and the single-pass slot estimator used to cross-check it.

mod divergence;
mod night_window;
mod ordinary_window;
mod surcharge;
mod sweep;

pub use divergence::{DivergenceReport, compare_implementations, estimate_by_slots};
pub use night_window::{
    DayPeriod, HOURS_PER_DAY, NIGHT_END, NIGHT_START, NightWindow, clock_hour, is_night_hour,
};
pub use ordinary_window::{ORDINARY_LIMIT, OrdinaryWindowSplit, split_ordinary_window};
pub use surcharge::{SurchargeClassification, classify, classify_shift, classify_with_audit};
pub use sweep::{SWEEP_STEP, SubInterval, SubIntervals, night_hours_in_window, sweep};
