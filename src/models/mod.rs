//! Core data models for the Surcharge Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod category_hours;
mod classification_result;
mod shift;

pub use category_hours::{CategoryDifference, CategoryHours, SurchargeCategory};
pub use classification_result::{
    AuditStep, AuditTrace, AuditWarning, ClassificationResult, HourTotals,
};
pub use shift::Shift;
