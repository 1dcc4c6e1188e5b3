//! Classification result models.
//!
//! This module contains the [`ClassificationResult`] type returned by the
//! HTTP API and the audit structures that record how each category total
//! was reached.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CategoryHours, Shift};

/// Aggregated hour totals for a classified shift.
///
/// # Example
///
/// ```
/// use surcharge_engine::models::HourTotals;
/// use rust_decimal::Decimal;
///
/// let totals = HourTotals {
///     total_hours: Decimal::from(14),
///     ordinary_hours: Decimal::from(10),
///     overtime_hours: Decimal::from(4),
/// };
/// assert_eq!(totals.ordinary_hours + totals.overtime_hours, totals.total_hours);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourTotals {
    /// Total worked hours.
    pub total_hours: Decimal,
    /// Hours inside the ordinary window.
    pub ordinary_hours: Decimal,
    /// Hours in the overtime window.
    pub overtime_hours: Decimal,
}

/// A single step in the audit trace recording a classification decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during classification.
///
/// Warnings flag inputs that were classified normally but deserve a look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// All steps in order.
    pub steps: Vec<AuditStep>,
    /// Any warnings raised.
    pub warnings: Vec<AuditWarning>,
    /// Time taken in microseconds.
    pub duration_us: u64,
}

/// The full output of a classification request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Unique identifier for this classification.
    pub calculation_id: Uuid,
    /// When the classification was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The shift that was classified.
    pub shift: Shift,
    /// Hours per surcharge category.
    pub categories: CategoryHours,
    /// Hour totals.
    pub totals: HourTotals,
    /// Audit trace.
    pub audit_trace: AuditTrace,
}
