//! Evaluation output models.
//!
//! This module contains the [`EvaluationResult`] produced for every job
//! evaluation, the [`AnnualLeaveSummary`], and the audit structures that
//! record how each figure was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of evaluating a job against the statutory rules.
///
/// Monetary figures are whole currency units, rounded half-up.
///
/// # Example
///
/// ```
/// use labor_engine::models::EvaluationResult;
/// use rust_decimal::Decimal;
///
/// let result = EvaluationResult {
///     min_wage_ok: true,
///     min_wage_required: 10030,
///     weekly_holiday_pay: 69000,
///     annual_leave_days: Decimal::new(10, 0),
///     severance_estimate: 0,
///     warnings: vec![],
/// };
/// assert!(result.warnings.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Whether the hourly rate meets the minimum wage.
    pub min_wage_ok: bool,
    /// The minimum hourly wage the rate was checked against.
    pub min_wage_required: u64,
    /// Estimated weekly holiday allowance.
    pub weekly_holiday_pay: u64,
    /// Annual leave days accrued under the tenure and attendance rules.
    pub annual_leave_days: Decimal,
    /// Estimated severance pay.
    pub severance_estimate: u64,
    /// Compliance warnings, in rule order.
    pub warnings: Vec<String>,
}

/// Annual leave balance for a job.
///
/// `used` is always zero: leave usage is not tracked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualLeaveSummary {
    /// Total days accrued.
    pub total: Decimal,
    /// Days already taken.
    pub used: Decimal,
    /// Days still available (`max(0, total - used)`).
    pub available: Decimal,
}

/// A single step in the audit trace recording a rule decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute article behind this rule.
    pub statute_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The ordered audit steps of one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of rule steps.
    pub steps: Vec<AuditStep>,
}

impl AuditTrace {
    /// Appends a step, returning the number the next step should use.
    pub fn push(&mut self, step: AuditStep) -> u32 {
        self.steps.push(step);
        self.steps.len() as u32 + 1
    }

    /// Finds the step recorded for a rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// An evaluation result together with the trace that explains it.
///
/// The result fields are flattened into the top level when serialized, so
/// a report is a superset of the plain [`EvaluationResult`] JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// The evaluation outcome.
    #[serde(flatten)]
    pub result: EvaluationResult,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The version label of the rule set used.
    pub rules_version: String,
    /// How each figure was derived.
    pub audit_trace: AuditTrace,
}
