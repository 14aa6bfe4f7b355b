//! Minimum wage check.
//!
//! This module compares a job's hourly rate with the statutory minimum
//! hourly wage.

use rust_decimal::Decimal;

use crate::config::LaborRules;
use crate::models::AuditStep;

/// Statute article for the minimum wage rule.
pub const MINIMUM_WAGE_STATUTE: &str = "Minimum Wage Act Art. 6";

/// The result of a minimum wage check, including the audit step.
#[derive(Debug, Clone)]
pub struct MinimumWageResult {
    /// Whether the rate meets the minimum.
    pub min_wage_ok: bool,
    /// The minimum hourly wage checked against.
    pub min_wage_required: u64,
    /// The audit step recording this check.
    pub audit_step: AuditStep,
}

/// Checks an hourly rate against the minimum wage.
///
/// A rate exactly equal to the minimum passes.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::check_minimum_wage;
/// use labor_engine::config::LaborRules;
/// use rust_decimal::Decimal;
///
/// let rules = LaborRules::default();
/// let result = check_minimum_wage(Decimal::new(10030, 0), &rules, 1);
/// assert!(result.min_wage_ok);
/// assert_eq!(result.min_wage_required, 10030);
/// ```
pub fn check_minimum_wage(
    hourly_rate: Decimal,
    rules: &LaborRules,
    step_number: u32,
) -> MinimumWageResult {
    let required = rules.minimum_wage_hourly;
    let min_wage_ok = hourly_rate >= Decimal::from(required);

    let reasoning = if min_wage_ok {
        format!(
            "Hourly rate {} meets the minimum wage of {}",
            hourly_rate.normalize(),
            required
        )
    } else {
        format!(
            "Hourly rate {} is below the minimum wage of {} (shortfall {})",
            hourly_rate.normalize(),
            required,
            (Decimal::from(required) - hourly_rate).normalize()
        )
    };

    MinimumWageResult {
        min_wage_ok,
        min_wage_required: required,
        audit_step: AuditStep {
            step_number,
            rule_id: "minimum_wage".to_string(),
            rule_name: "Minimum Wage".to_string(),
            statute_ref: MINIMUM_WAGE_STATUTE.to_string(),
            input: serde_json::json!({
                "hourly_rate": hourly_rate.normalize().to_string(),
                "minimum_wage": required
            }),
            output: serde_json::json!({
                "min_wage_ok": min_wage_ok
            }),
            reasoning,
        },
    }
}
