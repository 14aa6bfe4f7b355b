//! Severance pay estimate.
//!
//! Severance is 30 days of average daily wage per completed year of
//! service, where the average daily wage comes from the last three months.
//! It only applies after one year of service at 15+ hours a week.

use rust_decimal::Decimal;

use crate::config::LaborRules;
use crate::models::AuditStep;

use super::rounding::to_currency_units;
use super::service_period::ServicePeriod;

/// Statute article for severance pay.
pub const SEVERANCE_STATUTE: &str = "Employee Retirement Benefit Security Act Art. 8";

/// The result of a severance estimate.
#[derive(Debug, Clone)]
pub struct SeveranceResult {
    /// Estimated severance in whole currency units.
    pub estimate: u64,
    /// Average daily wage over the last three months, when computable.
    pub avg_daily_wage: Option<Decimal>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Estimates severance pay.
///
/// Returns 0 when service is under one year, weekly hours are under the
/// threshold, or the three-month wage or day count is missing or zero.
/// Estimates beyond `u64::MAX` saturate.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::{ServicePeriod, estimate_severance};
/// use labor_engine::config::LaborRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let service = ServicePeriod::between(
///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
/// );
/// let result = estimate_severance(
///     service,
///     Decimal::new(20, 0),
///     Some(Decimal::new(3_000_000, 0)),
///     Some(60),
///     &LaborRules::default(),
///     1,
/// );
/// assert_eq!(result.estimate, 6_000_000);
/// ```
pub fn estimate_severance(
    service: ServicePeriod,
    weekly_hours: Decimal,
    total_wage_last_3_months: Option<Decimal>,
    total_days_last_3_months: Option<u32>,
    rules: &LaborRules,
    step_number: u32,
) -> SeveranceResult {
    let days_per_year = rules.severance.days_per_service_year;
    let input = serde_json::json!({
        "service_years": service.years,
        "weekly_hours": weekly_hours.normalize().to_string(),
        "total_wage_last_3_months": total_wage_last_3_months.map(|w| w.normalize().to_string()),
        "total_days_last_3_months": total_days_last_3_months
    });

    let wage = total_wage_last_3_months.filter(|w| *w > Decimal::ZERO);
    let wage_days = total_days_last_3_months.filter(|d| *d > 0);

    let skip_reason = if service.years < 1 {
        Some("less than one year of service".to_string())
    } else if !rules.meets_weekly_hours_threshold(weekly_hours) {
        Some(format!(
            "{}h per week is below the {}h threshold",
            weekly_hours.normalize(),
            rules.weekly_holiday.min_weekly_hours.normalize()
        ))
    } else if wage.is_none() || wage_days.is_none() {
        Some("last three months' wage or day count is missing".to_string())
    } else {
        None
    };

    let (estimate, avg_daily_wage, reasoning) = match (skip_reason, wage, wage_days) {
        (None, Some(wage), Some(wage_days)) => {
            let wage_days = Decimal::from(wage_days);
            let avg_daily_wage = wage / wage_days;
            let raw = avg_daily_wage
                .saturating_mul(Decimal::from(days_per_year))
                .saturating_mul(Decimal::from(service.years));
            let estimate = to_currency_units(raw);
            (
                estimate,
                Some(avg_daily_wage),
                format!(
                    "{} / {} days = {} per day x {} days x {} years = {}",
                    wage.normalize(),
                    wage_days,
                    avg_daily_wage.round_dp(2).normalize(),
                    days_per_year,
                    service.years,
                    estimate
                ),
            )
        }
        (reason, _, _) => (
            0,
            None,
            format!(
                "No severance estimate: {}",
                reason.unwrap_or_else(|| "insufficient data".to_string())
            ),
        ),
    };

    SeveranceResult {
        estimate,
        avg_daily_wage,
        audit_step: AuditStep {
            step_number,
            rule_id: "severance".to_string(),
            rule_name: "Severance Pay".to_string(),
            statute_ref: SEVERANCE_STATUTE.to_string(),
            input,
            output: serde_json::json!({
                "avg_daily_wage": avg_daily_wage.map(|w| w.round_dp(2).normalize().to_string()),
                "estimate": estimate
            }),
            reasoning,
        },
    }
}
