//! Weekly holiday allowance calculation.
//!
//! Workers contracted for 15 or more hours a week are owed one paid day per
//! week, worth their average daily hours at the hourly rate. When the number
//! of working days is unknown it is estimated from the weekly hours.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::LaborRules;
use crate::models::AuditStep;

use super::rounding::{round_half_up, to_currency_units};

/// Statute article for the weekly holiday allowance.
pub const WEEKLY_HOLIDAY_STATUTE: &str = "Labor Standards Act Art. 55";

/// The result of a weekly holiday allowance calculation.
#[derive(Debug, Clone)]
pub struct WeeklyHolidayPayResult {
    /// The allowance in whole currency units.
    pub pay: u64,
    /// Whether the weekly hours reached the eligibility threshold.
    pub eligible: bool,
    /// The working days per week used, `None` when ineligible.
    pub work_days: Option<u32>,
    /// Whether `work_days` was estimated rather than supplied.
    pub work_days_estimated: bool,
    /// Paid hours for the holiday (`weekly_hours / work_days`).
    pub holiday_hours: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Estimates working days per week from weekly hours.
///
/// Below `full_week_hours` (24) the whole week is treated as a single day;
/// otherwise the hours are spread over `assumed_work_days` (5), or one day
/// if that is zero. The result
/// is `max(1, round(weekly_hours / max(estimated_daily_hours, 1)))`.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::estimate_work_days;
/// use labor_engine::config::LaborRules;
/// use rust_decimal::Decimal;
///
/// let rules = LaborRules::default();
/// assert_eq!(estimate_work_days(Decimal::new(20, 0), &rules), 1);
/// assert_eq!(estimate_work_days(Decimal::new(40, 0), &rules), 5);
/// ```
pub fn estimate_work_days(weekly_hours: Decimal, rules: &LaborRules) -> u32 {
    let holiday = &rules.weekly_holiday;
    let estimated_daily_hours = if weekly_hours < holiday.full_week_hours {
        weekly_hours
    } else {
        weekly_hours
            .checked_div(Decimal::from(holiday.assumed_work_days))
            .unwrap_or(weekly_hours)
    };

    let days = round_half_up(weekly_hours / estimated_daily_hours.max(Decimal::ONE));
    days.to_u32().unwrap_or(1).max(1)
}

/// Calculates the weekly holiday allowance.
///
/// # Arguments
///
/// * `weekly_hours` - Contracted hours per week
/// * `hourly_rate` - The hourly wage
/// * `work_days_per_week` - Known working days, if any; zero is treated as unknown
/// * `rules` - The statutory rule set
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::calculate_weekly_holiday_pay;
/// use labor_engine::config::LaborRules;
/// use rust_decimal::Decimal;
///
/// let rules = LaborRules::default();
/// let result = calculate_weekly_holiday_pay(
///     Decimal::new(30, 0),
///     Decimal::new(11500, 0),
///     Some(5),
///     &rules,
///     1,
/// );
/// assert_eq!(result.pay, 69000);
/// ```
pub fn calculate_weekly_holiday_pay(
    weekly_hours: Decimal,
    hourly_rate: Decimal,
    work_days_per_week: Option<u32>,
    rules: &LaborRules,
    step_number: u32,
) -> WeeklyHolidayPayResult {
    let input = serde_json::json!({
        "weekly_hours": weekly_hours.normalize().to_string(),
        "hourly_rate": hourly_rate.normalize().to_string(),
        "work_days_per_week": work_days_per_week
    });

    if !rules.meets_weekly_hours_threshold(weekly_hours) {
        return WeeklyHolidayPayResult {
            pay: 0,
            eligible: false,
            work_days: None,
            work_days_estimated: false,
            holiday_hours: Decimal::ZERO,
            audit_step: AuditStep {
                step_number,
                rule_id: "weekly_holiday_pay".to_string(),
                rule_name: "Weekly Holiday Pay".to_string(),
                statute_ref: WEEKLY_HOLIDAY_STATUTE.to_string(),
                input,
                output: serde_json::json!({
                    "eligible": false,
                    "pay": 0
                }),
                reasoning: format!(
                    "{}h per week is below the {}h threshold - no weekly holiday pay",
                    weekly_hours.normalize(),
                    rules.weekly_holiday.min_weekly_hours.normalize()
                ),
            },
        };
    }

    let supplied = work_days_per_week.filter(|d| *d > 0);
    let work_days_estimated = supplied.is_none();
    let days = supplied.unwrap_or_else(|| estimate_work_days(weekly_hours, rules));

    let holiday_hours = weekly_hours / Decimal::from(days);
    let raw_pay = holiday_hours.saturating_mul(hourly_rate);
    let pay = to_currency_units(raw_pay);

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekly_holiday_pay".to_string(),
        rule_name: "Weekly Holiday Pay".to_string(),
        statute_ref: WEEKLY_HOLIDAY_STATUTE.to_string(),
        input,
        output: serde_json::json!({
            "eligible": true,
            "work_days": days,
            "work_days_estimated": work_days_estimated,
            "holiday_hours": holiday_hours.normalize().to_string(),
            "pay": pay
        }),
        reasoning: format!(
            "{}h / {} days{} = {}h x {} = {} (rounded to {})",
            weekly_hours.normalize(),
            days,
            if work_days_estimated { " (estimated)" } else { "" },
            holiday_hours.normalize(),
            hourly_rate.normalize(),
            raw_pay.normalize(),
            pay
        ),
    };

    WeeklyHolidayPayResult {
        pay,
        eligible: true,
        work_days: Some(days),
        work_days_estimated,
        holiday_hours,
        audit_step,
    }
}
