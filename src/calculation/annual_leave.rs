//! Annual leave accrual.
//!
//! Rules, first match wins:
//! 1. Under one year of service: one day per completed 30-day period.
//! 2. Attendance below 80% last year: no leave.
//! 3. Otherwise 15 days, plus one day for every two years of service beyond
//!    the first once three years are reached, capped at 25.
//!
//! [`summarize_leave`] additionally zeroes the balance for jobs under 15
//! hours a week.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::LaborRules;
use crate::models::{AnnualLeaveSummary, AuditStep, JobInputs};

use super::service_period::ServicePeriod;

/// Statute article for annual leave.
pub const ANNUAL_LEAVE_STATUTE: &str = "Labor Standards Act Art. 60";

/// Which accrual rule produced the leave figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveAccrualRule {
    /// Under one year: monthly accrual.
    FirstYearMonthly,
    /// Attendance below the minimum rate.
    AttendanceForfeiture,
    /// One year or more: base days plus seniority days.
    Seniority,
}

impl LeaveAccrualRule {
    fn as_str(self) -> &'static str {
        match self {
            LeaveAccrualRule::FirstYearMonthly => "first_year_monthly",
            LeaveAccrualRule::AttendanceForfeiture => "attendance_forfeiture",
            LeaveAccrualRule::Seniority => "seniority",
        }
    }
}

/// The result of an annual leave calculation.
#[derive(Debug, Clone)]
pub struct AnnualLeaveResult {
    /// Accrued leave days.
    pub days: Decimal,
    /// The rule that applied.
    pub rule: LeaveAccrualRule,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates accrued annual leave days.
///
/// # Arguments
///
/// * `start_date` - The first day of employment
/// * `attendance_rate` - Last year's attendance rate, if known
/// * `today` - The reference date
/// * `rules` - The statutory rule set
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_annual_leave(
    start_date: NaiveDate,
    attendance_rate: Option<Decimal>,
    today: NaiveDate,
    rules: &LaborRules,
    step_number: u32,
) -> AnnualLeaveResult {
    let leave = &rules.annual_leave;
    let service = ServicePeriod::between(start_date, today);

    let (days, rule, reasoning) = if service.years < 1 {
        let periods = service
            .days
            .checked_div(leave.accrual_period_days)
            .unwrap_or(0)
            .max(0);
        (
            Decimal::from(periods),
            LeaveAccrualRule::FirstYearMonthly,
            format!(
                "{} days of service (under one year): {} completed {}-day periods = {} days",
                service.days, periods, leave.accrual_period_days, periods
            ),
        )
    } else if let Some(rate) = attendance_rate.filter(|r| *r < leave.min_attendance_rate) {
        (
            Decimal::ZERO,
            LeaveAccrualRule::AttendanceForfeiture,
            format!(
                "Attendance rate {} is below {} - no annual leave",
                rate.normalize(),
                leave.min_attendance_rate.normalize()
            ),
        )
    } else {
        let granted = if service.years >= 3 {
            let extra_days = (service.years - 1) / 2;
            (i64::from(leave.base_days) + extra_days).min(i64::from(leave.max_days))
        } else {
            i64::from(leave.base_days)
        };
        (
            Decimal::from(granted),
            LeaveAccrualRule::Seniority,
            format!(
                "{} years of service: {} base days + {} seniority days (cap {}) = {} days",
                service.years,
                leave.base_days,
                granted - i64::from(leave.base_days),
                leave.max_days,
                granted
            ),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "annual_leave".to_string(),
        rule_name: "Annual Leave".to_string(),
        statute_ref: ANNUAL_LEAVE_STATUTE.to_string(),
        input: serde_json::json!({
            "start_date": start_date.to_string(),
            "reference_date": today.to_string(),
            "service_days": service.days,
            "service_years": service.years,
            "attendance_rate": attendance_rate.map(|r| r.normalize().to_string())
        }),
        output: serde_json::json!({
            "days": days.to_string(),
            "rule": rule.as_str()
        }),
        reasoning,
    };

    AnnualLeaveResult {
        days,
        rule,
        audit_step,
    }
}

/// Accrued annual leave days under the default rules.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::annual_leave_days;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(annual_leave_days(start, None, today), Decimal::new(17, 0));
/// ```
pub fn annual_leave_days(
    start_date: NaiveDate,
    attendance_rate: Option<Decimal>,
    today: NaiveDate,
) -> Decimal {
    calculate_annual_leave(start_date, attendance_rate, today, &LaborRules::default(), 1).days
}

/// Summarizes a job's annual leave balance under the given rules.
///
/// Jobs under the weekly hours threshold have no leave regardless of
/// tenure. Leave usage is not tracked, so `used` is always zero.
pub fn summarize_leave_with_rules(
    job: &JobInputs,
    today: NaiveDate,
    rules: &LaborRules,
) -> AnnualLeaveSummary {
    let total = if rules.meets_weekly_hours_threshold(job.weekly_hours()) {
        calculate_annual_leave(
            job.start_date(),
            job.attendance_rate_last_year(),
            today,
            rules,
            1,
        )
        .days
    } else {
        Decimal::ZERO
    };

    let used = Decimal::ZERO;
    AnnualLeaveSummary {
        total,
        used,
        available: (total - used).max(Decimal::ZERO),
    }
}

/// Summarizes a job's annual leave balance under the default rules.
pub fn summarize_leave(job: &JobInputs, today: NaiveDate) -> AnnualLeaveSummary {
    summarize_leave_with_rules(job, today, &LaborRules::default())
}
