//! Calculation logic for the labor evaluation engine.
//!
//! This module contains the minimum wage check, weekly holiday allowance,
//! annual leave accrual, severance estimate, warning derivation, the
//! [`Evaluator`] that combines them, and the monthly work summary.
//!
//! Every function here is pure: the same inputs and reference date always
//! produce the same output.

mod annual_leave;
mod evaluator;
mod minimum_wage;
mod monthly_summary;
mod rounding;
mod service_period;
mod severance;
mod warnings;
mod weekly_holiday;

pub use annual_leave::{
    ANNUAL_LEAVE_STATUTE, AnnualLeaveResult, LeaveAccrualRule, annual_leave_days,
    calculate_annual_leave, summarize_leave, summarize_leave_with_rules,
};
pub use evaluator::{Evaluator, evaluate};
pub use minimum_wage::{MINIMUM_WAGE_STATUTE, MinimumWageResult, check_minimum_wage};
pub use monthly_summary::summarize_month;
pub use rounding::{round_half_up, to_currency_units};
pub use service_period::{SERVICE_PERIOD_STATUTE, ServicePeriod};
pub use severance::{SEVERANCE_STATUTE, SeveranceResult, estimate_severance};
pub use warnings::{ComplianceWarning, WarningInputs, derive_warnings};
pub use weekly_holiday::{
    WEEKLY_HOLIDAY_STATUTE, WeeklyHolidayPayResult, calculate_weekly_holiday_pay,
    estimate_work_days,
};
