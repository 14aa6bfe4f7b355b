//! Compliance warning derivation.

use rust_decimal::Decimal;

use crate::config::LaborRules;

use super::service_period::ServicePeriod;

/// A compliance issue flagged by an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceWarning {
    /// The hourly rate is below the minimum wage.
    MinimumWageShortfall,
    /// 15h+ a week but the weekly holiday allowance came out as zero.
    WeeklyHolidayPayMissing,
    /// One year or more of service but no severance figure could be produced.
    SeveranceDataMissing,
}

impl ComplianceWarning {
    /// The user-facing warning text.
    pub fn message(self) -> &'static str {
        match self {
            ComplianceWarning::MinimumWageShortfall => "minimum wage shortfall possible",
            ComplianceWarning::WeeklyHolidayPayMissing => {
                "weekly holiday pay may be missing despite 15h+ eligibility"
            }
            ComplianceWarning::SeveranceDataMissing => {
                "one year+ tenure but insufficient data for severance calculation"
            }
        }
    }
}

impl std::fmt::Display for ComplianceWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// The computed figures warnings are derived from.
#[derive(Debug, Clone, Copy)]
pub struct WarningInputs {
    /// Result of the minimum wage check.
    pub min_wage_ok: bool,
    /// Contracted weekly hours.
    pub weekly_hours: Decimal,
    /// Computed weekly holiday allowance.
    pub weekly_holiday_pay: u64,
    /// Length of service.
    pub service: ServicePeriod,
    /// Computed severance estimate.
    pub severance_estimate: u64,
}

/// Derives warnings in rule order. Each check is independent.
///
/// The weekly holiday check tests the computed pay for a literal zero, so an
/// eligible job with a zero hourly rate is flagged too.
pub fn derive_warnings(inputs: &WarningInputs, rules: &LaborRules) -> Vec<ComplianceWarning> {
    let mut warnings = Vec::new();

    if !inputs.min_wage_ok {
        warnings.push(ComplianceWarning::MinimumWageShortfall);
    }
    if rules.meets_weekly_hours_threshold(inputs.weekly_hours) && inputs.weekly_holiday_pay == 0 {
        warnings.push(ComplianceWarning::WeeklyHolidayPayMissing);
    }
    if inputs.service.has_completed_year() && inputs.severance_estimate == 0 {
        warnings.push(ComplianceWarning::SeveranceDataMissing);
    }

    warnings
}
