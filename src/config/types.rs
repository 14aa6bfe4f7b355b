//! Configuration types for the statutory rules.
//!
//! This module contains the strongly-typed rule structures that are
//! deserialized from `rules.yaml`, along with the built-in 2025 defaults.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The 2025 statutory minimum hourly wage.
pub const MIN_WAGE_2025: u64 = 10030;

/// Weekly hours at or above which the weekly holiday allowance, annual
/// leave and severance apply.
pub const WEEKLY_HOLIDAY_MIN_HOURS: u32 = 15;

/// Weekly hours at or above which a job is treated as a five-day week
/// when the number of working days is unknown.
pub const FULL_WEEK_ESTIMATE_HOURS: u32 = 24;

/// Days in one year of service.
pub const DAYS_PER_SERVICE_YEAR: i64 = 365;

/// Weekly holiday allowance rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyHolidayRules {
    /// Minimum weekly hours for eligibility.
    pub min_weekly_hours: Decimal,
    /// Weekly hours from which an unknown schedule is assumed to span
    /// `assumed_work_days` days.
    pub full_week_hours: Decimal,
    /// Working days assumed for a full week.
    pub assumed_work_days: u32,
}

/// Annual leave accrual rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualLeaveRules {
    /// Days granted after the first year of service.
    pub base_days: u32,
    /// Upper bound on days granted in any year.
    pub max_days: u32,
    /// Attendance rate below which leave is forfeited.
    pub min_attendance_rate: Decimal,
    /// Length of one accrual period during the first year, in days.
    pub accrual_period_days: i64,
}

/// Severance pay rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeveranceRules {
    /// Days of average wage paid per completed year of service.
    pub days_per_service_year: u32,
}

/// The complete statutory rule set.
///
/// # Example
///
/// ```
/// use labor_engine::config::LaborRules;
///
/// let rules = LaborRules::default();
/// assert_eq!(rules.minimum_wage_hourly, 10030);
/// assert_eq!(rules.annual_leave.max_days, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborRules {
    /// Version label of the rule set (e.g. "2025").
    pub version: String,
    /// Minimum hourly wage.
    pub minimum_wage_hourly: u64,
    /// Weekly holiday allowance rules.
    pub weekly_holiday: WeeklyHolidayRules,
    /// Annual leave rules.
    pub annual_leave: AnnualLeaveRules,
    /// Severance rules.
    pub severance: SeveranceRules,
}

impl Default for LaborRules {
    fn default() -> Self {
        Self {
            version: "2025".to_string(),
            minimum_wage_hourly: MIN_WAGE_2025,
            weekly_holiday: WeeklyHolidayRules {
                min_weekly_hours: Decimal::from(WEEKLY_HOLIDAY_MIN_HOURS),
                full_week_hours: Decimal::from(FULL_WEEK_ESTIMATE_HOURS),
                assumed_work_days: 5,
            },
            annual_leave: AnnualLeaveRules {
                base_days: 15,
                max_days: 25,
                min_attendance_rate: Decimal::new(8, 1),
                accrual_period_days: 30,
            },
            severance: SeveranceRules {
                days_per_service_year: 30,
            },
        }
    }
}

impl LaborRules {
    /// Whether the given weekly hours reach the 15-hour threshold.
    pub fn meets_weekly_hours_threshold(&self, weekly_hours: Decimal) -> bool {
        weekly_hours >= self.weekly_holiday.min_weekly_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_match_2025_constants() {
        let rules = LaborRules::default();
        assert_eq!(rules.version, "2025");
        assert_eq!(rules.minimum_wage_hourly, 10030);
        assert_eq!(rules.weekly_holiday.min_weekly_hours, Decimal::new(15, 0));
        assert_eq!(rules.weekly_holiday.full_week_hours, Decimal::new(24, 0));
        assert_eq!(rules.annual_leave.base_days, 15);
        assert_eq!(rules.annual_leave.min_attendance_rate, Decimal::new(8, 1));
        assert_eq!(rules.severance.days_per_service_year, 30);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let rules = LaborRules::default();
        assert!(rules.meets_weekly_hours_threshold(Decimal::new(15, 0)));
        assert!(!rules.meets_weekly_hours_threshold(Decimal::new(1499, 2)));
    }

    #[test]
    fn test_deserialize_rules_yaml() {
        let yaml = r#"
version: "2024"
minimum_wage_hourly: 9860
weekly_holiday:
  min_weekly_hours: "15"
  full_week_hours: "24"
  assumed_work_days: 5
annual_leave:
  base_days: 15
  max_days: 25
  min_attendance_rate: "0.8"
  accrual_period_days: 30
severance:
  days_per_service_year: 30
"#;
        let rules: LaborRules = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules.version, "2024");
        assert_eq!(rules.minimum_wage_hourly, 9860);
        assert_eq!(rules.annual_leave, LaborRules::default().annual_leave);
    }
}
