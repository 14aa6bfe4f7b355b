//! Length of service.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::DAYS_PER_SERVICE_YEAR;
use crate::models::AuditStep;

/// Statute article defining the one-year service requirement.
pub const SERVICE_PERIOD_STATUTE: &str = "Employee Retirement Benefit Security Act Art. 4";

/// Completed days and years of service up to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServicePeriod {
    /// Days from the start date to the reference date.
    pub days: i64,
    /// Completed 365-day years.
    pub years: i64,
}

impl ServicePeriod {
    /// Measures service from `start_date` to `today`.
    ///
    /// A start date after `today` counts as zero service.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_engine::calculation::ServicePeriod;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    /// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let period = ServicePeriod::between(start, today);
    /// assert_eq!(period.days, 731);
    /// assert_eq!(period.years, 2);
    /// ```
    pub fn between(start_date: NaiveDate, today: NaiveDate) -> Self {
        let days = (today - start_date).num_days().max(0);
        Self {
            days,
            years: days / DAYS_PER_SERVICE_YEAR,
        }
    }

    /// Whether at least one full year has been served.
    pub fn has_completed_year(&self) -> bool {
        self.days >= DAYS_PER_SERVICE_YEAR
    }

    /// Records how the service period was measured.
    pub fn audit_step(&self, start_date: NaiveDate, today: NaiveDate, step_number: u32) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: "service_period".to_string(),
            rule_name: "Service Period".to_string(),
            statute_ref: SERVICE_PERIOD_STATUTE.to_string(),
            input: serde_json::json!({
                "start_date": start_date.to_string(),
                "reference_date": today.to_string()
            }),
            output: serde_json::json!({
                "days": self.days,
                "years": self.years,
                "completed_year": self.has_completed_year()
            }),
            reasoning: format!(
                "{} days from {} to {} = {} completed {}-day years",
                self.days, start_date, today, self.years, DAYS_PER_SERVICE_YEAR
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_day_is_zero() {
        let p = ServicePeriod::between(date(2025, 5, 1), date(2025, 5, 1));
        assert_eq!(p, ServicePeriod { days: 0, years: 0 });
    }

    #[test]
    fn test_364_days_is_zero_years() {
        let start = date(2024, 1, 1);
        let p = ServicePeriod::between(start, start + chrono::Days::new(364));
        assert_eq!(p.years, 0);
        assert!(!p.has_completed_year());
    }

    #[test]
    fn test_365_days_is_one_year() {
        let start = date(2024, 1, 1);
        let p = ServicePeriod::between(start, start + chrono::Days::new(365));
        assert_eq!(p.years, 1);
        assert!(p.has_completed_year());
    }

    #[test]
    fn test_years_use_365_day_blocks_across_leap_years() {
        // 2024 is a leap year, so one calendar year is 366 days.
        let p = ServicePeriod::between(date(2024, 1, 1), date(2028, 1, 1));
        assert_eq!(p.days, 1461);
        assert_eq!(p.years, 4);
    }

    #[test]
    fn test_audit_step_records_days_and_years() {
        let start = date(2023, 1, 1);
        let today = date(2025, 1, 1);
        let step = ServicePeriod::between(start, today).audit_step(start, today, 1);

        assert_eq!(step.rule_id, "service_period");
        assert_eq!(step.output["days"], 731);
        assert_eq!(step.output["years"], 2);
        assert_eq!(step.output["completed_year"], true);
    }

    #[test]
    fn test_future_start_date_clamps_to_zero() {
        let p = ServicePeriod::between(date(2026, 1, 1), date(2025, 1, 1));
        assert_eq!(p, ServicePeriod { days: 0, years: 0 });
    }
}
