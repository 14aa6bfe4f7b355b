//! Job input model and its validating builder.
//!
//! [`JobInputs`] is the immutable snapshot of a worker's employment terms
//! that every evaluation runs against. It can only be obtained through
//! [`JobInputsBuilder::build`], which enforces the field ranges so the
//! calculation functions never have to re-check them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// The most hours a week can contain.
pub const MAX_WEEKLY_HOURS: u32 = 168;

/// An immutable snapshot of a worker's employment terms.
///
/// # Example
///
/// ```
/// use labor_engine::models::JobInputs;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let job = JobInputs::builder(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     Decimal::new(11500, 0),
///     Decimal::new(30, 0),
/// )
/// .work_days_per_week(5)
/// .build()
/// .unwrap();
///
/// assert_eq!(job.work_days_per_week(), Some(5));
/// assert!(job.is_current());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobInputs {
    hourly_rate: Decimal,
    weekly_hours: Decimal,
    daily_hours: Decimal,
    work_days_per_week: Option<u32>,
    employment_type: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    is_current: bool,
    has_paid_weekly_holiday: bool,
    attendance_rate_last_year: Option<Decimal>,
    total_wage_last_3_months: Option<Decimal>,
    total_days_last_3_months: Option<u32>,
}

impl JobInputs {
    /// Starts building a job from its three required terms.
    pub fn builder(
        start_date: NaiveDate,
        hourly_rate: Decimal,
        weekly_hours: Decimal,
    ) -> JobInputsBuilder {
        JobInputsBuilder {
            hourly_rate,
            weekly_hours,
            daily_hours: Decimal::ZERO,
            work_days_per_week: None,
            employment_type: String::new(),
            start_date,
            end_date: None,
            is_current: true,
            has_paid_weekly_holiday: true,
            attendance_rate_last_year: None,
            total_wage_last_3_months: None,
            total_days_last_3_months: None,
        }
    }

    /// The agreed hourly wage.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Contracted hours per week.
    pub fn weekly_hours(&self) -> Decimal {
        self.weekly_hours
    }

    /// Contracted hours per working day.
    pub fn daily_hours(&self) -> Decimal {
        self.daily_hours
    }

    /// Working days per week, when known.
    pub fn work_days_per_week(&self) -> Option<u32> {
        self.work_days_per_week
    }

    /// Free-form employment type label. Not used by any formula.
    pub fn employment_type(&self) -> &str {
        &self.employment_type
    }

    /// The first day of employment.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The last day of employment, if the job has ended.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Whether the worker is still employed.
    pub fn is_current(&self) -> bool {
        self.is_current
    }

    /// Whether the employer reports paying the weekly holiday allowance.
    pub fn has_paid_weekly_holiday(&self) -> bool {
        self.has_paid_weekly_holiday
    }

    /// Attendance rate over the previous year, between 0 and 1.
    pub fn attendance_rate_last_year(&self) -> Option<Decimal> {
        self.attendance_rate_last_year
    }

    /// Total wages paid over the last three months.
    pub fn total_wage_last_3_months(&self) -> Option<Decimal> {
        self.total_wage_last_3_months
    }

    /// Total calendar days in the last three months' wage period.
    pub fn total_days_last_3_months(&self) -> Option<u32> {
        self.total_days_last_3_months
    }
}

/// Builder for [`JobInputs`].
///
/// Optional fields default to "unknown" (`None`), `daily_hours` defaults to
/// zero, and both `is_current` and `has_paid_weekly_holiday` default to true.
#[derive(Debug, Clone)]
pub struct JobInputsBuilder {
    hourly_rate: Decimal,
    weekly_hours: Decimal,
    daily_hours: Decimal,
    work_days_per_week: Option<u32>,
    employment_type: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    is_current: bool,
    has_paid_weekly_holiday: bool,
    attendance_rate_last_year: Option<Decimal>,
    total_wage_last_3_months: Option<Decimal>,
    total_days_last_3_months: Option<u32>,
}

impl JobInputsBuilder {
    /// Sets the contracted hours per working day.
    pub fn daily_hours(mut self, hours: Decimal) -> Self {
        self.daily_hours = hours;
        self
    }

    /// Sets the number of working days per week.
    ///
    /// [`build`](Self::build) accepts 1 through 7 and rejects anything else,
    /// including values above 7 that a plain positivity check would allow.
    pub fn work_days_per_week(mut self, days: u32) -> Self {
        self.work_days_per_week = Some(days);
        self
    }

    /// Sets the informational employment type label.
    pub fn employment_type(mut self, employment_type: impl Into<String>) -> Self {
        self.employment_type = employment_type.into();
        self
    }

    /// Sets the last day of employment.
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Marks whether the worker is still employed.
    pub fn is_current(mut self, is_current: bool) -> Self {
        self.is_current = is_current;
        self
    }

    /// Marks whether the weekly holiday allowance is reported as paid.
    pub fn has_paid_weekly_holiday(mut self, paid: bool) -> Self {
        self.has_paid_weekly_holiday = paid;
        self
    }

    /// Sets last year's attendance rate (0 to 1).
    pub fn attendance_rate_last_year(mut self, rate: Decimal) -> Self {
        self.attendance_rate_last_year = Some(rate);
        self
    }

    /// Sets total wages for the last three months.
    pub fn total_wage_last_3_months(mut self, wage: Decimal) -> Self {
        self.total_wage_last_3_months = Some(wage);
        self
    }

    /// Sets the number of days in the last three months' wage period.
    pub fn total_days_last_3_months(mut self, days: u32) -> Self {
        self.total_days_last_3_months = Some(days);
        self
    }

    /// Validates the collected fields and produces a [`JobInputs`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidJobInput`] naming the first field that
    /// is out of range:
    /// - `hourly_rate`, `daily_hours` or `total_wage_last_3_months` negative
    /// - `weekly_hours` outside `0..=168`
    /// - `work_days_per_week` outside `1..=7`
    /// - `attendance_rate_last_year` outside `0..=1`
    /// - `end_date` before `start_date`
    pub fn build(self) -> EngineResult<JobInputs> {
        if self.hourly_rate < Decimal::ZERO {
            return Err(invalid("hourly_rate", "cannot be negative"));
        }
        if self.weekly_hours < Decimal::ZERO
            || self.weekly_hours > Decimal::from(MAX_WEEKLY_HOURS)
        {
            return Err(invalid(
                "weekly_hours",
                format!("must be between 0 and {}", MAX_WEEKLY_HOURS),
            ));
        }
        if self.daily_hours < Decimal::ZERO {
            return Err(invalid("daily_hours", "cannot be negative"));
        }
        if let Some(days) = self.work_days_per_week {
            if !(1..=7).contains(&days) {
                return Err(invalid("work_days_per_week", "must be between 1 and 7"));
            }
        }
        if let Some(rate) = self.attendance_rate_last_year {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(invalid(
                    "attendance_rate_last_year",
                    "must be between 0 and 1",
                ));
            }
        }
        if let Some(wage) = self.total_wage_last_3_months {
            if wage < Decimal::ZERO {
                return Err(invalid("total_wage_last_3_months", "cannot be negative"));
            }
        }
        if let Some(end_date) = self.end_date {
            if end_date < self.start_date {
                return Err(invalid(
                    "end_date",
                    format!("{} is before start date {}", end_date, self.start_date),
                ));
            }
        }

        Ok(JobInputs {
            hourly_rate: self.hourly_rate,
            weekly_hours: self.weekly_hours,
            daily_hours: self.daily_hours,
            work_days_per_week: self.work_days_per_week,
            employment_type: self.employment_type,
            start_date: self.start_date,
            end_date: self.end_date,
            is_current: self.is_current,
            has_paid_weekly_holiday: self.has_paid_weekly_holiday,
            attendance_rate_last_year: self.attendance_rate_last_year,
            total_wage_last_3_months: self.total_wage_last_3_months,
            total_days_last_3_months: self.total_days_last_3_months,
        })
    }
}

fn invalid(field: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidJobInput {
        field: field.to_string(),
        message: message.into(),
    }
}
