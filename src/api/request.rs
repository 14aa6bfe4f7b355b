//! Request types for the labor evaluation API.
//!
//! This module defines the JSON request bodies and their conversion into
//! validated domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{JobInputs, WorkRecord};

/// Job terms in a request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    /// The agreed hourly wage.
    pub hourly_rate: Decimal,
    /// Contracted hours per week.
    pub weekly_hours: Decimal,
    /// Contracted hours per working day.
    #[serde(default)]
    pub daily_hours: Decimal,
    /// Working days per week, if known.
    #[serde(default)]
    pub work_days_per_week: Option<u32>,
    /// Informational employment type label.
    #[serde(default)]
    pub employment_type: String,
    /// The first day of employment.
    pub start_date: NaiveDate,
    /// The last day of employment, if the job has ended.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Whether the worker is still employed.
    #[serde(default = "default_true")]
    pub is_current: bool,
    /// Whether the weekly holiday allowance is reported as paid.
    #[serde(default = "default_true")]
    pub has_paid_weekly_holiday: bool,
    /// Attendance rate over the previous year (0 to 1).
    #[serde(default)]
    pub attendance_rate_last_year: Option<Decimal>,
    /// Total wages over the last three months.
    #[serde(default)]
    pub total_wage_last_3_months: Option<Decimal>,
    /// Days in the last three months' wage period.
    #[serde(default)]
    pub total_days_last_3_months: Option<u32>,
}

fn default_true() -> bool {
    true
}

impl TryFrom<JobRequest> for JobInputs {
    type Error = EngineError;

    fn try_from(req: JobRequest) -> Result<Self, Self::Error> {
        let mut builder = JobInputs::builder(req.start_date, req.hourly_rate, req.weekly_hours)
            .daily_hours(req.daily_hours)
            .employment_type(req.employment_type)
            .is_current(req.is_current)
            .has_paid_weekly_holiday(req.has_paid_weekly_holiday);

        if let Some(days) = req.work_days_per_week {
            builder = builder.work_days_per_week(days);
        }
        if let Some(end_date) = req.end_date {
            builder = builder.end_date(end_date);
        }
        if let Some(rate) = req.attendance_rate_last_year {
            builder = builder.attendance_rate_last_year(rate);
        }
        if let Some(wage) = req.total_wage_last_3_months {
            builder = builder.total_wage_last_3_months(wage);
        }
        if let Some(days) = req.total_days_last_3_months {
            builder = builder.total_days_last_3_months(days);
        }

        builder.build()
    }
}

/// Request body for `/evaluate` and `/annual-leave`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The job to evaluate.
    pub job: JobRequest,
    /// Reference date; defaults to the server's current date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

/// Request body for `/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The hourly wage to price hours at.
    pub hourly_rate: Decimal,
    /// The reporting month in `YYYY-MM` form.
    #[serde(default)]
    pub month: Option<String>,
    /// Work records to aggregate.
    #[serde(default)]
    pub records: Vec<WorkRecord>,
}

impl SummaryRequest {
    /// Returns the hourly rate, rejecting negative values the same way
    /// [`JobInputs`] does.
    pub fn validated_hourly_rate(&self) -> EngineResult<Decimal> {
        if self.hourly_rate < Decimal::ZERO {
            return Err(EngineError::InvalidJobInput {
                field: "hourly_rate".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        Ok(self.hourly_rate)
    }
}
