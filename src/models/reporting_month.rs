//! Reporting month and monthly summary models.
//!
//! This module contains the [`ReportingMonth`] used to bound a monthly
//! summary, and the [`MonthlySummary`] / [`WeekStat`] output types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month used as a reporting period.
///
/// # Example
///
/// ```
/// use labor_engine::models::ReportingMonth;
/// use chrono::NaiveDate;
///
/// let month = ReportingMonth::parse("2024-02").unwrap();
/// assert_eq!(month.start_date(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(month.end_date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(month.to_string(), "2024-02");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingMonth {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl ReportingMonth {
    /// Builds the reporting month for a year and month number.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let label = format!("{:04}-{:02}", year, month);
        let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            EngineError::InvalidPeriod {
                value: label.clone(),
                message: "month must be between 1 and 12".to_string(),
            }
        })?;
        // The day before the first of the following month.
        let end_date = start_date
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| EngineError::InvalidPeriod {
                value: label,
                message: "month is outside the supported date range".to_string(),
            })?;

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// Parses a `YYYY-MM` string.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let malformed = || EngineError::InvalidPeriod {
            value: value.to_string(),
            message: "expected format YYYY-MM".to_string(),
        };

        let (year, month) = value.trim().split_once('-').ok_or_else(malformed)?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;

        Self::new(year, month)
    }

    /// The first day of the month.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The last day of the month.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Checks if a date falls within the month.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

impl std::fmt::Display for ReportingMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}",
            self.start_date.year(),
            self.start_date.month()
        )
    }
}

/// Hours and pay for one 7-day window of a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekStat {
    /// First day of the window (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the window (inclusive).
    pub end_date: NaiveDate,
    /// Hours worked in the window.
    pub hours: Decimal,
    /// Estimated pay for the window.
    pub pay: Decimal,
}

/// A month of work records aggregated for a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The month in `YYYY-MM` form.
    pub month: String,
    /// The hourly rate applied.
    pub hourly_rate: Decimal,
    /// Total hours worked in the month.
    pub total_hours: Decimal,
    /// Number of days with a work record.
    pub total_days: u32,
    /// `total_hours * hourly_rate`.
    pub estimated_salary: Decimal,
    /// Per-window breakdown, starting on the 1st.
    pub week_stats: Vec<WeekStat>,
}
