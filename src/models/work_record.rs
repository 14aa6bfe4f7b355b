//! Daily work record model.
//!
//! A [`WorkRecord`] captures one day of work for a job: clock-in and
//! clock-out times plus unpaid break minutes.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of recorded work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRecord {
    /// The day the work was done.
    pub work_date: NaiveDate,
    /// Clock-in time, if recorded.
    #[serde(default)]
    pub time_in: Option<NaiveDateTime>,
    /// Clock-out time, if recorded.
    #[serde(default)]
    pub time_out: Option<NaiveDateTime>,
    /// Unpaid break minutes taken during the day.
    #[serde(default)]
    pub break_minutes: u32,
    /// Whether the day included overtime.
    #[serde(default)]
    pub is_overtime: bool,
    /// Whether the day included night work.
    #[serde(default)]
    pub is_night: bool,
    /// Whether the day was a holiday.
    #[serde(default)]
    pub is_holiday: bool,
}

impl WorkRecord {
    /// Calculates the hours worked, excluding breaks.
    ///
    /// Returns zero when either clock time is missing, and never returns a
    /// negative figure even if breaks exceed the recorded span.
    ///
    /// # Examples
    ///
    /// ```
    /// use labor_engine::models::WorkRecord;
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let record = WorkRecord {
    ///     work_date: NaiveDate::from_ymd_opt(2025, 11, 3).unwrap(),
    ///     time_in: Some(NaiveDateTime::parse_from_str("2025-11-03 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     time_out: Some(NaiveDateTime::parse_from_str("2025-11-03 15:00:00", "%Y-%m-%d %H:%M:%S").unwrap()),
    ///     break_minutes: 30,
    ///     is_overtime: false,
    ///     is_night: false,
    ///     is_holiday: false,
    /// };
    /// assert_eq!(record.worked_hours(), Decimal::new(55, 1)); // 5.5 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        let (Some(time_in), Some(time_out)) = (self.time_in, self.time_out) else {
            return Decimal::ZERO;
        };

        let worked_minutes = (time_out - time_in).num_minutes() - i64::from(self.break_minutes);
        if worked_minutes <= 0 {
            return Decimal::ZERO;
        }

        Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)
    }
}
