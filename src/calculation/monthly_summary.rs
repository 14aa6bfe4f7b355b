//! Monthly work summary.
//!
//! Aggregates a month of [`WorkRecord`]s into total hours, an estimated
//! salary at the hourly rate, and a breakdown by 7-day window starting on
//! the 1st of the month (the last window ends on the last day of the month).

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{MonthlySummary, ReportingMonth, WeekStat, WorkRecord};

/// Summarizes the records that fall within `month`.
///
/// Records outside the month are ignored. `total_days` counts records,
/// not distinct dates. Pay figures saturate at the `Decimal` limit.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::summarize_month;
/// use labor_engine::models::ReportingMonth;
/// use rust_decimal::Decimal;
///
/// let month = ReportingMonth::parse("2025-02").unwrap();
/// let summary = summarize_month(Decimal::new(10030, 0), &month, &[]);
/// assert_eq!(summary.week_stats.len(), 4);
/// assert_eq!(summary.estimated_salary, Decimal::ZERO);
/// ```
pub fn summarize_month(
    hourly_rate: Decimal,
    month: &ReportingMonth,
    records: &[WorkRecord],
) -> MonthlySummary {
    let in_month: Vec<&WorkRecord> = records
        .iter()
        .filter(|r| month.contains_date(r.work_date))
        .collect();

    let hours_between = |start: NaiveDate, end: NaiveDate| -> Decimal {
        in_month
            .iter()
            .filter(|r| r.work_date >= start && r.work_date <= end)
            .map(|r| r.worked_hours())
            .sum()
    };

    let mut week_stats = Vec::new();
    let mut week_start = month.start_date();
    while week_start <= month.end_date() {
        let week_end = week_start
            .checked_add_days(Days::new(6))
            .map_or(month.end_date(), |d| d.min(month.end_date()));
        let hours = hours_between(week_start, week_end);

        week_stats.push(WeekStat {
            start_date: week_start,
            end_date: week_end,
            hours,
            pay: hours.saturating_mul(hourly_rate),
        });

        match week_end.succ_opt() {
            Some(next) => week_start = next,
            None => break,
        }
    }

    let total_hours: Decimal = in_month.iter().map(|r| r.worked_hours()).sum();

    MonthlySummary {
        month: month.to_string(),
        hourly_rate,
        total_hours,
        total_days: in_month.len() as u32,
        estimated_salary: total_hours.saturating_mul(hourly_rate),
        week_stats,
    }
}
