//! Job evaluation.
//!
//! [`Evaluator`] runs every statutory rule against a [`JobInputs`] snapshot
//! and assembles the [`EvaluationResult`]. It holds only an immutable rule
//! set, so one instance can be shared across threads.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::{ConfigLoader, LaborRules};
use crate::error::EngineResult;
use crate::models::{
    AnnualLeaveSummary, AuditTrace, EvaluationReport, EvaluationResult, JobInputs, MonthlySummary,
    ReportingMonth, WorkRecord,
};

use super::annual_leave::{calculate_annual_leave, summarize_leave_with_rules};
use super::minimum_wage::check_minimum_wage;
use super::monthly_summary::summarize_month;
use super::service_period::ServicePeriod;
use super::severance::estimate_severance;
use super::warnings::{WarningInputs, derive_warnings};
use super::weekly_holiday::calculate_weekly_holiday_pay;

/// Evaluates jobs against a fixed rule set.
///
/// # Example
///
/// ```
/// use labor_engine::calculation::Evaluator;
/// use labor_engine::config::LaborRules;
/// use labor_engine::models::JobInputs;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let evaluator = Evaluator::new(LaborRules::default()).unwrap();
/// let job = JobInputs::builder(
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     Decimal::new(9000, 0),
///     Decimal::new(10, 0),
/// )
/// .build()
/// .unwrap();
///
/// let result = evaluator.evaluate(&job, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// assert!(!result.min_wage_ok);
/// assert_eq!(result.warnings, vec!["minimum wage shortfall possible"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    rules: LaborRules,
}

impl Evaluator {
    /// Creates an evaluator for the given rules.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` when the rules fail the same checks as
    /// [`ConfigLoader::from_rules`].
    pub fn new(rules: LaborRules) -> EngineResult<Self> {
        ConfigLoader::from_rules(rules).map(|config| Self::from_config(&config))
    }

    /// Creates an evaluator from an already validated configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        Self {
            rules: config.rules().clone(),
        }
    }

    /// Returns the rule set in use.
    pub fn rules(&self) -> &LaborRules {
        &self.rules
    }

    /// Evaluates a job as of `today`.
    pub fn evaluate(&self, job: &JobInputs, today: NaiveDate) -> EvaluationResult {
        self.explain(job, today).result
    }

    /// Evaluates a job and returns the result with its audit trace.
    pub fn explain(&self, job: &JobInputs, today: NaiveDate) -> EvaluationReport {
        let rules = &self.rules;
        let service = ServicePeriod::between(job.start_date(), today);
        let mut trace = AuditTrace::default();

        let mut step_number = trace.push(service.audit_step(job.start_date(), today, 1));

        let min_wage = check_minimum_wage(job.hourly_rate(), rules, step_number);
        step_number = trace.push(min_wage.audit_step);

        let holiday = calculate_weekly_holiday_pay(
            job.weekly_hours(),
            job.hourly_rate(),
            job.work_days_per_week(),
            rules,
            step_number,
        );
        step_number = trace.push(holiday.audit_step);

        let leave = calculate_annual_leave(
            job.start_date(),
            job.attendance_rate_last_year(),
            today,
            rules,
            step_number,
        );
        step_number = trace.push(leave.audit_step);

        let severance = estimate_severance(
            service,
            job.weekly_hours(),
            job.total_wage_last_3_months(),
            job.total_days_last_3_months(),
            rules,
            step_number,
        );
        trace.push(severance.audit_step);

        let warnings = derive_warnings(
            &WarningInputs {
                min_wage_ok: min_wage.min_wage_ok,
                weekly_hours: job.weekly_hours(),
                weekly_holiday_pay: holiday.pay,
                service,
                severance_estimate: severance.estimate,
            },
            rules,
        );

        debug!(
            service_days = service.days,
            service_years = service.years,
            min_wage_ok = min_wage.min_wage_ok,
            weekly_holiday_pay = holiday.pay,
            annual_leave_days = %leave.days,
            severance_estimate = severance.estimate,
            warnings = warnings.len(),
            "Job evaluated"
        );

        EvaluationReport {
            result: EvaluationResult {
                min_wage_ok: min_wage.min_wage_ok,
                min_wage_required: min_wage.min_wage_required,
                weekly_holiday_pay: holiday.pay,
                annual_leave_days: leave.days,
                severance_estimate: severance.estimate,
                warnings: warnings.iter().map(|w| w.message().to_string()).collect(),
            },
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            rules_version: rules.version.clone(),
            audit_trace: trace,
        }
    }

    /// Summarizes a job's annual leave balance as of `today`.
    pub fn summarize_leave(&self, job: &JobInputs, today: NaiveDate) -> AnnualLeaveSummary {
        summarize_leave_with_rules(job, today, &self.rules)
    }

    /// Aggregates a month of work records at the job's hourly rate.
    pub fn summarize_month(
        &self,
        job: &JobInputs,
        month: &ReportingMonth,
        records: &[WorkRecord],
    ) -> MonthlySummary {
        summarize_month(job.hourly_rate(), month, records)
    }
}

/// Evaluates a job as of `today` under the default rules.
///
/// # Examples
///
/// ```
/// use labor_engine::calculation::evaluate;
/// use labor_engine::models::JobInputs;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let job = JobInputs::builder(
///     NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
///     Decimal::new(11500, 0),
///     Decimal::new(30, 0),
/// )
/// .work_days_per_week(5)
/// .build()
/// .unwrap();
///
/// let result = evaluate(&job, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
/// assert!(result.min_wage_ok);
/// assert_eq!(result.weekly_holiday_pay, 69000);
/// assert_eq!(result.severance_estimate, 0);
/// ```
pub fn evaluate(job: &JobInputs, today: NaiveDate) -> EvaluationResult {
    Evaluator::default().evaluate(job, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn days_ago(days: u64) -> NaiveDate {
        today() - chrono::Days::new(days)
    }

    #[test]
    fn test_explain_records_one_step_per_rule() {
        let job = JobInputs::builder(days_ago(800), dec("11000"), dec("40"))
            .work_days_per_week(5)
            .build()
            .unwrap();

        let report = Evaluator::default().explain(&job, today());
        let rule_ids: Vec<&str> = report
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();

        assert_eq!(
            rule_ids,
            vec![
                "service_period",
                "minimum_wage",
                "weekly_holiday_pay",
                "annual_leave",
                "severance"
            ]
        );
        let numbers: Vec<u32> = report
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(report.rules_version, "2025");
        assert_eq!(report.engine_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_evaluate_matches_explain_result() {
        let job = JobInputs::builder(days_ago(500), dec("9500"), dec("22"))
            .build()
            .unwrap();
        let evaluator = Evaluator::default();

        assert_eq!(
            evaluator.evaluate(&job, today()),
            evaluator.explain(&job, today()).result
        );
    }

    #[test]
    fn test_custom_minimum_wage_flows_into_result() {
        let rules = LaborRules {
            version: "2024".to_string(),
            minimum_wage_hourly: 9860,
            ..LaborRules::default()
        };
        let job = JobInputs::builder(days_ago(10), dec("9900"), dec("10"))
            .build()
            .unwrap();

        let report = Evaluator::new(rules).unwrap().explain(&job, today());

        assert!(report.result.min_wage_ok);
        assert_eq!(report.result.min_wage_required, 9860);
        assert_eq!(report.rules_version, "2024");
    }

    #[test]
    fn test_summarize_leave_uses_evaluator_rules() {
        let mut rules = LaborRules::default();
        rules.annual_leave.base_days = 16;
        let job = JobInputs::builder(days_ago(400), dec("11000"), dec("20"))
            .build()
            .unwrap();

        let summary = Evaluator::new(rules).unwrap().summarize_leave(&job, today());
        assert_eq!(summary.total, dec("16"));
    }

    #[test]
    fn test_new_rejects_zero_accrual_period() {
        let mut rules = LaborRules::default();
        rules.annual_leave.accrual_period_days = 0;

        match Evaluator::new(rules) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "<memory>");
                assert!(message.contains("accrual_period_days"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_zero_assumed_work_days() {
        let mut rules = LaborRules::default();
        rules.weekly_holiday.assumed_work_days = 0;

        assert!(Evaluator::new(rules).is_err());
    }

    #[test]
    fn test_from_config_uses_loaded_rules() {
        let config = ConfigLoader::load("./config/kr2025").unwrap();
        let evaluator = Evaluator::from_config(&config);

        assert_eq!(evaluator.rules(), config.rules());
    }

    /// EV-001: a rate at the Decimal limit evaluates without overflowing
    #[test]
    fn test_decimal_max_rate_at_168_hours() {
        let job = JobInputs::builder(days_ago(10), Decimal::MAX, dec("168"))
            .work_days_per_week(1)
            .build()
            .unwrap();

        let result = evaluate(&job, today());

        assert!(result.min_wage_ok);
        assert_eq!(result.weekly_holiday_pay, u64::MAX);
        assert!(result.warnings.is_empty());
    }

    /// EV-002: a huge three-month wage saturates the severance estimate
    #[test]
    fn test_huge_three_month_wage() {
        let job = JobInputs::builder(days_ago(5 * 365), dec("11000"), dec("40"))
            .total_wage_last_3_months(dec("10000000000000000000000000000"))
            .total_days_last_3_months(90)
            .build()
            .unwrap();

        let result = evaluate(&job, today());

        assert_eq!(result.severance_estimate, u64::MAX);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_summarize_month_uses_job_rate() {
        let job = JobInputs::builder(days_ago(400), dec("10000"), dec("20"))
            .build()
            .unwrap();
        let month = ReportingMonth::parse("2025-05").unwrap();

        let summary = Evaluator::default().summarize_month(&job, &month, &[]);
        assert_eq!(summary.hourly_rate, dec("10000"));
        assert_eq!(summary.total_days, 0);
    }
}
