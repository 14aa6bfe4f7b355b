//! Core data models for the labor evaluation engine.
//!
//! This module contains the job input snapshot, work records, and all
//! evaluation and summary outputs.

mod evaluation;
mod job;
mod reporting_month;
mod work_record;

pub use evaluation::{AnnualLeaveSummary, AuditStep, AuditTrace, EvaluationReport, EvaluationResult};
pub use job::{JobInputs, JobInputsBuilder, MAX_WEEKLY_HOURS};
pub use reporting_month::{MonthlySummary, ReportingMonth, WeekStat};
pub use work_record::WorkRecord;
