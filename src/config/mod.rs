//! Configuration loading for the labor evaluation engine.
//!
//! This module loads the statutory rule set (minimum wage, eligibility
//! thresholds, leave and severance parameters) from YAML.
//!
//! # Example
//!
//! ```no_run
//! use labor_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kr2025").unwrap();
//! println!("Rules version: {}", config.rules().version);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnnualLeaveRules, DAYS_PER_SERVICE_YEAR, FULL_WEEK_ESTIMATE_HOURS, LaborRules, MIN_WAGE_2025,
    SeveranceRules, WEEKLY_HOLIDAY_MIN_HOURS, WeeklyHolidayRules,
};
