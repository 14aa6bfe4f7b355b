//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the statutory
//! rule set from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::LaborRules;

/// Loads and provides access to the statutory rule set.
///
/// # Directory Structure
///
/// ```text
/// config/kr2025/
/// └── rules.yaml   # Minimum wage, thresholds, leave and severance rules
/// ```
///
/// # Example
///
/// ```no_run
/// use labor_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/kr2025").unwrap();
/// println!("Minimum wage: {}", loader.rules().minimum_wage_hourly);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    rules: LaborRules,
}

impl ConfigLoader {
    /// Loads the rule set from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `rules.yaml` is missing, is not valid YAML, or
    /// contains values that cannot drive a calculation (see
    /// [`ConfigLoader::from_rules`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rules_path = path.as_ref().join("rules.yaml");
        let path_str = rules_path.display().to_string();

        let content = fs::read_to_string(&rules_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rules: LaborRules =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::validate(&rules).map_err(|message| EngineError::ConfigParseError {
            path: path_str,
            message,
        })?;

        Ok(Self { rules })
    }

    /// Wraps an in-memory rule set after checking it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParseError` (with path `<memory>`) when the accrual
    /// period or assumed work days are zero, or when `max_days` is below
    /// `base_days`.
    pub fn from_rules(rules: LaborRules) -> EngineResult<Self> {
        Self::validate(&rules).map_err(|message| EngineError::ConfigParseError {
            path: "<memory>".to_string(),
            message,
        })?;
        Ok(Self { rules })
    }

    fn validate(rules: &LaborRules) -> Result<(), String> {
        if rules.annual_leave.accrual_period_days <= 0 {
            return Err("annual_leave.accrual_period_days must be positive".to_string());
        }
        if rules.annual_leave.max_days < rules.annual_leave.base_days {
            return Err("annual_leave.max_days must not be below base_days".to_string());
        }
        if rules.weekly_holiday.assumed_work_days == 0 {
            return Err("weekly_holiday.assumed_work_days must be positive".to_string());
        }
        Ok(())
    }

    /// Returns the loaded rule set.
    pub fn rules(&self) -> &LaborRules {
        &self.rules
    }
}
