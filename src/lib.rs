//! Labor terms evaluation engine for hourly and part-time workers.
//!
//! This crate checks a job's terms against the 2025 Korean labor rules:
//! minimum wage, weekly holiday allowance, annual leave and severance
//! eligibility. Results are deterministic for a given job and reference date.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
