//! HTTP API module for the labor evaluation engine.
//!
//! This module exposes the evaluator over three JSON endpoints:
//! `/evaluate`, `/annual-leave` and `/summary`. No state is kept between
//! requests.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EvaluationRequest, JobRequest, SummaryRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
