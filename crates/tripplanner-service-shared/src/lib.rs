//! Shared infrastructure for trip planner HTTP services.
//!
//! - [`AppState`]: the loaded catalog and planner configuration
//! - [`ServiceConfig`]: environment-driven service settings
//! - [`health`]: liveness/readiness handlers
//! - [`ProblemDetails`]: RFC 9457 error responses
//! - [`logging`]: structured JSON or text logging setup
//! - [`middleware`]: request id extraction
//! - Request types with validation for each endpoint
//!
//! # Architecture
//!
//! Handlers stay thin; every planning decision lives in `tripplanner-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Parse request JSON                                       │
//! │  - Validate parameters                                      │
//! │  - Call tripplanner-lib APIs                                │
//! │  - Format response                                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Enable the `test-utils` feature to use [`test_utils`] from dependent crates.

#![deny(warnings)]

mod config;
mod health;
pub mod logging;
pub mod middleware;
mod problem;
mod request;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ConfigError, ServiceConfig};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, RequestId, REQUEST_ID_HEADER};
pub use problem::{
    from_lib_error, ProblemDetails, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
    PROBLEM_UNKNOWN_CITY,
};
pub use request::{RecommendRequest, SearchRequest, Validate};
pub use state::{AppState, AppStateError};
