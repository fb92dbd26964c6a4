//! Request types and validation for HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::ProblemDetails;

/// Validation trait for request types.
pub trait Validate {
    /// Validate the request; `request_id` fills the problem's `instance`.
    ///
    /// Returns a boxed `ProblemDetails` to avoid large `Result::Err` variants.
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>>;
}

/// Body of `POST /api/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub budget: f64,
}

/// Body of `POST /api/recommend`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub origin: String,
    pub budget: f64,
}

fn require_name(field: &str, value: &str, request_id: &str) -> Result<(), Box<ProblemDetails>> {
    if value.trim().is_empty() {
        return Err(Box::new(ProblemDetails::bad_request(
            format!("The '{field}' field is required and cannot be empty"),
            request_id,
        )));
    }
    Ok(())
}

fn require_budget(budget: f64, request_id: &str) -> Result<(), Box<ProblemDetails>> {
    if budget.is_nan() || budget < 0.0 {
        return Err(Box::new(ProblemDetails::bad_request(
            "The 'budget' field must be a non-negative number",
            request_id,
        )));
    }
    Ok(())
}

impl Validate for SearchRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require_budget(self.budget, request_id)?;
        require_name("origin", &self.origin, request_id)?;
        require_name("destination", &self.destination, request_id)
    }
}

impl Validate for RecommendRequest {
    fn validate(&self, request_id: &str) -> Result<(), Box<ProblemDetails>> {
        require_budget(self.budget, request_id)?;
        require_name("origin", &self.origin, request_id)
    }
}
