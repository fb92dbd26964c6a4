//! RFC 9457 Problem Details for HTTP APIs.
//!
//! See: <https://www.rfc-editor.org/rfc/rfc9457.html>

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use tripplanner_lib::Error as LibError;

/// Problem type URI for unknown city names.
pub const PROBLEM_UNKNOWN_CITY: &str = "/problems/unknown-city";

/// Problem type URI for invalid request parameters.
pub const PROBLEM_INVALID_REQUEST: &str = "/problems/invalid-request";

/// Problem type URI for internal server errors.
pub const PROBLEM_INTERNAL_ERROR: &str = "/problems/internal-error";

/// RFC 9457 Problem Details response body.
///
/// # Example
///
/// ```
/// use tripplanner_service_shared::{ProblemDetails, PROBLEM_UNKNOWN_CITY};
/// use axum::http::StatusCode;
///
/// let problem = ProblemDetails::new(PROBLEM_UNKNOWN_CITY, "Unknown City", StatusCode::NOT_FOUND)
///     .with_detail("City 'Cuzco' not found. Did you mean: Cusco?")
///     .with_request_id("req-12345");
/// assert_eq!(problem.status, 404);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// URI reference identifying the problem type (relative).
    #[serde(rename = "type")]
    pub type_uri: String,

    pub title: String,

    pub status: u16,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// The request id of the failing call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,

    /// City names close to an unknown one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ProblemDetails {
    pub fn new(type_uri: impl Into<String>, title: impl Into<String>, status: StatusCode) -> Self {
        Self {
            type_uri: type_uri.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
            instance: None,
            suggestions: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.instance = Some(request_id.into());
        self
    }

    /// 400 Bad Request for invalid input.
    pub fn bad_request(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INVALID_REQUEST,
            "Invalid Request",
            StatusCode::BAD_REQUEST,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    /// 404 Not Found for a city missing from the catalog.
    pub fn unknown_city(name: &str, suggestions: &[String], request_id: impl Into<String>) -> Self {
        let detail = if suggestions.is_empty() {
            format!("City '{}' not found", name)
        } else {
            format!(
                "City '{}' not found. Did you mean: {}?",
                name,
                suggestions.join(", ")
            )
        };

        let mut problem = Self::new(PROBLEM_UNKNOWN_CITY, "Unknown City", StatusCode::NOT_FOUND)
            .with_detail(detail)
            .with_request_id(request_id);
        problem.suggestions = suggestions.to_vec();
        problem
    }

    /// 500 Internal Server Error.
    pub fn internal_error(detail: impl Into<String>, request_id: impl Into<String>) -> Self {
        Self::new(
            PROBLEM_INTERNAL_ERROR,
            "Internal Error",
            StatusCode::INTERNAL_SERVER_ERROR,
        )
        .with_detail(detail)
        .with_request_id(request_id)
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl std::fmt::Display for ProblemDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.detail.as_deref().unwrap_or(""))
    }
}

impl std::error::Error for ProblemDetails {}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(&self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

/// Map a library error onto a problem document.
pub fn from_lib_error(error: &LibError, request_id: &str) -> ProblemDetails {
    match error {
        LibError::UnknownCity { name, suggestions } => {
            ProblemDetails::unknown_city(name, suggestions, request_id)
        }
        LibError::InvalidBudget { .. } => ProblemDetails::bad_request(error.to_string(), request_id),
        _ => ProblemDetails::internal_error(error.to_string(), request_id),
    }
}
