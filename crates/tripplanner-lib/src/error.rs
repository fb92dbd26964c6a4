use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the trip planner library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a city name could not be found in the catalog.
    #[error("unknown city name: {name}{}", format_suggestions(.suggestions))]
    UnknownCity {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a budget is negative or not a number.
    #[error("invalid budget {budget}: budget must be a non-negative number")]
    InvalidBudget { budget: f64 },

    /// Raised when a catalog file does not exist at the resolved path.
    #[error("catalog not found at {path}")]
    CatalogNotFound { path: PathBuf },

    /// Raised when a catalog contains no cities.
    #[error("catalog must contain at least one city")]
    EmptyCatalog,

    /// Raised when the same city name appears twice in a catalog.
    #[error("duplicate city name encountered: {name}")]
    DuplicateCity { name: String },

    /// Raised when a listed city has no coordinate entry.
    #[error("city {name} has no coordinates")]
    MissingCoordinates { name: String },

    /// Raised when a coordinate is NaN or infinite.
    #[error("city {name} has non-finite coordinates")]
    InvalidCoordinates { name: String },

    /// Raised when planner configuration values are unusable.
    #[error("invalid planner configuration: {message}")]
    InvalidConfig { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for catalog JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
