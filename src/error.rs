use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// No usable filter text was supplied
    #[error("{0}")]
    InvalidQuery(String),

    /// The year post-filter left no candidates
    #[error("{0}")]
    NoMatch(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_query() -> Self {
        AppError::InvalidQuery("Please provide at least one filter criteria.".to_string())
    }

    pub fn no_match() -> Self {
        AppError::NoMatch("No matching dramas found. Try adjusting your filters.".to_string())
    }

    /// Short label used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidQuery(_) => "invalid_query",
            AppError::NoMatch(_) => "no_match",
            AppError::Catalog(_) => "catalog",
            AppError::Config(_) => "config",
            AppError::Internal(_) => "internal",
        }
    }

    /// Whether the error is an expected outcome of a recommendation request
    pub fn is_user_facing(&self) -> bool {
        matches!(self, AppError::InvalidQuery(_) | AppError::NoMatch(_))
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Catalog(err.to_string())
    }
}

impl From<envy::Error> for AppError {
    fn from(err: envy::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Recommendation outcomes travel as regular 200 payloads; clients read the `error` key.
        let (status, message) = match self {
            AppError::InvalidQuery(msg) | AppError::NoMatch(msg) => (StatusCode::OK, msg),
            AppError::Catalog(_) | AppError::Config(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
