use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Body returned to callers for every failed generation request.
pub const GENERIC_FAILURE: &str = "Failed to generate recipe";

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Cannot compose prompt: {message}")]
    ComposeError { message: String },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Recipe server responded with {status}: {message}")]
    UpstreamError { status: u16, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecipeError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::InvalidCommand {
            message: message.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RecipeError::InvalidRequest { .. }
            | RecipeError::ComposeError { .. }
            | RecipeError::InvalidCommand { .. } => ErrorSeverity::Low,
            RecipeError::ApiError(_) | RecipeError::UpstreamError { .. } => ErrorSeverity::Medium,
            RecipeError::IoError(_) => ErrorSeverity::High,
            RecipeError::ConfigValidationError { .. }
            | RecipeError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecipeError::InvalidRequest { .. }
            | RecipeError::ApiError(_)
            | RecipeError::UpstreamError { .. } => {
                "Failed to generate recipe. Please try again.".to_string()
            }
            RecipeError::ComposeError { message } | RecipeError::InvalidCommand { message } => {
                message.clone()
            }
            RecipeError::IoError(e) => format!("Could not read a required file: {}", e),
            RecipeError::ConfigValidationError { .. }
            | RecipeError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecipeError::InvalidRequest { .. } => {
                "Send a JSON body of the form {\"prompt\": \"...\"}"
            }
            RecipeError::ComposeError { .. } => {
                "Describe the dish you want or list the ingredients you have"
            }
            RecipeError::InvalidCommand { .. } => "Type 'help' for a list of commands",
            RecipeError::ApiError(_) | RecipeError::UpstreamError { .. } => {
                "Check that the recipe server is running and reachable"
            }
            RecipeError::IoError(_) => "Check the file path and its permissions",
            RecipeError::ConfigValidationError { .. }
            | RecipeError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and restart"
            }
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct ErrorBody {
    error: &'static str,
}

/// The 500 response sent for every failed generation.
pub fn generic_failure_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: GENERIC_FAILURE,
        }),
    )
        .into_response()
}

// Callers only ever see the generic message; the detail stays in the logs.
impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        tracing::error!("Error generating recipe: {}", self);
        generic_failure_response()
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
