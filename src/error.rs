//! Error types and handling for the searchmarks service

use crate::dataset::LoadError;
use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code for JSON error bodies
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Load(LoadError::NotFound(_)) => "dataset_not_found",
            AppError::Load(LoadError::Malformed { .. }) => "dataset_malformed",
            AppError::Load(LoadError::Io { .. }) => "dataset_unreadable",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Process exit code for CLI mode
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidInput(_) => 1,
            AppError::Load(LoadError::NotFound(_)) => 3,
            AppError::Load(LoadError::Malformed { .. }) => 4,
            AppError::Load(LoadError::Io { .. }) | AppError::Internal(_) => 5,
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Limits must be zero or positive
pub fn validate_limit(limit: i64) -> Result<usize, AppError> {
    usize::try_from(limit)
        .map_err(|_| AppError::InvalidInput(format!("limit must not be negative, got {}", limit)))
}

/// Pages are 1-based
pub fn validate_page(page: i64) -> Result<usize, AppError> {
    match usize::try_from(page) {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(AppError::InvalidInput(format!(
            "page must be 1 or greater, got {}",
            page
        ))),
    }
}
