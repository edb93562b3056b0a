//! HTTP error mapping
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `InvalidId` | 400 | `Invalid employee ID` |
//! | `InvalidPayload` | 400 | `Invalid request payload` |
//! | `Validation` | 400 | validation message |
//! | `NotFound` | 404 | not-found message |
//! | `Internal` | 500 | underlying error text |
//!
//! Bodies are plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::RosterError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid employee ID")]
    InvalidId,

    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId | AppError::InvalidPayload | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RosterError> for AppError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::NotFound(_) => AppError::NotFound(err.to_string()),
            RosterError::Validation(msg) => AppError::Validation(msg),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
