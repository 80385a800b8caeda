//! Error types for the calculator service
//!
//! Provides unified error handling using thiserror.

use std::num::ParseFloatError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Argument Error Enum ==
/// Operand problems. Reported inside a 200 response body, never as a status.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ArgumentError {
    /// `x` or `y` absent or empty
    #[error("Argument Missing")]
    Missing,

    /// Operand present but not a floating-point literal
    #[error("invalid number {input:?}: {source}")]
    Parse {
        input: String,
        #[source]
        source: ParseFloatError,
    },

    /// Operand is a numeric literal outside the range of f64
    #[error("number {input:?} out of range")]
    OutOfRange { input: String },
}

// == API Error Enum ==
/// Errors raised by the routing layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No operation registered under this name
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownOperation(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the routing layer.
pub type Result<T> = std::result::Result<T, ApiError>;
