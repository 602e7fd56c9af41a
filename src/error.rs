use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::model::payroll::PayrollField;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before storage was touched.
    #[error("{field}: {reason}")]
    Validation { field: PayrollField, reason: String },

    #[error("employee id `{0}` already exists")]
    DuplicateKey(String),

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl StoreError {
    pub fn validation(field: PayrollField, reason: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::Validation { .. } => StatusCode::BAD_REQUEST,
            StoreError::DuplicateKey(_) => StatusCode::CONFLICT,
            StoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            StoreError::Validation { field, reason } => json!({
                "error": "Input Error",
                "field": field,
                "message": reason,
            }),
            StoreError::DuplicateKey(_) => json!({
                "error": "Employee ID already exists!"
            }),
            StoreError::Storage(e) => {
                tracing::error!(error = %e, "Payroll storage failure");
                json!({
                    "error": "Internal Server Error"
                })
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
