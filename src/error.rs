use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error")]
    Validation(#[from] ValidationErrors),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// One rejected field, as delivered in the 422 response body.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

pub fn validation_issues(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            issues.push(ValidationIssue {
                path: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
            });
        }
    }
    issues.sort();
    issues
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                let issues = validation_issues(&errors);
                tracing::warn!("Validation failed with {} issue(s)", issues.len());
                (StatusCode::UNPROCESSABLE_ENTITY, Json(issues)).into_response()
            }
            AppError::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                let body = Json(json!({
                    "error": msg,
                    "status": StatusCode::NOT_FOUND.as_u16()
                }));
                (StatusCode::NOT_FOUND, body).into_response()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                let body = Json(json!({
                    "error": format!("Database error: {}", e),
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16()
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                let body = Json(json!({
                    "error": format!("Internal server error: {}", e),
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16()
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
