use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::model::{Note, NoteId};
use crate::validation::ValidationError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NoteView {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Note> for NoteView {
    fn from(note: &Note) -> Self {
        NoteView {
            id: note.id,
            title: note.title.to_owned(),
            content: note.content.to_owned(),
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// Every failure a handler can return, mapped to exactly one status.
#[derive(Debug)]
pub enum ApiError {
    Validation(Vec<String>),
    NotFound(String),
    Internal(String),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.errors)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ServiceError::Store(store_err) => {
                tracing::error!(error = %store_err, "store failure");
                ApiError::Internal(store_err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse { errors }),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { message })).into_response()
            }
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { message }),
            )
                .into_response(),
        }
    }
}
