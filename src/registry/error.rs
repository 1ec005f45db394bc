//! Storage error type
//!
//! A single error kind crosses the registry boundary. Variants only refine
//! the log message; every one of them is a server-side failure.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::gateway::types::{ApiResponse, error_codes};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Connection refused, pool exhausted or closed
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// The database refused the statement
    #[error("Storage rejected statement: {0}")]
    Rejected(String),

    /// A returned row could not be decoded
    #[error("Malformed storage result: {0}")]
    Malformed(String),
}

impl StorageError {
    /// Get the error code for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Unavailable(_) => "STORAGE_UNAVAILABLE",
            StorageError::Rejected(_) => "STORAGE_REJECTED",
            StorageError::Malformed(_) => "STORAGE_MALFORMED",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StorageError::Unavailable(e.to_string()),
            sqlx::Error::RowNotFound
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => StorageError::Malformed(e.to_string()),
            _ => StorageError::Rejected(e.to_string()),
        }
    }
}

impl IntoResponse for StorageError {
    fn into_response(self) -> Response {
        tracing::error!(code = self.code(), error = %self, "Storage failure");
        let body = ApiResponse::<()>::error(error_codes::STORAGE_ERROR, "storage error");
        (self.http_status(), Json(body)).into_response()
    }
}
