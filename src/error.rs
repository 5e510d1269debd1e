//! Error types for the HTTP layer
//!
//! Provides unified error handling using thiserror. Bodies are plain text:
//! read failures carry a generic localized message, write failures carry the
//! validator or driver message verbatim.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::store::StoreError;
use crate::validation::ValidationErrors;

// == API Error Enum ==
/// Unified error type for the student endpoints.
#[derive(Error, Debug)]
pub enum ApiError {
    /// List or get failed; `message` is what the client sees
    #[error("{message}")]
    Read {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    /// Payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Body could not be decoded
    #[error("{0}")]
    Decode(String),

    /// Create, update or delete failed in the store
    #[error(transparent)]
    Write(StoreError),

    /// Landing page template could not be rendered
    #[error("{0}")]
    Render(&'static str),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Read { .. } | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) | ApiError::Decode(_) | ApiError::Write(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Read { source, .. } => error!(error = %source, "store read failed"),
            ApiError::Write(source) => warn!(error = %source, "store write failed"),
            ApiError::Validation(errors) => warn!(%errors, "rejected student payload"),
            ApiError::Decode(message) => warn!(%message, "undecodable request body"),
            ApiError::Render(_) => {}
        }

        (status, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_read_error_hides_store_detail() {
        let err = ApiError::Read {
            message: "generic failure",
            source: StoreError::Unavailable("connection refused".to_string()),
        };
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, "generic failure");
    }

    #[tokio::test]
    async fn test_write_error_passes_message_through() {
        let err = ApiError::Write(StoreError::InvalidId("abc".to_string()));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));
        assert!(body_text(response).await.contains("\"abc\""));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Decode("bad".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Render("oops").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
