use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error as ThisError;

/// Detail string returned for failed mock OAuth grants. The client under test
/// asserts on this exact text, so it is reproduced verbatim.
pub const INVALID_GRANT_DETAIL: &str = "The provided authorization grant is invalid, expired, revoked, does not match the \
     redirection URI used in the authorization request, or was issued to another client.";

#[derive(ThisError, Debug)]
pub enum Error {
    /// Requested fixture record not found
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: String, id: String },

    /// Invalid request data
    #[error("{message}")]
    BadRequest { message: String },

    /// Mock OAuth endpoint received anything other than the configured credential
    #[error("Invalid grant")]
    InvalidGrant,

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Convenience constructor for fixture lookup misses.
    pub fn not_found(resource: impl Into<String>, id: impl ToString) -> Self {
        Error::NotFound {
            resource: resource.into(),
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Error::InvalidGrant => StatusCode::BAD_REQUEST,
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::NotFound { resource, id } => format!("{resource} with ID {id} not found"),
            Error::BadRequest { message } => message.clone(),
            Error::InvalidGrant => "Invalid grant".to_string(),
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details for debugging - different log levels based on severity
        match &self {
            Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::InvalidGrant => {
                tracing::info!("Rejected mock OAuth grant");
            }
            Error::NotFound { .. } | Error::BadRequest { .. } => {
                tracing::debug!("Client error: {}", self);
            }
        }

        let status = self.status_code();

        match &self {
            // The OAuth emulation returns the backend's fixed error envelope rather
            // than a plain text message
            Error::InvalidGrant => {
                use serde_json::json;
                let body = json!({
                    "errors": [
                        {
                            "id": "INVALID_GRANT",
                            "title": "Invalid grant",
                            "detail": INVALID_GRANT_DETAIL,
                            "status": 401
                        }
                    ]
                });

                (status, axum::response::Json(body)).into_response()
            }
            _ => {
                let user_message = self.user_message();
                (status, user_message).into_response()
            }
        }
    }
}

/// Type alias for handler results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let err = Error::NotFound {
            resource: "Post".to_string(),
            id: "7".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.user_message(), "Post with ID 7 not found");

        assert_eq!(Error::InvalidGrant.status_code(), StatusCode::BAD_REQUEST);
    }
}
