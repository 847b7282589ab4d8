use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use envelope::{Code, Responder};
use thiserror::Error;

/// Application-level errors for the notes service.
///
/// Each variant maps to an HTTP status and a response [`Code`]; the envelope
/// is written by [`NotesServiceError::respond`].
#[derive(Debug, Error)]
pub enum NotesServiceError {
    /// Requested resource was not found.
    #[error("Not Found: {0}")]
    NotFound(String),

    /// Client sent an invalid request.
    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// Unexpected internal failure.
    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl NotesServiceError {
    pub fn status(&self) -> StatusCode {
        self.code().default_status()
    }

    pub fn code(&self) -> Code {
        match self {
            Self::NotFound(_) => Code::NotFound,
            Self::BadRequest(_) => Code::BadRequest,
            Self::Internal(_) => Code::InternalError,
        }
    }

    /// Writes this error through the responder.
    ///
    /// Internal failures carry no client-facing message, so the responder's
    /// generic one is used; their text only reaches the body in debug mode.
    pub fn respond(&self, responder: &Responder) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, %status, "Server error");
        } else {
            tracing::warn!(error = %self, %status, "Client error");
        }

        let message = match self {
            Self::NotFound(message) | Self::BadRequest(message) => message.as_str(),
            Self::Internal(_) => "",
        };

        responder
            .error_response(Some(status), Some(self.code()), message, Some(self))
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_status_and_code() {
        let not_found = NotesServiceError::NotFound("x".into());
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.code(), Code::NotFound);

        let bad = NotesServiceError::BadRequest("x".into());
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bad.code(), Code::BadRequest);

        let internal = NotesServiceError::Internal("x".into());
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.code(), Code::InternalError);
    }

    #[test]
    fn status_follows_code_pairing() {
        for err in [
            NotesServiceError::NotFound("x".into()),
            NotesServiceError::BadRequest("x".into()),
            NotesServiceError::Internal("x".into()),
        ] {
            assert_eq!(err.status(), err.code().default_status());
        }
    }

    #[test]
    fn respond_uses_error_status() {
        let responder = Responder::new(false);
        let res = NotesServiceError::BadRequest("title is required".into()).respond(&responder);

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(res.headers()["content-type"], "application/json");
    }
}
