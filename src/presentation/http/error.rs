use crate::application::{ApplicationResult, error::ApplicationError};
use crate::presentation::http::messages::message_for;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Error response with a plain-text body carrying the reader-facing message.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = match &err {
            ApplicationError::NotFound(_)
            | ApplicationError::PageOutOfRange { .. }
            | ApplicationError::TextNotFound(_)
            | ApplicationError::AuthorNotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::DuplicateIdentity(_) | ApplicationError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, message_for(&err))
    }

    /// Creation reports every failure, classified or not, as a bad request.
    pub fn bad_request(err: ApplicationError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message_for(&err))
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }
        (self.status, self.message).into_response()
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
