use axum::{http::{Method, StatusCode}, response::{IntoResponse, Response}};

pub type AppResult<T> = Result<T, AppError>;

/// What the caller gets to see. The cause only ever reaches the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    PageNotFound,
    InvalidMethod,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        use ErrorKind::*;
        match self {
            Parse => StatusCode::BAD_REQUEST,
            PageNotFound => StatusCode::NOT_FOUND,
            InvalidMethod => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn body(self) -> &'static str {
        use ErrorKind::*;
        match self {
            Parse => "parse error",
            PageNotFound => "page not found",
            InvalidMethod => "invalid method",
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub cause: anyhow::Error,
}

impl AppError {
    pub fn parse(err: impl Into<anyhow::Error>) -> Self {
        Self { kind: ErrorKind::Parse, cause: err.into() }
    }

    pub fn page_not_found(err: impl Into<anyhow::Error>) -> Self {
        Self { kind: ErrorKind::PageNotFound, cause: err.into() }
    }

    pub fn invalid_method(method: &Method) -> Self {
        Self {
            kind: ErrorKind::InvalidMethod,
            cause: anyhow::anyhow!("unsupported method {method}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.kind {
            ErrorKind::InvalidMethod => tracing::debug!(cause = %self.cause, "rejected request"),
            _ => tracing::error!(status = %self.kind.status(), cause = ?self.cause, "request failed"),
        }

        (self.kind.status(), self.kind.body()).into_response()
    }
}
