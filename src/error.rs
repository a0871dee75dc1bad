//! Application error types and their HTTP representations.
//!
//! `AppError` is the internal error taxonomy. `AppErrorResponse` pairs an
//! error with the request ID so the rendered error page and the logs can be
//! correlated. Handlers attach the request ID at their `?` sites via
//! [`ResultExt::with_request_id`].

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use http::header::{HeaderValue, CACHE_CONTROL};

use crate::config::CACHE_CONTROL_ERROR;
use crate::middleware::RequestId;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Template(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// An [`AppError`] annotated with the request it occurred in.
#[derive(Debug)]
pub struct AppErrorResponse {
    error: AppError,
    request_id: Option<RequestId>,
}

impl From<AppError> for AppErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error,
            request_id: None,
        }
    }
}

/// Attach the current request ID to an error result.
pub trait ResultExt<T> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse>;
}

impl<T, E: Into<AppError>> ResultExt<T> for Result<T, E> {
    fn with_request_id(self, request_id: &RequestId) -> Result<T, AppErrorResponse> {
        self.map_err(|e| AppErrorResponse {
            error: e.into(),
            request_id: Some(request_id.clone()),
        })
    }
}

impl IntoResponse for AppErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status_code();

        match &self.request_id {
            Some(RequestId(id)) => {
                tracing::error!(request_id = %id, error = %self.error, "Request failed");
            }
            None => {
                tracing::error!(error = %self.error, "Request failed");
            }
        }

        let body = error_page(status);
        let mut response = (status, Html(body)).into_response();
        response.headers_mut().insert(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_ERROR),
        );
        response
    }
}

/// Render a self-contained HTML error page.
fn error_page(status: StatusCode) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {}</title>
</head>
<body>
    <div class="error-page">
        <h1>Error {}</h1>
        <p>{}</p>
        <a href="/">Return to homepage</a>
    </div>
</body>
</html>"#,
        status.as_u16(),
        status.as_u16(),
        reason
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_errors_map_to_500() {
        let error = AppError::Internal("boom".to_string());
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_page_includes_status_code() {
        let body = error_page(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Error 500"));
        assert!(body.contains("Internal Server Error"));
    }
}
