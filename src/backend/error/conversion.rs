/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`: login-required errors become a
 * redirect to the login form, everything else an HTML error page with the
 * matching status code.
 *
 * Every error is logged here, once: `warn!` for client errors, `error!` for
 * server errors.
 */

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::backend::error::types::BackendError;
use crate::backend::middleware::auth::login_url;
use crate::backend::render::{self, ErrorPageContext};

/// Last resort when the error page itself cannot be rendered
const PLAIN_SERVER_ERROR: &str = "Internal Server Error";

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Unauthenticated { next } = &self {
            tracing::warn!(next = %next, "Anonymous request to a login-only page");
            return Redirect::to(&login_url(next)).into_response();
        }

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = ?self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), "{}", self.message());
        }

        let template = match status {
            StatusCode::NOT_FOUND => "core/404.html",
            _ if status.is_server_error() => "core/500.html",
            _ => "core/error.html",
        };

        let context = ErrorPageContext {
            user: None,
            status: status.as_u16(),
            // Server-side details stay in the log.
            message: if status.is_server_error() {
                None
            } else {
                Some(self.message())
            },
        };

        match render::render(template, &context) {
            Ok(html) => (status, html).into_response(),
            Err(e) => {
                tracing::error!(error = ?e, template, "Failed to render error page");
                (status, Html(PLAIN_SERVER_ERROR)).into_response()
            }
        }
    }
}
