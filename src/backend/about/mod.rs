//! Static about pages

use axum::response::{IntoResponse, Response};

use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::render::{render, PageContext};

/// `GET /about/author/`
pub async fn author(CurrentUser(user): CurrentUser) -> Result<Response, BackendError> {
    let context = PageContext::new(user.as_ref(), "About the author");
    Ok(render("about/author.html", &context)?.into_response())
}

/// `GET /about/tech/`
pub async fn tech(CurrentUser(user): CurrentUser) -> Result<Response, BackendError> {
    let context = PageContext::new(user.as_ref(), "Technologies");
    Ok(render("about/tech.html", &context)?.into_response())
}
