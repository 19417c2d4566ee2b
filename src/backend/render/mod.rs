//! Presentation Layer
//!
//! Tera templates compiled into the binary and rendered from typed context
//! structs (see [`context`]). The engine is built once, on first use or at
//! startup through [`init`].

use axum::response::Html;
use serde::Serialize;
use std::sync::OnceLock;
use tera::{Context, Tera};

/// Typed template contexts, one per page
pub mod context;

pub use context::*;

/// Every template, by the name views render it under
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../../templates/base.html")),
    ("includes/macros.html", include_str!("../../../templates/includes/macros.html")),
    ("posts/index.html", include_str!("../../../templates/posts/index.html")),
    ("posts/group_list.html", include_str!("../../../templates/posts/group_list.html")),
    ("posts/profile.html", include_str!("../../../templates/posts/profile.html")),
    ("posts/post_detail.html", include_str!("../../../templates/posts/post_detail.html")),
    ("posts/create_post.html", include_str!("../../../templates/posts/create_post.html")),
    ("posts/follow.html", include_str!("../../../templates/posts/follow.html")),
    ("users/signup.html", include_str!("../../../templates/users/signup.html")),
    ("users/login.html", include_str!("../../../templates/users/login.html")),
    ("users/logged_out.html", include_str!("../../../templates/users/logged_out.html")),
    ("about/author.html", include_str!("../../../templates/about/author.html")),
    ("about/tech.html", include_str!("../../../templates/about/tech.html")),
    ("core/404.html", include_str!("../../../templates/core/404.html")),
    ("core/500.html", include_str!("../../../templates/core/500.html")),
    ("core/error.html", include_str!("../../../templates/core/error.html")),
];

static ENGINE: OnceLock<Result<Tera, String>> = OnceLock::new();

fn build_engine() -> Result<Tera, String> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.iter().copied())
        .map_err(|e| describe(&e))?;
    Ok(tera)
}

/// Error message with its whole source chain; tera nests the useful part
fn describe(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn engine() -> Result<&'static Tera, tera::Error> {
    match ENGINE.get_or_init(build_engine) {
        Ok(tera) => Ok(tera),
        Err(message) => Err(tera::Error::msg(message.clone())),
    }
}

/// Compile the templates, reporting syntax errors before the server starts
pub fn init() -> Result<(), tera::Error> {
    let tera = engine()?;
    tracing::info!(templates = tera.get_template_names().count(), "Templates loaded");
    Ok(())
}

/// Render `template` with a serializable context
pub fn render<C: Serialize>(template: &str, context: &C) -> Result<Html<String>, tera::Error> {
    let context = Context::from_serialize(context)?;
    let html = engine()?.render(template, &context)?;
    Ok(Html(html))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::middleware::AuthenticatedUser;

    #[test]
    fn test_all_templates_compile() {
        init().unwrap();
    }

    #[test]
    fn test_navigation_depends_on_user() {
        let user = AuthenticatedUser {
            user_id: 1,
            username: "leo".to_string(),
        };
        let anonymous = render("about/author.html", &PageContext::new(None, "About")).unwrap();
        assert!(anonymous.0.contains("/auth/login/"));

        let logged_in = render("about/author.html", &PageContext::new(Some(&user), "About")).unwrap();
        assert!(logged_in.0.contains("/auth/logout/"));
        assert!(logged_in.0.contains("/profile/leo/"));
    }

    #[test]
    fn test_text_is_escaped() {
        let context = ErrorPageContext {
            user: None,
            status: 400,
            message: Some("<script>".to_string()),
        };
        let html = render("core/error.html", &context).unwrap();
        assert!(html.0.contains("&lt;script&gt;"));
        assert!(!html.0.contains("<script>"));
    }

    #[test]
    fn test_unknown_template() {
        assert!(render("nope.html", &PageContext::new(None, "x")).is_err());
    }
}
