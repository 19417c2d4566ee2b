//! Form input and validation
//!
//! Every form keeps the raw submitted strings so a rejected submission can be
//! rendered again with the user's input intact. `validate` turns the raw
//! input into a checked value or a set of per-field errors; nothing is
//! written to the store unless validation succeeded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::error::SharedError;
use crate::shared::models::Group;

/// Message for a missing mandatory field
pub const REQUIRED: &str = "This field is required.";

/// Image extensions accepted for post uploads
pub const IMAGE_EXTENSIONS: &[&str] = &["gif", "png", "jpg", "jpeg", "webp"];

/// Per-field validation errors, rendered next to the fields
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// `Ok(value)` when no error was recorded
    pub fn into_result<T>(self, value: T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Raw post form input (`text`, `group`)
///
/// The image is a file part and is validated separately with
/// [`validate_image_name`].
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub text: String,
    /// Group id as submitted, empty for "no group"
    #[serde(default)]
    pub group: String,
}

/// Checked post fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub text: String,
    pub group_id: Option<i64>,
}

impl PostInput {
    /// Validate against the groups that exist
    pub fn validate(&self, groups: &[Group]) -> Result<PostDraft, FormErrors> {
        let mut errors = FormErrors::new();

        let text = self.text.trim();
        if text.is_empty() {
            errors.add("text", REQUIRED);
        }

        let group = self.group.trim();
        let group_id = if group.is_empty() {
            None
        } else {
            match group.parse::<i64>() {
                Ok(id) if groups.iter().any(|g| g.id == id) => Some(id),
                _ => {
                    errors.add(
                        "group",
                        "Select a valid choice. That choice is not one of the available choices.",
                    );
                    None
                }
            }
        };

        errors.into_result(PostDraft {
            text: text.to_string(),
            group_id,
        })
    }
}

/// Check the file name of an uploaded image
pub fn validate_image_name(file_name: &str) -> Result<(), String> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err("Upload a valid image. The file you uploaded was either not an image or a corrupted image.".to_string())
    }
}

/// Raw comment form input
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CommentInput {
    #[serde(default)]
    pub text: String,
}

impl CommentInput {
    pub fn validate(&self) -> Result<String, FormErrors> {
        let mut errors = FormErrors::new();
        let text = self.text.trim();
        if text.is_empty() {
            errors.add("text", REQUIRED);
        }
        errors.into_result(text.to_string())
    }
}

/// Raw signup form input
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct SignupInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing)]
    pub password: String,
}

impl SignupInput {
    /// Format checks only; uniqueness is checked against the store
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();

        if !is_valid_username(self.username.trim()) {
            errors.add(
                "username",
                "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
            );
        }
        if !self.email.contains('@') {
            errors.add("email", "Enter a valid email address.");
        }
        if self.password.len() < 8 {
            errors.add("password", "Password must be at least 8 characters");
        }

        errors.into_result(())
    }
}

/// Usernames are 3-30 characters, start with a letter, and contain only
/// ASCII letters, digits and underscores.
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Group slugs are lowercase ASCII letters, digits, hyphens and underscores
pub fn validate_slug(slug: &str) -> Result<(), SharedError> {
    if slug.is_empty() || slug.len() > 50 {
        return Err(SharedError::validation("slug", "Slug must be 1-50 characters"));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(SharedError::validation(
            "slug",
            "Slug may contain only lowercase letters, numbers, hyphens and underscores",
        ));
    }
    Ok(())
}

/// Raw login form input
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    /// Path to return to after a successful login
    #[serde(default)]
    pub next: Option<String>,
}
