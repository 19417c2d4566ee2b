//! Multipart post form
//!
//! `POST /create/` and `POST /posts/{id}/edit/` submit `multipart/form-data`
//! with the fields `text`, `group` and an optional `image` file.

use axum::extract::Multipart;

use crate::backend::error::BackendError;
use crate::backend::posts::media::{looks_like_image, Upload};
use crate::shared::forms::{validate_image_name, FormErrors, PostDraft, PostInput};
use crate::shared::models::Group;

/// A parsed post form submission
#[derive(Debug, Default)]
pub struct PostSubmission {
    pub input: PostInput,
    pub image: Option<Upload>,
}

impl PostSubmission {
    /// Read every part of the body
    ///
    /// An empty file part (a form submitted without choosing a file) counts
    /// as no image. Unknown fields are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, BackendError> {
        let mut submission = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "text" => submission.input.text = field.text().await.map_err(bad_multipart)?,
                "group" => submission.input.group = field.text().await.map_err(bad_multipart)?,
                "image" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let data = field.bytes().await.map_err(bad_multipart)?;
                    if !file_name.is_empty() || !data.is_empty() {
                        submission.image = Some(Upload { file_name, data });
                    }
                }
                _ => {}
            }
        }

        Ok(submission)
    }

    /// Validate the fields and the image together
    pub fn validate(&self, groups: &[Group]) -> Result<PostDraft, FormErrors> {
        let (draft, mut errors) = match self.input.validate(groups) {
            Ok(draft) => (Some(draft), FormErrors::new()),
            Err(errors) => (None, errors),
        };

        if let Some(upload) = &self.image {
            if let Err(message) = validate_upload(upload) {
                errors.add("image", message);
            }
        }

        match draft {
            Some(draft) if errors.is_empty() => Ok(draft),
            _ => Err(errors),
        }
    }
}

fn validate_upload(upload: &Upload) -> Result<(), String> {
    validate_image_name(&upload.file_name)?;
    if looks_like_image(&upload.data) {
        Ok(())
    } else {
        Err("Upload a valid image. The file you uploaded was either not an image or a corrupted image.".to_string())
    }
}

fn bad_multipart(error: axum::extract::multipart::MultipartError) -> BackendError {
    BackendError::handler(error.status(), error.body_text())
}
