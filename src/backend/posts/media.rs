//! Uploaded images
//!
//! Images are written to `<media_root>/posts/` under a sanitised version of
//! the client's file name. A name that is already taken gets `_<n>` before
//! the extension; the file is opened with `create_new`, so two uploads never
//! share a file.

use bytes::Bytes;
use std::io::ErrorKind;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Directory of post images, relative to the media root
pub const POSTS_DIR: &str = "posts";

/// File name used when nothing of the client's name survives sanitising
const FALLBACK_STEM: &str = "image";

/// An uploaded file part
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub data: Bytes,
}

/// Check the leading bytes against the formats we accept
pub fn looks_like_image(data: &[u8]) -> bool {
    data.starts_with(b"GIF87a")
        || data.starts_with(b"GIF89a")
        || data.starts_with(b"\x89PNG\r\n\x1a\n")
        || data.starts_with(b"\xFF\xD8\xFF")
        || (data.len() >= 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP")
}

/// Last path component of `name` with anything but ASCII letters, digits,
/// `.`, `-` and `_` replaced by `_`
pub fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        cleaned.to_string()
    }
}

fn numbered(file_name: &str, n: usize) -> String {
    if n == 0 {
        return file_name.to_string();
    }
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{}_{}.{}", stem, n, ext),
        _ => format!("{}_{}", file_name, n),
    }
}

/// Store an upload and return its path relative to the media root
pub async fn save_image(media_root: &Path, upload: &Upload) -> Result<String, std::io::Error> {
    let dir = media_root.join(POSTS_DIR);
    tokio::fs::create_dir_all(&dir).await?;

    let file_name = sanitize_file_name(&upload.file_name);

    let mut n = 0;
    loop {
        let candidate = numbered(&file_name, n);
        let path = dir.join(&candidate);

        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                n += 1;
                continue;
            }
            Err(e) => return Err(e),
        };

        file.write_all(&upload.data).await?;
        file.flush().await?;

        tracing::info!(path = %path.display(), bytes = upload.data.len(), "Image saved");
        return Ok(format!("{}/{}", POSTS_DIR, candidate));
    }
}
