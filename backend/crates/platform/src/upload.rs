//! Uploaded File Handling
//!
//! The upload middleware (multipart extraction) hands the core a stored
//! file; the core only records or clears the path reference. [`StoredImage`]
//! owns the file on disk until it is either kept (persisted with an entity)
//! or discarded (best-effort delete on a failed request).

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Allowed image extensions, mapped from the multipart content type
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/png" => Some("png"),
        "image/jpeg" => Some("jpeg"),
        "image/jpg" => Some("jpg"),
        _ => None,
    }
}

/// An uploaded image written to the uploads directory
#[derive(Debug, Clone)]
pub struct StoredImage {
    path: PathBuf,
}

impl StoredImage {
    /// Write uploaded bytes under `dir` with a fresh unique name
    pub async fn store(
        dir: impl AsRef<Path>,
        extension: &str,
        bytes: &[u8],
    ) -> std::io::Result<Self> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(format!("{}.{}", Uuid::new_v4(), extension));
        tokio::fs::write(&path, bytes).await?;

        Ok(Self { path })
    }

    /// Path reference recorded on the owning entity
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path as a string for persistence
    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// Best-effort delete; failure is logged, never surfaced
    pub async fn discard(self) {
        remove_image(&self.path).await;
    }
}

/// Best-effort removal of an image file by path
///
/// Used both for failed-request cleanup and for post-commit deletion of a
/// removed place's image. A missing file or a filesystem error is logged
/// and otherwise ignored.
pub async fn remove_image(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(e) = tokio::fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), error = %e, "Failed to remove image file");
    }
}
