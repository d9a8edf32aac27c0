use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use business::domain::storage::{FileStorage, ImageFile, StorageError};

/// Keeps product images as flat files under a single directory.
///
/// Objects are reachable at `<public_base_url>/<key>`; the REST layer serves
/// the same directory under that prefix.
pub struct LocalFileStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base_url: public_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys are flat names; anything that could escape the root is refused.
        if key.is_empty() || key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(StorageError::InvalidKey);
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl FileStorage for LocalFileStorage {
    async fn upload(&self, key: &str, file: ImageFile) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        tokio::fs::create_dir_all(&self.root).await.map_err(|err| {
            tracing::error!(root = %self.root.display(), error = %err, "Cannot create storage root");
            StorageError::UploadFailed
        })?;
        tokio::fs::write(&path, &file.data).await.map_err(|err| {
            tracing::error!(key, error = %err, "Image upload failed");
            StorageError::UploadFailed
        })?;

        tracing::debug!(
            key,
            bytes = file.data.len(),
            content_type = file.content_type.as_deref().unwrap_or("unknown"),
            "Stored image"
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(key, "Image already gone");
                Ok(())
            }
            Err(err) => {
                tracing::error!(key, error = %err, "Image delete failed");
                Err(StorageError::DeleteFailed)
            }
        }
    }

    fn object_uri(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}
