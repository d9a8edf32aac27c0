use async_trait::async_trait;

/// Binary payload of an uploaded image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFile {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage.invalid_key")]
    InvalidKey,
    #[error("storage.upload_failed")]
    UploadFailed,
    #[error("storage.delete_failed")]
    DeleteFailed,
}

/// Port for the blob store holding product images.
#[async_trait]
pub trait FileStorage: Send + Sync {
    async fn upload(&self, key: &str, file: ImageFile) -> Result<(), StorageError>;
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
    /// Publicly retrievable URI of a stored object.
    fn object_uri(&self, key: &str) -> String;
}
