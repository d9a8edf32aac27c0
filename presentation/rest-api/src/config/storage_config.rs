use std::env;

/// Where product images live and the URL prefix they are served under.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub root: String,
    pub public_url: String,
}

impl StorageConfig {
    /// Environment variables:
    /// - STORAGE_ROOT: directory holding images (default: "./uploads")
    /// - STORAGE_PUBLIC_URL: base URL of stored images (default: "http://127.0.0.1:8080/uploads")
    pub fn from_env() -> Self {
        Self {
            root: env::var("STORAGE_ROOT").unwrap_or_else(|_| "./uploads".to_string()),
            public_url: env::var("STORAGE_PUBLIC_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080/uploads".to_string()),
        }
    }
}
