use std::sync::Mutex;

use async_trait::async_trait;
use tokensmith_uploader::{StorageUploader, UploadError};

/// [`StorageUploader`] that records payloads and returns canned URIs.
#[derive(Default)]
pub struct MockUploader {
    uploads: Mutex<Vec<(Vec<u8>, String)>>,
}

impl MockUploader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(payload, content_type)` uploaded so far, in order.
    pub fn uploads(&self) -> Vec<(Vec<u8>, String)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageUploader for MockUploader {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, UploadError> {
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push((bytes, content_type.to_string()));
        Ok(format!("https://gateway.mock/{}", uploads.len()))
    }
}
