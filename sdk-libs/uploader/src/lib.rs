//! Upload client for decentralized storage.
//!
//! The storage network accepts a byte buffer and returns a content URI;
//! bundling, chunking and funding happen inside the node, not here.

mod error;
mod irys;
pub mod json;

use std::path::Path;

use async_trait::async_trait;
use serde::Serialize;

pub use error::UploadError;
pub use irys::{IrysUploader, DEVNET_NODE, GATEWAY};

/// Seam over a storage network that accepts a byte buffer and returns a
/// content URI.
#[async_trait]
pub trait StorageUploader: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, UploadError>;

    /// Serialize `value` and upload it as `application/json`.
    async fn upload_json<T: Serialize + Sync>(&self, value: &T) -> Result<String, UploadError> {
        let bytes = serde_json::to_vec(value)?;
        self.upload(bytes, "application/json").await
    }
}

/// Best-effort content type from a file extension.
pub fn content_type_for_path(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("json") => "application/json",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingUploader {
        uploads: Mutex<Vec<(Vec<u8>, String)>>,
    }

    #[async_trait]
    impl StorageUploader for RecordingUploader {
        async fn upload(&self, bytes: Vec<u8>, content_type: &str) -> Result<String, UploadError> {
            let mut uploads = self.uploads.lock().unwrap();
            uploads.push((bytes, content_type.to_string()));
            Ok(format!("https://storage.test/{}", uploads.len()))
        }
    }

    #[tokio::test]
    async fn upload_json_serializes_and_tags_content_type() {
        let uploader = RecordingUploader::default();
        let document = serde_json::json!({ "name": "Generug" });

        let uri = uploader.upload_json(&document).await.unwrap();
        assert_eq!(uri, "https://storage.test/1");

        let uploads = uploader.uploads.lock().unwrap();
        assert_eq!(uploads[0].1, "application/json");
        assert_eq!(uploads[0].0, serde_json::to_vec(&document).unwrap());
    }

    #[test]
    fn content_type_covers_common_assets() {
        assert_eq!(content_type_for_path(Path::new("generug.png")), "image/png");
        assert_eq!(
            content_type_for_path(Path::new("clip.jpeg")),
            "image/jpeg"
        );
        assert_eq!(
            content_type_for_path(Path::new("mystery.bin")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for_path(Path::new("no-extension")),
            "application/octet-stream"
        );
    }
}
