use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    #[error("HttpError: {0}")]
    Http(#[from] reqwest::Error),

    /// The node answered but refused the upload; the body is passed through
    /// unmodified.
    #[error("upload rejected with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("JsonError: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IoError: {0}")]
    Io(#[from] io::Error),
}
