use axum::extract::Multipart;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::FileRecord;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("no file uploaded")]
    NoFiles,
    #[error("file {0} exceeds the {1} MB upload limit")]
    TooLarge(String, usize),
    #[error("failed to read multipart body: {0}")]
    Malformed(String),
}

impl UploadError {
    pub fn status(&self) -> StatusCode {
        match self {
            UploadError::NoFiles | UploadError::Malformed(_) => StatusCode::BAD_REQUEST,
            UploadError::TooLarge(_, _) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

/// Drains the multipart body into ordered `FileRecord`s. Any part that
/// carries a filename is a file upload, whatever its field name;
/// non-file fields are ignored. Bytes are accumulated chunk by chunk
/// and a record is finalized only when its part ends; the per-file size
/// cap fails the read outright rather than truncating.
pub async fn read_file_records(
    multipart: &mut Multipart,
    max_file_bytes: usize,
) -> Result<Vec<FileRecord>, UploadError> {
    let mut records = Vec::new();

    loop {
        let mut field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(UploadError::Malformed(e.to_string())),
        };

        let Some(filename) = field.file_name().map(String::from) else {
            continue;
        };
        let declared_mime = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let mut content: Vec<u8> = Vec::new();
        loop {
            let chunk = match field.chunk().await {
                Ok(Some(chunk)) => chunk,
                Ok(None) => break,
                Err(e) => return Err(UploadError::Malformed(e.to_string())),
            };
            if content.len() + chunk.len() > max_file_bytes {
                let limit_mb = max_file_bytes / (1024 * 1024);
                return Err(UploadError::TooLarge(filename, limit_mb));
            }
            content.extend_from_slice(&chunk);
        }

        tracing::debug!(
            filename = %filename,
            content_type = %declared_mime,
            bytes = content.len(),
            "File part received"
        );
        records.push(FileRecord::new(filename, declared_mime, content));
    }

    if records.is_empty() {
        return Err(UploadError::NoFiles);
    }

    Ok(records)
}
