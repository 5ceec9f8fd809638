//! Storage method tags and the upload-target seam.

use serde::{Deserialize, Serialize};

/// Storage method tag carried by files, proxies and keyframes.
///
/// The wire value is an open string: tags this client does not recognize
/// must survive deserialization so the upload coordinator can reject them
/// explicitly at dispatch time instead of the parser dropping them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum StorageMethod {
    /// Google Cloud Storage, resumable-session uploads.
    Gcs,
    /// Amazon S3, multipart uploads via presigned part URLs.
    S3,
    /// Anything else, raw tag preserved.
    Other(String),
}

impl Default for StorageMethod {
    fn default() -> Self {
        StorageMethod::Other(String::new())
    }
}

impl From<String> for StorageMethod {
    fn from(s: String) -> Self {
        match s.as_str() {
            "GCS" => StorageMethod::Gcs,
            "S3" => StorageMethod::S3,
            _ => StorageMethod::Other(s),
        }
    }
}

impl From<StorageMethod> for String {
    fn from(method: StorageMethod) -> Self {
        match method {
            StorageMethod::Gcs => "GCS".to_string(),
            StorageMethod::S3 => "S3".to_string(),
            StorageMethod::Other(s) => s,
        }
    }
}

impl std::fmt::Display for StorageMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMethod::Gcs => write!(f, "GCS"),
            StorageMethod::S3 => write!(f, "S3"),
            StorageMethod::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Anything an upload session can be opened for.
///
/// Files, proxies and keyframes are structurally identical for this concern:
/// a storage method tag plus the provider-issued URL matching it. Exactly one
/// of the two URLs is meaningful, selected by the tag.
pub trait UploadTarget {
    /// The storage method tag.
    fn storage_method(&self) -> &StorageMethod;
    /// Resumable-session initiation URL (GCS only).
    fn upload_url(&self) -> Option<&str>;
    /// Multipart initiation URL (S3 only).
    fn multipart_upload_url(&self) -> Option<&str>;
}
