//! File, file-set, format and storage models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PagedResponse, StorageMethod, UploadTarget};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct File {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub file_set_id: Option<String>,
    #[serde(default)]
    pub format_id: Option<String>,
    #[serde(default)]
    pub storage_id: Option<String>,
    #[serde(default)]
    pub storage_method: StorageMethod,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub directory_path: Option<String>,
    #[serde(default)]
    pub size: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
    /// Resumable-session initiation URL, set when `storage_method` is GCS.
    #[serde(default)]
    pub upload_url: Option<String>,
    /// Multipart initiation URL, set when `storage_method` is S3.
    #[serde(default)]
    pub multipart_upload_url: Option<String>,
}

impl UploadTarget for File {
    fn storage_method(&self) -> &StorageMethod {
        &self.storage_method
    }
    fn upload_url(&self) -> Option<&str> {
        self.upload_url.as_deref()
    }
    fn multipart_upload_url(&self) -> Option<&str> {
        self.multipart_upload_url.as_deref()
    }
}

pub type Files = PagedResponse<File>;

/// Body for `POST files/v1/assets/{asset_id}/files/`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileCreate {
    pub file_set_id: String,
    pub format_id: String,
    pub storage_id: String,
    pub name: String,
    pub original_name: String,
    pub size: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FileSet {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub format_id: Option<String>,
    #[serde(default)]
    pub storage_id: Option<String>,
    #[serde(default)]
    pub base_dir: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

pub type FileSets = PagedResponse<FileSet>;

/// Body for `POST files/v1/assets/{asset_id}/file_sets/`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileSetCreate {
    pub name: String,
    pub format_id: String,
    pub storage_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Format {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub archive_status: Option<String>,
    #[serde(default)]
    pub storage_methods: Vec<StorageMethod>,
}

pub type Formats = PagedResponse<Format>;

/// Body for `POST files/v1/assets/{asset_id}/formats/`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FormatCreate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub storage_methods: Vec<StorageMethod>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Storage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub method: StorageMethod,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
}

pub type Storages = PagedResponse<Storage>;

/// Response of the presigned part-URL endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MultipartUrlResponse {
    #[serde(default)]
    pub objects: Vec<PartUrl>,
}

/// One presigned part address. The URL is provider-issued, opaque, and has
/// finite validity.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PartUrl {
    pub number: i64,
    #[serde(default)]
    pub url: Option<String>,
}
