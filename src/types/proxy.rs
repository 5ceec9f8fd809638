use serde::{Deserialize, Serialize};

use super::{PagedResponse, Resolution, StorageMethod, UploadTarget};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Proxy {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub storage_id: Option<String>,
    #[serde(default)]
    pub storage_method: StorageMethod,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub resolution: Option<Resolution>,
    /// Playback URL once the proxy is transcoded.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub upload_url: Option<String>,
    #[serde(default)]
    pub multipart_upload_url: Option<String>,
}

impl UploadTarget for Proxy {
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

pub type Proxies = PagedResponse<Proxy>;
