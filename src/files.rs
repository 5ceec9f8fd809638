//! Files service: asset files, file sets, formats, proxies, keyframes,
//! storages, and upload-session coordination.
//!
//! Upload coordination is the one place the client branches on the storage
//! method tag. GCS uses a resumable-session protocol (session id in a
//! response header), S3 uses a multipart protocol (session id in an XML
//! body). Unrecognized tags are rejected before any network call: falling
//! through to either protocol would corrupt the upload.

use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::header::CONTENT_LENGTH;
use reqwest::Method;

use crate::{
    paths::resolve,
    query::PageQuery,
    types::{
        ApiResponse, File, FileCreate, FileSet, FileSetCreate, FileSets, Files, Format,
        FormatCreate, Formats, Keyframe, Keyframes, MultipartUrlResponse, Proxies, Proxy, Storage,
        StorageMethod, Storages, UploadTarget,
    },
    Client, Error,
};

/// Response header carrying the resumable upload session id on GCS.
pub const GCS_UPLOAD_ID_HEADER: &str = "X-GUploader-UploadID";

const ASSET_FILES_PATH: &str = "files/v1/assets/{}/files/";
const ASSET_FILE_PATH: &str = "files/v1/assets/{}/files/{}/";
const ASSET_FILE_SETS_PATH: &str = "files/v1/assets/{}/file_sets/";
const ASSET_FILE_SET_PATH: &str = "files/v1/assets/{}/file_sets/{}/";
const ASSET_FORMATS_PATH: &str = "files/v1/assets/{}/formats/";
const ASSET_FORMAT_PATH: &str = "files/v1/assets/{}/formats/{}/";
const ASSET_PROXIES_PATH: &str = "files/v1/assets/{}/proxies/";
const ASSET_PROXY_PATH: &str = "files/v1/assets/{}/proxies/{}/";
const ASSET_PROXY_PART_URL_PATH: &str = "files/v1/assets/{}/proxies/{}/multipart_url/part/";
const ASSET_KEYFRAMES_PATH: &str = "files/v1/assets/{}/keyframes/";
const ASSET_KEYFRAME_PATH: &str = "files/v1/assets/{}/keyframes/{}/";
const STORAGES_PATH: &str = "files/v1/storages/";
const STORAGE_PATH: &str = "files/v1/storages/{}/";

/// Endpoint group for the `files/v1` service.
pub struct FilesApi<'a> {
    client: &'a Client,
}

impl<'a> FilesApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    // --- files ---

    pub async fn get_asset_files(
        &self,
        asset_id: &str,
        query: &PageQuery,
    ) -> Result<ApiResponse<Files>, Error> {
        let mut url = self.client.url(&resolve(ASSET_FILES_PATH, &[asset_id])?)?;
        query.append_to(&mut url);
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn create_asset_file(
        &self,
        asset_id: &str,
        body: &FileCreate,
    ) -> Result<ApiResponse<File>, Error> {
        let url = self.client.url(&resolve(ASSET_FILES_PATH, &[asset_id])?)?;
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }

    pub async fn delete_asset_file(
        &self,
        asset_id: &str,
        file_id: &str,
    ) -> Result<ApiResponse<()>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_FILE_PATH, &[asset_id, file_id])?)?;
        self.client.send(self.client.api(Method::DELETE, url)).await
    }

    // --- file sets ---

    pub async fn get_asset_file_sets(
        &self,
        asset_id: &str,
        query: &PageQuery,
    ) -> Result<ApiResponse<FileSets>, Error> {
        let mut url = self
            .client
            .url(&resolve(ASSET_FILE_SETS_PATH, &[asset_id])?)?;
        query.append_to(&mut url);
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn create_asset_file_set(
        &self,
        asset_id: &str,
        body: &FileSetCreate,
    ) -> Result<ApiResponse<FileSet>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_FILE_SETS_PATH, &[asset_id])?)?;
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }

    /// Deletes a file set. Returns 204 on immediate deletion or 200 with the
    /// file set marked `deleted`; the envelope carries either.
    pub async fn delete_asset_file_set(
        &self,
        asset_id: &str,
        file_set_id: &str,
    ) -> Result<ApiResponse<FileSet>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_FILE_SET_PATH, &[asset_id, file_set_id])?)?;
        self.client.send(self.client.api(Method::DELETE, url)).await
    }

    // --- formats ---

    pub async fn get_asset_formats(
        &self,
        asset_id: &str,
        query: &PageQuery,
    ) -> Result<ApiResponse<Formats>, Error> {
        let mut url = self.client.url(&resolve(ASSET_FORMATS_PATH, &[asset_id])?)?;
        query.append_to(&mut url);
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn get_asset_format(
        &self,
        asset_id: &str,
        format_id: &str,
    ) -> Result<ApiResponse<Format>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_FORMAT_PATH, &[asset_id, format_id])?)?;
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn create_asset_format(
        &self,
        asset_id: &str,
        body: &FormatCreate,
    ) -> Result<ApiResponse<Format>, Error> {
        let url = self.client.url(&resolve(ASSET_FORMATS_PATH, &[asset_id])?)?;
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }

    // --- proxies ---

    pub async fn get_asset_proxies(
        &self,
        asset_id: &str,
        query: &PageQuery,
    ) -> Result<ApiResponse<Proxies>, Error> {
        let mut url = self.client.url(&resolve(ASSET_PROXIES_PATH, &[asset_id])?)?;
        query.append_to(&mut url);
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn get_asset_proxy(
        &self,
        asset_id: &str,
        proxy_id: &str,
    ) -> Result<ApiResponse<Proxy>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_PROXY_PATH, &[asset_id, proxy_id])?)?;
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn create_asset_proxy(
        &self,
        asset_id: &str,
        body: &Proxy,
    ) -> Result<ApiResponse<Proxy>, Error> {
        let url = self.client.url(&resolve(ASSET_PROXIES_PATH, &[asset_id])?)?;
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }

    pub async fn update_asset_proxy(
        &self,
        asset_id: &str,
        proxy_id: &str,
        body: &Proxy,
    ) -> Result<ApiResponse<Proxy>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_PROXY_PATH, &[asset_id, proxy_id])?)?;
        self.client
            .send(self.client.api(Method::PATCH, url).json(body))
            .await
    }

    // --- keyframes ---

    pub async fn get_asset_keyframes(
        &self,
        asset_id: &str,
        query: &PageQuery,
    ) -> Result<ApiResponse<Keyframes>, Error> {
        let mut url = self
            .client
            .url(&resolve(ASSET_KEYFRAMES_PATH, &[asset_id])?)?;
        query.append_to(&mut url);
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn get_asset_keyframe(
        &self,
        asset_id: &str,
        keyframe_id: &str,
    ) -> Result<ApiResponse<Keyframe>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_KEYFRAME_PATH, &[asset_id, keyframe_id])?)?;
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn create_asset_keyframe(
        &self,
        asset_id: &str,
        body: &Keyframe,
    ) -> Result<ApiResponse<Keyframe>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_KEYFRAMES_PATH, &[asset_id])?)?;
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }

    pub async fn update_asset_keyframe(
        &self,
        asset_id: &str,
        keyframe_id: &str,
        body: &Keyframe,
    ) -> Result<ApiResponse<Keyframe>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_KEYFRAME_PATH, &[asset_id, keyframe_id])?)?;
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }

    pub async fn partial_update_asset_keyframe(
        &self,
        asset_id: &str,
        keyframe_id: &str,
        body: &Keyframe,
    ) -> Result<ApiResponse<Keyframe>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_KEYFRAME_PATH, &[asset_id, keyframe_id])?)?;
        self.client
            .send(self.client.api(Method::PATCH, url).json(body))
            .await
    }

    pub async fn delete_asset_keyframe(
        &self,
        asset_id: &str,
        keyframe_id: &str,
    ) -> Result<ApiResponse<()>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_KEYFRAME_PATH, &[asset_id, keyframe_id])?)?;
        self.client.send(self.client.api(Method::DELETE, url)).await
    }

    // --- storages ---

    pub async fn get_storage(&self, storage_id: &str) -> Result<ApiResponse<Storage>, Error> {
        let url = self.client.url(&resolve(STORAGE_PATH, &[storage_id])?)?;
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn get_storages(&self, query: &PageQuery) -> Result<ApiResponse<Storages>, Error> {
        let mut url = self.client.url(&resolve(STORAGES_PATH, &[])?)?;
        query.append_to(&mut url);
        self.client.send(self.client.api(Method::GET, url)).await
    }

    // --- upload coordination ---

    /// Opens an upload session for a file, proxy or keyframe, abstracting the
    /// provider handshake behind one opaque session id.
    ///
    /// The unrecognized-tag check comes first: no request is issued for a
    /// storage method this client cannot speak.
    pub async fn get_upload_id<T: UploadTarget>(&self, target: &T) -> Result<String, Error> {
        match target.storage_method() {
            StorageMethod::Gcs => {
                let url = target.upload_url().ok_or(Error::MissingUploadUrl("GCS"))?;
                let resp = self
                    .client
                    .http()
                    .post(url)
                    .header(CONTENT_LENGTH, "0")
                    .send()
                    .await?;
                let upload_id = resp
                    .headers()
                    .get(GCS_UPLOAD_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .ok_or(Error::MissingUploadIdHeader(GCS_UPLOAD_ID_HEADER))?;
                Ok(upload_id.to_string())
            }
            StorageMethod::S3 => {
                let url = target
                    .multipart_upload_url()
                    .ok_or(Error::MissingUploadUrl("S3"))?;
                let resp = self.client.http().post(url).send().await?;
                let body = resp.text().await?;
                multipart_upload_id(&body)
            }
            StorageMethod::Other(tag) => {
                tracing::error!("refusing upload with unrecognized storage method {:?}", tag);
                Err(Error::UnsupportedStorageMethod(tag.clone()))
            }
        }
    }

    /// Fetches the proxy record, then opens an upload session for it.
    pub async fn get_proxy_upload_id(
        &self,
        asset_id: &str,
        proxy_id: &str,
    ) -> Result<String, Error> {
        let resp = self.get_asset_proxy(asset_id, proxy_id).await?;
        let status = resp.status.as_u16();
        let proxy = resp.data.ok_or_else(|| Error::ResourceUnavailable {
            kind: "proxy",
            id: proxy_id.to_string(),
            status,
        })?;
        self.get_upload_id(&proxy).await
    }

    /// Requests a presigned URL for uploading one part of a multipart (S3)
    /// upload session. Part numbers are 1-based; non-positive numbers are a
    /// caller error and no request is issued.
    pub async fn get_part_upload_url(
        &self,
        asset_id: &str,
        proxy_id: &str,
        upload_id: &str,
        part_number: i64,
    ) -> Result<ApiResponse<MultipartUrlResponse>, Error> {
        if part_number < 1 {
            return Err(Error::InvalidPartNumber(part_number));
        }
        let mut url = self
            .client
            .url(&resolve(ASSET_PROXY_PART_URL_PATH, &[asset_id, proxy_id])?)?;
        url.query_pairs_mut()
            .append_pair("upload_id", upload_id)
            .append_pair("part_number", &part_number.to_string());
        self.client.send(self.client.api(Method::GET, url)).await
    }
}

/// Extracts the `UploadId` element from an S3 `InitiateMultipartUploadResult`
/// body.
fn multipart_upload_id(body: &str) -> Result<String, Error> {
    let mut reader = Reader::from_str(body);
    let mut in_upload_id = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"UploadId" => in_upload_id = true,
            Ok(Event::Text(t)) if in_upload_id => {
                let text = t.unescape().map_err(|e| {
                    tracing::error!("undecodable multipart initiation body: {}", e);
                    Error::MalformedInitiationBody
                })?;
                let id = text.trim();
                if id.is_empty() {
                    return Err(Error::MalformedInitiationBody);
                }
                return Ok(id.to_string());
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"UploadId" => {
                // open/close with no text
                return Err(Error::MalformedInitiationBody);
            }
            Ok(Event::Eof) => return Err(Error::MalformedInitiationBody),
            Ok(_) => {}
            Err(e) => {
                tracing::error!("malformed multipart initiation body: {}", e);
                return Err(Error::MalformedInitiationBody);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_upload_id_from_initiation_body() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<InitiateMultipartUploadResult xmlns="http://s3.amazonaws.com/doc/2006-03-01/">
  <Bucket>media-bucket</Bucket>
  <Key>clips/game7.mp4</Key>
  <UploadId>VXBsb2FkSWQtZXhhbXBsZQ</UploadId>
</InitiateMultipartUploadResult>"#;
        assert_eq!(
            multipart_upload_id(body).unwrap(),
            "VXBsb2FkSWQtZXhhbXBsZQ"
        );
    }

    #[test]
    fn body_without_upload_id_is_malformed() {
        let body = "<InitiateMultipartUploadResult><Bucket>b</Bucket></InitiateMultipartUploadResult>";
        assert!(matches!(
            multipart_upload_id(body),
            Err(Error::MalformedInitiationBody)
        ));
    }

    #[test]
    fn empty_upload_id_is_malformed() {
        let body = "<InitiateMultipartUploadResult><UploadId></UploadId></InitiateMultipartUploadResult>";
        assert!(matches!(
            multipart_upload_id(body),
            Err(Error::MalformedInitiationBody)
        ));
    }

    #[test]
    fn non_xml_body_is_malformed() {
        assert!(matches!(
            multipart_upload_id("502 Bad Gateway"),
            Err(Error::MalformedInitiationBody)
        ));
    }
}
