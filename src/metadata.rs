//! Metadata service: view-scoped and direct metadata updates.

use reqwest::Method;

use crate::{
    paths::resolve,
    types::{ApiResponse, MetadataValues, ObjectType, UpdateMetadata},
    Client, Error,
};

const ASSET_VIEW_METADATA_PATH: &str = "metadata/v1/assets/{}/views/{}/";
const SEGMENT_VIEW_METADATA_PATH: &str = "metadata/v1/assets/{}/segments/{}/views/{}/";
const OBJECT_METADATA_PATH: &str = "metadata/v1/{}/{}/";

/// Endpoint group for the `metadata/v1` service.
pub struct MetadataApi<'a> {
    client: &'a Client,
}

impl<'a> MetadataApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Metadata of an asset as exposed through a view.
    pub async fn get_asset_metadata(
        &self,
        asset_id: &str,
        view_id: &str,
    ) -> Result<ApiResponse<MetadataValues>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_VIEW_METADATA_PATH, &[asset_id, view_id])?)?;
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn put_asset_view_metadata(
        &self,
        asset_id: &str,
        view_id: &str,
        metadata: &UpdateMetadata,
    ) -> Result<ApiResponse<MetadataValues>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_VIEW_METADATA_PATH, &[asset_id, view_id])?)?;
        self.client
            .send(self.client.api(Method::PUT, url).json(metadata))
            .await
    }

    pub async fn put_segment_view_metadata(
        &self,
        asset_id: &str,
        segment_id: &str,
        view_id: &str,
        metadata: &UpdateMetadata,
    ) -> Result<ApiResponse<MetadataValues>, Error> {
        let url = self.client.url(&resolve(
            SEGMENT_VIEW_METADATA_PATH,
            &[asset_id, segment_id, view_id],
        )?)?;
        self.client
            .send(self.client.api(Method::PUT, url).json(metadata))
            .await
    }

    /// Updates metadata on any object directly, without a view.
    pub async fn put_metadata_direct(
        &self,
        object_type: ObjectType,
        object_id: &str,
        metadata: &UpdateMetadata,
    ) -> Result<ApiResponse<MetadataValues>, Error> {
        let object_type = object_type.to_string();
        let url = self
            .client
            .url(&resolve(OBJECT_METADATA_PATH, &[object_type.as_str(), object_id])?)?;
        self.client
            .send(self.client.api(Method::PUT, url).json(metadata))
            .await
    }
}
