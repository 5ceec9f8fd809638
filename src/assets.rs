//! Assets service: asset records and their segments.

use reqwest::Method;

use crate::{
    paths::resolve,
    query::SegmentQuery,
    types::{ApiResponse, Asset, Segment, SegmentBody, Segments},
    Client, Error,
};

const ASSET_PATH: &str = "assets/v1/assets/{}/";
const ASSET_SEGMENTS_PATH: &str = "assets/v1/assets/{}/segments/";

/// Endpoint group for the `assets/v1` service.
pub struct AssetsApi<'a> {
    client: &'a Client,
}

impl<'a> AssetsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self, asset_id: &str) -> Result<ApiResponse<Asset>, Error> {
        let url = self.client.url(&resolve(ASSET_PATH, &[asset_id])?)?;
        self.client.send(self.client.api(Method::GET, url)).await
    }

    /// Lists an asset's segments, optionally filtered by type and time range.
    pub async fn get_segments(
        &self,
        asset_id: &str,
        query: &SegmentQuery,
    ) -> Result<ApiResponse<Segments>, Error> {
        let mut url = self
            .client
            .url(&resolve(ASSET_SEGMENTS_PATH, &[asset_id])?)?;
        query.append_to(&mut url);
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn create_segment(
        &self,
        asset_id: &str,
        body: &SegmentBody,
    ) -> Result<ApiResponse<Segment>, Error> {
        let url = self
            .client
            .url(&resolve(ASSET_SEGMENTS_PATH, &[asset_id])?)?;
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }
}
