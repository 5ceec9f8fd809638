//! Collections service.

use reqwest::Method;

use crate::{
    paths::resolve,
    query::PageQuery,
    types::{
        AddContentResponse, ApiResponse, Collection, CollectionContentInfo, CollectionContents,
        Content,
    },
    Client, Error,
};

const COLLECTIONS_PATH: &str = "assets/v1/collections/";
const COLLECTION_PATH: &str = "assets/v1/collections/{}/";
const COLLECTION_CONTENTS_PATH: &str = "assets/v1/collections/{}/contents/";
const COLLECTION_INFO_PATH: &str = "assets/v1/collections/{}/contents/info/";

/// Endpoint group for collections under the `assets/v1` service.
pub struct CollectionsApi<'a> {
    client: &'a Client,
}

impl<'a> CollectionsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, body: &Collection) -> Result<ApiResponse<Collection>, Error> {
        let url = self.client.url(&resolve(COLLECTIONS_PATH, &[])?)?;
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }

    pub async fn get(&self, collection_id: &str) -> Result<ApiResponse<Collection>, Error> {
        let url = self
            .client
            .url(&resolve(COLLECTION_PATH, &[collection_id])?)?;
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn delete(&self, collection_id: &str) -> Result<ApiResponse<()>, Error> {
        let url = self
            .client
            .url(&resolve(COLLECTION_PATH, &[collection_id])?)?;
        self.client.send(self.client.api(Method::DELETE, url)).await
    }

    pub async fn get_contents(
        &self,
        collection_id: &str,
        query: &PageQuery,
    ) -> Result<ApiResponse<CollectionContents>, Error> {
        let mut url = self
            .client
            .url(&resolve(COLLECTION_CONTENTS_PATH, &[collection_id])?)?;
        query.append_to(&mut url);
        self.client.send(self.client.api(Method::GET, url)).await
    }

    /// Counts of assets and sub-collections in a collection.
    pub async fn get_info(
        &self,
        collection_id: &str,
    ) -> Result<ApiResponse<CollectionContentInfo>, Error> {
        let url = self
            .client
            .url(&resolve(COLLECTION_INFO_PATH, &[collection_id])?)?;
        self.client.send(self.client.api(Method::GET, url)).await
    }

    pub async fn add_content(
        &self,
        collection_id: &str,
        body: &Content,
    ) -> Result<ApiResponse<AddContentResponse>, Error> {
        let url = self
            .client
            .url(&resolve(COLLECTION_CONTENTS_PATH, &[collection_id])?)?;
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }
}
