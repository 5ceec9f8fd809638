//! Search service.

use reqwest::Method;

use crate::{
    paths::resolve,
    query::PageQuery,
    types::{ApiResponse, SearchBody, SearchResponse},
    Client, Error,
};

const SEARCH_PATH: &str = "search/v1/search/";

/// Endpoint group for the `search/v1` service.
pub struct SearchApi<'a> {
    client: &'a Client,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Runs a search. Results come back paginated, with a sibling facets map.
    pub async fn search(
        &self,
        body: &SearchBody,
        query: &PageQuery,
    ) -> Result<ApiResponse<SearchResponse>, Error> {
        let mut url = self.client.url(&resolve(SEARCH_PATH, &[])?)?;
        query.append_to(&mut url);
        self.client
            .send(self.client.api(Method::POST, url).json(body))
            .await
    }
}
