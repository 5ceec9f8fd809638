//! Search request body and response models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{File, Format, Keyframe, PagedResponse, Proxy};

/// Catch-all result object: search hits and collection contents are
/// heterogeneous, so everything is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Object {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub date_modified: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub files: Vec<File>,
    #[serde(default)]
    pub proxies: Vec<Proxy>,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
    #[serde(default)]
    pub formats: Vec<Format>,
    #[serde(default)]
    pub in_collections: Vec<String>,
    #[serde(default)]
    pub external_id: Option<String>,
}

/// Body for `POST search/v1/search/`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SearchBody {
    #[serde(default)]
    pub doc_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_view_id: Option<String>,
}

/// A page of search hits plus the sibling facets map.
#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub results: PagedResponse<Object>,
    #[serde(default)]
    pub facets: HashMap<String, serde_json::Value>,
}
