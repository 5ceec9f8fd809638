//! Collection models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Object, PagedResponse};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Active,
    Inactive,
    Deleted,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomOrderStatus {
    Enabled,
    Disabled,
}

/// Object kinds a collection (or a metadata call) can reference.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Assets,
    Collections,
    Segments,
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ObjectType::Assets => "assets",
                ObjectType::Collections => "collections",
                ObjectType::Segments => "segments",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Collection {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub custom_order_status: Option<CustomOrderStatus>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

/// Contents listing of a collection. Entries are heterogeneous (assets and
/// sub-collections), so the shared catch-all [`Object`] model is used.
pub type CollectionContents = PagedResponse<Object>;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct CollectionContentInfo {
    #[serde(default)]
    pub assets_count: i64,
    #[serde(default)]
    pub collections_count: i64,
}

/// Body for adding an object to a collection.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Content {
    pub object_id: String,
    pub object_type: ObjectType,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AddContentResponse {
    #[serde(default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}
