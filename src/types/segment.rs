use serde::{Deserialize, Serialize};

use super::PagedResponse;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Segment {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub segment_text: Option<String>,
    #[serde(default)]
    pub segment_type: Option<String>,
    #[serde(default)]
    pub time_start_milliseconds: Option<i64>,
    #[serde(default)]
    pub time_end_milliseconds: Option<i64>,
    #[serde(default)]
    pub metadata_view_id: Option<String>,
}

pub type Segments = PagedResponse<Segment>;

/// Body for creating a segment on an asset.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SegmentBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_start_milliseconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_end_milliseconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_view_id: Option<String>,
}
