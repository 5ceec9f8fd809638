//! Metadata mutation and response models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FieldValue {
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FieldValues {
    #[serde(default)]
    pub field_values: Vec<FieldValue>,
}

/// Body for metadata update calls: field name to its list of values.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UpdateMetadata {
    #[serde(default)]
    pub metadata_values: HashMap<String, FieldValues>,
}

/// Metadata as stored on an object, returned by get and put calls.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MetadataValues {
    #[serde(default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub metadata_values: HashMap<String, FieldValues>,
    #[serde(default)]
    pub version_id: Option<String>,
}
