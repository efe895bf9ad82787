use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-user settings.
///
/// Only the keys this client reads are typed. Everything else the server
/// sends is carried in `other` and written back unchanged on serialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parental_rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_item_days: Option<u32>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
